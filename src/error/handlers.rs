//! Error handlers
//!
//! Reports load failures to the user and to the log.

use std::io::{self, Write};

use log::error;

use crate::error::types::{AppError, LoadError};
use crate::messages;

/// Log an application error
pub fn handle_error(err: &AppError) {
    error!("Account query error: {}", err);
}

/// Convert a load error into the message shown at the prompt
pub fn load_error_message(err: &LoadError) -> String {
    match err {
        LoadError::FileNotFound(_) => messages::FILE_NOT_FOUND.to_string(),
        LoadError::Read { source, .. } => messages::read_failed(source),
    }
}

/// Print a load error for the user and record it in the log
pub fn report_load_error<W: Write>(err: &LoadError, out: &mut W) -> io::Result<()> {
    error!("{}", err);
    writeln!(out, "{}", load_error_message(err))
}
