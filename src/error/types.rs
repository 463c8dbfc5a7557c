//! Error types
//!
//! Defines the error types for account loading and the query session.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failures while reading the accounts file
#[derive(Debug)]
pub enum LoadError {
    FileNotFound(PathBuf),
    Read { path: PathBuf, source: io::Error },
}

impl LoadError {
    /// Classifies an I/O error raised while loading `path`.
    pub fn from_io(path: impl Into<PathBuf>, error: io::Error) -> Self {
        let path = path.into();
        match error.kind() {
            io::ErrorKind::NotFound => LoadError::FileNotFound(path),
            _ => LoadError::Read {
                path,
                source: error,
            },
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::FileNotFound(p) => write!(f, "Accounts file not found: {}", p.display()),
            LoadError::Read { path, source } => {
                write!(f, "Failed to read {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::FileNotFound(_) => None,
            LoadError::Read { source, .. } => Some(source),
        }
    }
}

/// Top-level application error
#[derive(Debug)]
pub enum AppError {
    Config(config::ConfigError),
    IoError(io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "Configuration error: {}", e),
            AppError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl From<config::ConfigError> for AppError {
    fn from(error: config::ConfigError) -> Self {
        AppError::Config(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        AppError::IoError(error)
    }
}
