//! User-facing messages
//!
//! Prompts and result lines printed to the console.

use std::fmt::Display;

pub const WELCOME: &str = "Welcome to the account password lookup";
pub const USERNAME_PROMPT: &str = "Enter username: ";
pub const CONTINUE_PROMPT: &str = "Continue querying? (y/n): ";
pub const NOT_FOUND: &str = "Account does not exist, please check your input!";
pub const LOAD_FAILED: &str = "Unable to load account data, exiting.";
pub const GOODBYE: &str = "Exiting.";
pub const FILE_NOT_FOUND: &str = "Error: account file not found!";

/// Format a successful lookup
pub fn password_found(username: &str, password: &str) -> String {
    format!("Password for account {} is: {}", username, password)
}

/// Format an unexpected read failure
pub fn read_failed(err: impl Display) -> String {
    format!("Error reading file: {}", err)
}
