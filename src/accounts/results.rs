//! Lookup result types
//!
//! Defines the outcome of querying the account table.

use crate::messages;

/// Result of a username lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    Found { username: String, password: String },
    NotFound { username: String },
}

impl LookupResult {
    pub fn is_found(&self) -> bool {
        matches!(self, LookupResult::Found { .. })
    }

    /// The line shown to the user for this result.
    pub fn message(&self) -> String {
        match self {
            LookupResult::Found { username, password } => {
                messages::password_found(username, password)
            }
            LookupResult::NotFound { .. } => messages::NOT_FOUND.to_string(),
        }
    }
}
