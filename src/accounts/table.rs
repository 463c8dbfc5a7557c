//! In-memory account table
//!
//! Maps usernames to passwords. Built fresh from the accounts file and
//! discarded when the session no longer needs it.

use std::collections::HashMap;

use super::loader::Record;
use super::results::LookupResult;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AccountTable {
    accounts: HashMap<String, String>,
}

impl AccountTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, returning the password it replaced.
    ///
    /// The last record for a username wins.
    pub fn insert(&mut self, username: String, password: String) -> Option<String> {
        self.accounts.insert(username, password)
    }

    pub fn insert_record(&mut self, record: Record) -> Option<String> {
        self.insert(record.username, record.password)
    }

    pub fn get(&self, username: &str) -> Option<&str> {
        self.accounts.get(username).map(String::as_str)
    }

    pub fn contains(&self, username: &str) -> bool {
        self.accounts.contains_key(username)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Looks up `username` and packages the outcome for display.
    pub fn lookup(&self, username: &str) -> LookupResult {
        match self.get(username) {
            Some(password) => LookupResult::Found {
                username: username.to_string(),
                password: password.to_string(),
            },
            None => LookupResult::NotFound {
                username: username.to_string(),
            },
        }
    }
}

impl FromIterator<Record> for AccountTable {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut table = AccountTable::new();
        for record in iter {
            table.insert_record(record);
        }
        table
    }
}
