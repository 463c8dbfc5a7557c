//! Accounts file loader
//!
//! Parses `username:password` lines into an [`AccountTable`]. Only the first
//! colon separates the fields, so passwords may contain colons. Lines without
//! a colon are skipped.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use log::{debug, info};

use super::table::AccountTable;
use crate::error::LoadError;
use crate::error::handlers::report_load_error;

/// One `username:password` line of the accounts file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub username: String,
    pub password: String,
}

/// Parses a single line. Surrounding whitespace is stripped first.
pub fn parse_record(line: &str) -> Option<Record> {
    let (username, password) = line.trim().split_once(':')?;
    Some(Record {
        username: username.to_string(),
        password: password.to_string(),
    })
}

/// Builds a table from every line of `reader`.
///
/// Fails on the first I/O error, including content that is not valid UTF-8.
pub fn parse_accounts<R: BufRead>(reader: R) -> io::Result<AccountTable> {
    let mut table = AccountTable::new();
    let mut skipped = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        match parse_record(&line) {
            Some(record) => {
                if table.insert_record(record).is_some() {
                    debug!("Line {}: duplicate username replaces earlier entry", index + 1);
                }
            }
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!("Skipped {} line(s) without a separator", skipped);
    }
    Ok(table)
}

/// Opens and parses the accounts file at `path`.
pub fn try_load_accounts(path: &Path) -> Result<AccountTable, LoadError> {
    let file = File::open(path).map_err(|e| LoadError::from_io(path, e))?;
    let table = parse_accounts(BufReader::new(file)).map_err(|e| LoadError::from_io(path, e))?;
    info!("Loaded {} account(s) from {}", table.len(), path.display());
    Ok(table)
}

/// Loads the accounts file, reporting any failure to `out`.
///
/// A missing or unreadable file yields an empty table. Only a failure to
/// write the report itself is returned as an error.
pub fn load_accounts<W: Write>(path: &Path, out: &mut W) -> io::Result<AccountTable> {
    match try_load_accounts(path) {
        Ok(table) => Ok(table),
        Err(err) => {
            report_load_error(&err, out)?;
            Ok(AccountTable::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages;
    use std::io::Cursor;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_record_splits_on_first_colon() {
        assert_eq!(
            parse_record("carol:pa:ss:word"),
            Some(Record {
                username: "carol".to_string(),
                password: "pa:ss:word".to_string()
            })
        );
    }

    #[test]
    fn test_parse_record_strips_whitespace() {
        let record = parse_record("  alice:secret1 \r\n").unwrap();
        assert_eq!(record.username, "alice");
        assert_eq!(record.password, "secret1");
    }

    #[test]
    fn test_parse_record_without_colon() {
        assert_eq!(parse_record("malformed"), None);
        assert_eq!(parse_record(""), None);
    }

    #[test]
    fn test_parse_record_empty_fields() {
        let record = parse_record(":only-password").unwrap();
        assert_eq!(record.username, "");
        assert_eq!(record.password, "only-password");

        let record = parse_record("only-user:").unwrap();
        assert_eq!(record.password, "");
    }

    #[test]
    fn test_parse_accounts() {
        let input = "alice:secret1\nmalformed\nbob:secret2\n\nalice:again\n";
        let table = parse_accounts(Cursor::new(input)).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("alice"), Some("again"));
        assert_eq!(table.get("bob"), Some("secret2"));
    }

    #[test]
    fn test_parse_accounts_rejects_invalid_utf8() {
        let input: &[u8] = b"alice:secret1\n\xff\xfe:bad\n";
        let err = parse_accounts(Cursor::new(input)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "alice:secret1").unwrap();
        writeln!(file, "bob:secret2").unwrap();

        let mut out = Vec::new();
        let table = load_accounts(file.path(), &mut out).unwrap();
        assert_eq!(table.get("alice"), Some("secret1"));
        assert_eq!(table.get("bob"), Some("secret2"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("accounts.txt");

        assert!(matches!(
            try_load_accounts(&path),
            Err(LoadError::FileNotFound(_))
        ));

        let mut out = Vec::new();
        let table = load_accounts(&path, &mut out).unwrap();
        assert!(table.is_empty());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("{}\n", messages::FILE_NOT_FOUND)
        );
    }

    #[test]
    fn test_load_directory_is_read_error() {
        let dir = tempfile::tempdir().unwrap();

        let mut out = Vec::new();
        let table = load_accounts(dir.path(), &mut out).unwrap();
        assert!(table.is_empty());
        assert!(String::from_utf8(out).unwrap().starts_with("Error reading file: "));
    }
}
