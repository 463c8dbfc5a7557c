//! Account table
//!
//! Loads `username:password` records from a flat file and answers lookups.

pub mod loader;
pub mod results;
pub mod table;

pub use loader::{Record, load_accounts, parse_accounts, parse_record, try_load_accounts};
pub use results::LookupResult;
pub use table::AccountTable;
