pub mod accounts;
pub mod config;
pub mod error;
pub mod messages;
pub mod session;
pub mod utils;

pub use accounts::{AccountTable, LookupResult};
pub use crate::config::AppConfig;
pub use session::QuerySession;
