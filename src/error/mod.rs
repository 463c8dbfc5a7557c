//! Error handling
//!
//! Defines error types and reporting for the account query tool.

pub mod handlers;
pub mod types;

pub use types::*;
