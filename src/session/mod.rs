//! Interactive query session
//!
//! Runs the prompt loop: load the table, ask for a username, print the
//! result, and ask whether to continue.

pub mod core;
pub mod prompt;
pub mod state;

pub use self::core::{ExitReason, QuerySession, SessionSummary};
pub use state::SessionState;
