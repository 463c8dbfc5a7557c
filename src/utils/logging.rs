//! Logging utilities
//!
//! Log records go to stderr so they never mix with prompts on stdout.

use env_logger::{Builder, Env, Target};

/// Setup logging, honouring `RUST_LOG` and defaulting to warnings only
pub fn setup_logging() {
    Builder::from_env(Env::default().default_filter_or("warn"))
        .target(Target::Stderr)
        .init();
}
