//! Account Query - Entry Point
//!
//! Prompts for usernames and prints the matching password from a
//! `username:password` file.

use std::io;

use account_query::config::AppConfig;
use account_query::error::AppError;
use account_query::error::handlers::handle_error;
use account_query::session::QuerySession;
use account_query::utils::logging::setup_logging;
use log::{info, warn};

fn main() {
    setup_logging();

    let config = load_config();
    info!("Using accounts file {}", config.accounts_file);

    if let Err(e) = run(config) {
        handle_error(&e);
    }
}

fn load_config() -> AppConfig {
    match AppConfig::load().map_err(AppError::from) {
        Ok(config) => config,
        Err(e) => {
            handle_error(&e);
            warn!("Falling back to default configuration");
            AppConfig::default()
        }
    }
}

fn run(config: AppConfig) -> Result<(), AppError> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut session = QuerySession::new(config, stdin.lock(), stdout.lock());
    session.greet()?;
    session.run()?;
    Ok(())
}
