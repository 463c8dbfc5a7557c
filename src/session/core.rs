//! Query loop
//!
//! Drives one interactive session over any input/output pair. The accounts
//! file is re-read before every query unless `reload_each_query` is off.

use std::io::{self, BufRead, Write};

use log::{debug, info, warn};

use crate::accounts::{AccountTable, load_accounts};
use crate::config::AppConfig;
use crate::messages;
use crate::session::prompt::ask;
use crate::session::state::SessionState;

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The user answered something other than "y"
    Declined,
    /// Input closed while waiting at a prompt
    EndOfInput,
    /// The accounts file yielded no accounts
    NoAccounts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub queries: usize,
    pub reason: ExitReason,
}

pub struct QuerySession<R, W> {
    config: AppConfig,
    input: R,
    out: W,
    state: SessionState,
}

impl<R: BufRead, W: Write> QuerySession<R, W> {
    pub fn new(config: AppConfig, input: R, out: W) -> Self {
        Self {
            config,
            input,
            out,
            state: SessionState::default(),
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Prints the welcome banner.
    pub fn greet(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", messages::WELCOME)
    }

    /// Runs the loop until the user declines, input ends, or no accounts load.
    ///
    /// Only console write and read failures are returned as errors.
    pub fn run(&mut self) -> io::Result<SessionSummary> {
        let path = self.config.accounts_path();
        let mut cached: Option<AccountTable> = None;
        let mut queries = 0;

        info!("Starting query session on {}", path.display());

        while !self.state.is_terminal() {
            let table = match cached.take() {
                Some(table) => table,
                None => load_accounts(&path, &mut self.out)?,
            };

            if table.is_empty() {
                warn!("No accounts available in {}", path.display());
                writeln!(self.out, "{}", messages::LOAD_FAILED)?;
                return Ok(self.finish(queries, ExitReason::NoAccounts));
            }

            let Some(username) = ask(&mut self.input, &mut self.out, messages::USERNAME_PROMPT)?
            else {
                return self.end_of_input(queries);
            };

            let result = table.lookup(&username);
            writeln!(self.out, "{}", result.message())?;
            queries += 1;
            debug!("Query {} for {:?}: found={}", queries, username, result.is_found());

            if !self.config.reload_each_query {
                cached = Some(table);
            }

            let answer = ask(&mut self.input, &mut self.out, messages::CONTINUE_PROMPT)?;
            self.state = self.state.next(answer.as_deref());
            if answer.is_none() {
                return self.end_of_input(queries);
            }
        }

        writeln!(self.out, "{}", messages::GOODBYE)?;
        Ok(self.finish(queries, ExitReason::Declined))
    }

    fn end_of_input(&mut self, queries: usize) -> io::Result<SessionSummary> {
        // The prompt is still on the current line.
        writeln!(self.out)?;
        writeln!(self.out, "{}", messages::GOODBYE)?;
        Ok(self.finish(queries, ExitReason::EndOfInput))
    }

    fn finish(&mut self, queries: usize, reason: ExitReason) -> SessionSummary {
        self.state = SessionState::Exiting;
        info!("Session ended after {} queries: {:?}", queries, reason);
        SessionSummary { queries, reason }
    }
}
