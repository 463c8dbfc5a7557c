//! Session state
//!
//! Two states: `Prompting` loops on a "y" answer, anything else moves to the
//! terminal `Exiting` state.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Prompting,
    Exiting,
}

impl SessionState {
    /// Transition on the answer to the continue prompt.
    ///
    /// `None` means the input stream ended.
    pub fn next(self, answer: Option<&str>) -> SessionState {
        match (self, answer) {
            (SessionState::Prompting, Some(answer)) if wants_to_continue(answer) => {
                SessionState::Prompting
            }
            _ => SessionState::Exiting,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == SessionState::Exiting
    }
}

/// Only a single `y` or `Y` continues.
fn wants_to_continue(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("y")
}
