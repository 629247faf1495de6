// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::SubmitBlocker;
use wdw_reminders_domain::DomainError;

/// Errors that can occur during state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// Submit was requested while the submit action is disabled.
    SubmitUnavailable(SubmitBlocker),
    /// A reply or failure arrived for an attempt that is not in flight.
    StaleReply {
        /// The attempt the reply was for.
        attempt: u64,
    },
    /// The command is not valid in the current submission state.
    InvalidTransition {
        /// The command that was rejected.
        command: &'static str,
        /// The state it was rejected in.
        state: &'static str,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::SubmitUnavailable(blocker) => write!(f, "Submit unavailable: {blocker}"),
            Self::StaleReply { attempt } => {
                write!(f, "Reply for attempt {attempt} arrived but it is not in flight")
            }
            Self::InvalidTransition { command, state } => {
                write!(f, "Cannot {command} while {state}")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
