// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use std::time::Duration;
use thiserror::Error;
use wdw_reminders::{CoreError, SubmissionFailure};

/// API-level errors.
///
/// These are distinct from domain/core errors and cover the network
/// boundary and client configuration.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No reply arrived within the configured timeout.
    #[error("Notification request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// The request could not be sent or its reply could not be read.
    #[error("Notification request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with no message at all.
    #[error("Notification endpoint returned HTTP {status} with an empty body")]
    EmptyResponse { status: u16 },

    /// The form rejected the requested transition.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A configuration value is unusable.
    #[error("Invalid configuration for {field}: {message}")]
    InvalidConfig {
        field: &'static str,
        message: String,
    },
}

impl ApiError {
    /// Builds a timeout error for the given limit.
    #[must_use]
    pub fn timeout(limit: Duration) -> Self {
        Self::Timeout {
            timeout_ms: u64::try_from(limit.as_millis()).unwrap_or(u64::MAX),
        }
    }

    /// How a failed request is recorded on the form.
    #[must_use]
    pub fn to_failure(&self) -> SubmissionFailure {
        match self {
            Self::Timeout { .. } => SubmissionFailure::Timeout,
            other => SubmissionFailure::Transport {
                message: other.to_string(),
            },
        }
    }
}
