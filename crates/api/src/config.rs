// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Client configuration.
//!
//! The notification endpoint is chosen by environment. Either default can
//! be overridden with an explicit base URL.

use crate::error::ApiError;
use chrono_tz::Tz;
use std::str::FromStr;
use std::time::Duration;
use wdw_reminders_domain::{DEFAULT_DISPLAY_TIME, DEFAULT_DISPLAY_ZONE};

/// Base URL of the local development notification service.
pub const DEVELOPMENT_BASE_URL: &str = "http://localhost:8000";

/// Base URL of the hosted notification service.
pub const PRODUCTION_BASE_URL: &str = "https://disney-reminders-backend.herokuapp.com";

/// Path of the submission endpoint, relative to the base URL.
pub const SUBMIT_EMAIL_PATH: &str = "/api/submitEmail";

/// How long a submission may stay in flight.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Deployment environment of the notification service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// A notification service on the local machine.
    Development,
    /// The hosted notification service.
    #[default]
    Production,
}

impl Environment {
    #[must_use]
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Development => DEVELOPMENT_BASE_URL,
            Self::Production => PRODUCTION_BASE_URL,
        }
    }
}

impl FromStr for Environment {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => Err(ApiError::InvalidConfig {
                field: "environment",
                message: format!("unknown environment '{other}'"),
            }),
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

/// Settings for talking to the notification service and rendering dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    timeout: Duration,
    display_zone: Tz,
    display_time: String,
}

impl ClientConfig {
    /// Default settings for an environment.
    #[must_use]
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            base_url: environment.base_url().to_string(),
            timeout: DEFAULT_TIMEOUT,
            display_zone: DEFAULT_DISPLAY_ZONE,
            display_time: DEFAULT_DISPLAY_TIME.to_string(),
        }
    }

    /// Overrides the base URL.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidConfig` unless the URL is `http` or `https`.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ApiError> {
        let trimmed: &str = base_url.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ApiError::InvalidConfig {
                field: "base_url",
                message: format!("'{base_url}' must start with http:// or https://"),
            });
        }
        self.base_url = trimmed.to_string();
        Ok(self)
    }

    /// Overrides the submission timeout.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidConfig` for a zero timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, ApiError> {
        if timeout.is_zero() {
            return Err(ApiError::InvalidConfig {
                field: "timeout",
                message: String::from("timeout must be greater than zero"),
            });
        }
        self.timeout = timeout;
        Ok(self)
    }

    #[must_use]
    pub fn with_display_zone(mut self, zone: Tz) -> Self {
        self.display_zone = zone;
        self
    }

    #[must_use]
    pub fn with_display_time(mut self, display_time: &str) -> Self {
        self.display_time = display_time.to_string();
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the submission endpoint.
    #[must_use]
    pub fn submit_url(&self) -> String {
        format!("{}{SUBMIT_EMAIL_PATH}", self.base_url)
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    #[must_use]
    pub const fn display_zone(&self) -> Tz {
        self.display_zone
    }

    #[must_use]
    pub fn display_time(&self) -> &str {
        &self.display_time
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}
