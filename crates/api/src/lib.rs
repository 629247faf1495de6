// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod client;
mod config;
mod controller;
mod error;
mod request_response;

#[cfg(test)]
mod tests;

pub use client::{HttpNotificationClient, NotificationClient};
pub use config::{
    ClientConfig, DEFAULT_TIMEOUT, DEVELOPMENT_BASE_URL, Environment, PRODUCTION_BASE_URL,
    SUBMIT_EMAIL_PATH,
};
pub use controller::{SubmissionController, WindowSummary};
pub use error::ApiError;
pub use request_response::{
    ReminderUser, SUCCESS_MESSAGE, StructuredReply, SubmitEmailRequest, parse_reply,
};
