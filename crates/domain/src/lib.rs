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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod contact;
mod error;
mod field;
mod format;
mod window;

#[cfg(test)]
mod tests;

pub use contact::{ContactInfo, digits_only, is_valid_email};
pub use error::DomainError;
pub use field::{FieldError, FieldTag};
pub use format::{DEFAULT_DISPLAY_TIME, DEFAULT_DISPLAY_ZONE, format_local_date, parse_timezone};
pub use window::{
    ANCHOR_HOUR_UTC, ArrivalSelection, DINING_OFFSET_DAYS, DerivedWindow, FASTPASS_OFFSET_DAYS,
    FASTPASS_OFFSET_DAYS_ON_PROPERTY, RESORT_LIST_URL, ReminderPlan, WindowAvailability,
    WindowKind, anchor_arrival, derive_window, fast_pass_offset_days, is_window_open,
    parse_arrival_input,
};

// Re-exported so downstream crates agree on the calendar types.
pub use chrono;
pub use chrono_tz;
