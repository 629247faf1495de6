// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Human-readable rendering of reminder dates.
//!
//! Open dates are stored as UTC instants anchored at midday, so any display
//! zone within eleven hours of UTC renders the same calendar day.

use crate::error::DomainError;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Zone used for human-readable dates unless configured otherwise.
pub const DEFAULT_DISPLAY_ZONE: Tz = chrono_tz::America::New_York;

/// Time of day shown next to a booking date.
///
/// This is a fixed label, not derived from the open instant.
pub const DEFAULT_DISPLAY_TIME: &str = "7:00am EST";

const SHORT_DATE_FORMAT: &str = "%m/%d/%Y";

/// Formats an instant as a short `MM/DD/YYYY` date in the given zone.
#[must_use]
pub fn format_local_date(instant: &DateTime<Utc>, zone: Tz) -> String {
    instant
        .with_timezone(&zone)
        .format(SHORT_DATE_FORMAT)
        .to_string()
}

/// Parses an IANA timezone name.
///
/// # Errors
///
/// Returns `DomainError::InvalidTimezone` if the name is unknown.
pub fn parse_timezone(name: &str) -> Result<Tz, DomainError> {
    name.parse::<Tz>()
        .map_err(|_| DomainError::InvalidTimezone(name.to_string()))
}
