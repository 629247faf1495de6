// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reminder window calculation for a planned arrival.
//!
//! This module derives the dates on which booking windows open:
//! - Advance Dining Reservations open 180 days before arrival
//! - FastPass+ selections open 60 days before arrival for resort guests,
//!   30 days before for everyone else
//!
//! ## Invariants
//!
//! - Arrival dates are anchored at 12:00 UTC before any arithmetic
//! - Windows are whole calendar days before the anchored arrival
//! - The calendar day a visitor picked never depends on the zone of the
//!   machine doing the calculation
//! - Derived windows are always recomputed in full, never edited
//!
//! ## Usage
//!
//! ```text
//! arrival  = 2025-12-25 (on property)
//! dining   = 2025-06-28T12:00:00Z (180 days out)
//! fastpass = 2025-10-26T12:00:00Z (60 days out)
//! ```

use crate::error::DomainError;
use crate::format::format_local_date;
use chrono::{DateTime, Days, NaiveDate, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;

/// Days between dining reservations opening and arrival.
pub const DINING_OFFSET_DAYS: u32 = 180;

/// Days between `FastPass+` selection opening and arrival for off-property guests.
pub const FASTPASS_OFFSET_DAYS: u32 = 30;

/// Days between `FastPass+` selection opening and arrival for resort guests.
pub const FASTPASS_OFFSET_DAYS_ON_PROPERTY: u32 = 60;

/// Hour of day (UTC) every arrival date is pinned to.
pub const ANCHOR_HOUR_UTC: i64 = 12;

/// Where visitors can check whether their hotel counts as on-property.
pub const RESORT_LIST_URL: &str =
    "https://disneyworld.disney.go.com/faq/resorts/resort-hotel-list/";

const DINING_BOOKING_URL: &str = "https://disneyworld.disney.go.com/dining";
const FASTPASS_BOOKING_URL: &str =
    "https://disneyworld.disney.go.com/fastpass-plus/select-party/";

/// Parses date-picker input into the calendar date the visitor chose.
///
/// Accepted forms:
/// - `YYYY-MM-DD`
/// - `MM/DD/YYYY`
/// - RFC 3339 instants; the calendar date is taken in the instant's own offset
///
/// # Errors
///
/// Returns `DomainError::DateParseError` for anything else, including the
/// `Invalid Date` sentinel some pickers emit.
pub fn parse_arrival_input(input: &str) -> Result<NaiveDate, DomainError> {
    let trimmed: &str = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%m/%d/%Y") {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|instant| instant.date_naive())
        .map_err(|err| DomainError::DateParseError {
            date_string: input.to_string(),
            error: err.to_string(),
        })
}

/// Pins a calendar date at the fixed midday anchor in UTC.
///
/// # Errors
///
/// Returns `DomainError::DateArithmeticOverflow` at the very end of the
/// representable calendar.
pub fn anchor_arrival(date: NaiveDate) -> Result<DateTime<Utc>, DomainError> {
    date.and_time(chrono::NaiveTime::MIN)
        .and_utc()
        .checked_add_signed(TimeDelta::hours(ANCHOR_HOUR_UTC))
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: format!("anchoring arrival date {date} at midday"),
        })
}

/// Subtracts whole calendar days from an anchored arrival.
///
/// # Errors
///
/// Returns `DomainError::DateArithmeticOverflow` if the result falls before
/// the start of the representable calendar.
pub fn derive_window(
    arrival: DateTime<Utc>,
    offset_days: u32,
) -> Result<DateTime<Utc>, DomainError> {
    arrival
        .checked_sub_days(Days::new(u64::from(offset_days)))
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: format!("subtracting {offset_days} days from {arrival}"),
        })
}

/// Returns the `FastPass+` offset for the given resort-stay flag.
#[must_use]
pub const fn fast_pass_offset_days(staying_on_property: bool) -> u32 {
    if staying_on_property {
        FASTPASS_OFFSET_DAYS_ON_PROPERTY
    } else {
        FASTPASS_OFFSET_DAYS
    }
}

/// Whether a booking window has opened at `now`.
#[must_use]
pub fn is_window_open(open_date: &DateTime<Utc>, now: &DateTime<Utc>) -> bool {
    now >= open_date
}

/// A committed arrival date pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrivalSelection {
    arrival: DateTime<Utc>,
    staying_on_property: bool,
}

impl ArrivalSelection {
    /// Creates a selection for a calendar date.
    ///
    /// # Errors
    ///
    /// Returns an error if the date cannot be anchored.
    pub fn new(date: NaiveDate, staying_on_property: bool) -> Result<Self, DomainError> {
        Ok(Self {
            arrival: anchor_arrival(date)?,
            staying_on_property,
        })
    }

    /// Creates a selection from a zoned instant, keeping the calendar day as
    /// seen in that instant's zone.
    ///
    /// # Errors
    ///
    /// Returns an error if the date cannot be anchored.
    pub fn from_zoned<Z: TimeZone>(
        picked: &DateTime<Z>,
        staying_on_property: bool,
    ) -> Result<Self, DomainError> {
        Self::new(picked.date_naive(), staying_on_property)
    }

    /// The anchored arrival instant.
    #[must_use]
    pub const fn arrival(&self) -> DateTime<Utc> {
        self.arrival
    }

    /// The arrival calendar date.
    #[must_use]
    pub fn arrival_date(&self) -> NaiveDate {
        self.arrival.date_naive()
    }

    #[must_use]
    pub const fn staying_on_property(&self) -> bool {
        self.staying_on_property
    }

    /// Returns the same arrival with a different resort-stay flag.
    #[must_use]
    pub const fn with_resort_stay(self, staying_on_property: bool) -> Self {
        Self {
            arrival: self.arrival,
            staying_on_property,
        }
    }

    #[must_use]
    pub const fn fast_pass_offset_days(&self) -> u32 {
        fast_pass_offset_days(self.staying_on_property)
    }
}

/// The kind of booking window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowKind {
    /// Advance Dining Reservations.
    Dining,
    /// `FastPass+` selections.
    FastPass,
}

impl WindowKind {
    /// Short label shown next to the window.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dining => "ADR Reservations",
            Self::FastPass => "FP+ Reservations",
        }
    }

    /// Booking portal for this window.
    #[must_use]
    pub const fn booking_url(self) -> &'static str {
        match self {
            Self::Dining => DINING_BOOKING_URL,
            Self::FastPass => FASTPASS_BOOKING_URL,
        }
    }
}

impl std::fmt::Display for WindowKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dining => write!(f, "dining"),
            Self::FastPass => write!(f, "fastpass"),
        }
    }
}

/// A computed window-open date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedWindow {
    kind: WindowKind,
    open_date: DateTime<Utc>,
    offset_days: u32,
}

impl DerivedWindow {
    /// Derives a window of `kind` opening `offset_days` before `arrival`.
    ///
    /// # Errors
    ///
    /// Returns an error if the subtraction overflows.
    pub fn derive(
        kind: WindowKind,
        arrival: DateTime<Utc>,
        offset_days: u32,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            kind,
            open_date: derive_window(arrival, offset_days)?,
            offset_days,
        })
    }

    #[must_use]
    pub const fn kind(&self) -> WindowKind {
        self.kind
    }

    #[must_use]
    pub const fn open_date(&self) -> DateTime<Utc> {
        self.open_date
    }

    #[must_use]
    pub const fn offset_days(&self) -> u32 {
        self.offset_days
    }

    #[must_use]
    pub fn is_open_at(&self, now: &DateTime<Utc>) -> bool {
        is_window_open(&self.open_date, now)
    }

    /// Describes whether the window can be booked at `now`, and if not, when.
    #[must_use]
    pub fn availability(
        &self,
        now: &DateTime<Utc>,
        zone: Tz,
        display_time: &str,
    ) -> WindowAvailability {
        if self.is_open_at(now) {
            WindowAvailability::OpenNow {
                booking_url: self.kind.booking_url(),
            }
        } else {
            WindowAvailability::OpensOn {
                date: format_local_date(&self.open_date, zone),
                time: display_time.to_string(),
            }
        }
    }
}

/// What the visitor can do about a window right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowAvailability {
    /// The window is already open.
    OpenNow {
        /// Where to book.
        booking_url: &'static str,
    },
    /// The window opens later.
    OpensOn {
        /// Formatted local open date.
        date: String,
        /// Fixed display time.
        time: String,
    },
}

impl std::fmt::Display for WindowAvailability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OpenNow { booking_url } => {
                write!(f, "You can make these reservations today! {booking_url}")
            }
            Self::OpensOn { date, time } => write!(f, "{date} at {time}"),
        }
    }
}

/// An arrival selection together with both windows derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderPlan {
    selection: ArrivalSelection,
    dining: DerivedWindow,
    fast_pass: DerivedWindow,
}

impl ReminderPlan {
    /// Derives both windows from a selection.
    ///
    /// # Errors
    ///
    /// Returns an error if either subtraction overflows.
    pub fn derive(selection: ArrivalSelection) -> Result<Self, DomainError> {
        let dining = DerivedWindow::derive(
            WindowKind::Dining,
            selection.arrival(),
            DINING_OFFSET_DAYS,
        )?;
        let fast_pass = DerivedWindow::derive(
            WindowKind::FastPass,
            selection.arrival(),
            selection.fast_pass_offset_days(),
        )?;

        Ok(Self {
            selection,
            dining,
            fast_pass,
        })
    }

    /// Rebuilds the plan with a different resort-stay flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the `FastPass+` subtraction overflows.
    pub fn with_resort_stay(&self, staying_on_property: bool) -> Result<Self, DomainError> {
        Self::derive(self.selection.with_resort_stay(staying_on_property))
    }

    #[must_use]
    pub const fn selection(&self) -> &ArrivalSelection {
        &self.selection
    }

    #[must_use]
    pub const fn dining(&self) -> &DerivedWindow {
        &self.dining
    }

    #[must_use]
    pub const fn fast_pass(&self) -> &DerivedWindow {
        &self.fast_pass
    }

    /// Both windows, dining first.
    #[must_use]
    pub const fn windows(&self) -> [&DerivedWindow; 2] {
        [&self.dining, &self.fast_pass]
    }
}
