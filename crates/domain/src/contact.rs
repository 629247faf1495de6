// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use regex::Regex;
use std::sync::LazyLock;

#[allow(clippy::unwrap_used)]
static RE_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i-u)^([\w.%+-]+)@([\w-]+\.)+(\w{2,})$").unwrap());

/// Checks that an email address has a plausible `local@domain.tld` shape.
///
/// Word characters are ASCII only. Only the shape is checked; deliverability
/// is left to the notification service.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    RE_EMAIL.is_match(email)
}

/// Strips every character that is not an ASCII digit.
#[must_use]
pub fn digits_only(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

/// Contact details entered on the reminder form.
///
/// Values are kept exactly as typed; validation and phone cleanup happen
/// when they are read for submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInfo {
    email: String,
    phone: String,
}

impl ContactInfo {
    #[must_use]
    pub fn new(email: &str, phone: &str) -> Self {
        Self {
            email: email.to_string(),
            phone: phone.to_string(),
        }
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The phone number as typed, formatting characters included.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Returns a copy with a new email.
    #[must_use]
    pub fn with_email(&self, email: &str) -> Self {
        Self {
            email: email.to_string(),
            phone: self.phone.clone(),
        }
    }

    /// Returns a copy with a new phone number.
    #[must_use]
    pub fn with_phone(&self, phone: &str) -> Self {
        Self {
            email: self.email.clone(),
            phone: phone.to_string(),
        }
    }

    #[must_use]
    pub fn has_valid_email(&self) -> bool {
        is_valid_email(&self.email)
    }

    /// The phone number with formatting removed; empty when none was given.
    #[must_use]
    pub fn phone_digits(&self) -> String {
        digits_only(&self.phone)
    }

    /// Whether the visitor asked for a text message as well.
    #[must_use]
    pub fn has_phone(&self) -> bool {
        !self.phone_digits().is_empty()
    }
}
