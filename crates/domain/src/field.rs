// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Routing of server-reported failures to form fields.
//!
//! The notification service either names the field it rejected
//! (structured replies) or sends free text. Free text is routed by a
//! case-insensitive substring match on the field names; a message that
//! names no field goes to the general banner.

use serde::{Deserialize, Serialize};

/// A form field that can display an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldTag {
    /// The email input.
    Email,
    /// The arrival date picker.
    Date,
    /// The phone input.
    Phone,
    /// A banner not tied to any input.
    General,
}

impl FieldTag {
    /// Inputs whose names are searched for in free-text messages, in display order.
    pub const ROUTABLE: [Self; 3] = [Self::Date, Self::Email, Self::Phone];

    /// The word searched for in free-text messages.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Date => "date",
            Self::Phone => "phone",
            Self::General => "general",
        }
    }
}

impl std::fmt::Display for FieldTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// A server-reported failure and the fields it should be shown on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    fields: Vec<FieldTag>,
    message: String,
}

impl FieldError {
    /// Routes a free-text message by substring match.
    ///
    /// Every field whose name appears in the message is tagged. A message
    /// naming none of them is tagged `General`.
    #[must_use]
    pub fn from_message(message: &str) -> Self {
        let lowered: String = message.to_lowercase();
        let mut fields: Vec<FieldTag> = FieldTag::ROUTABLE
            .into_iter()
            .filter(|field| lowered.contains(field.keyword()))
            .collect();

        if fields.is_empty() {
            fields.push(FieldTag::General);
        }

        Self {
            fields,
            message: message.to_string(),
        }
    }

    /// A message the server attributed to one field explicitly.
    #[must_use]
    pub fn tagged(field: FieldTag, message: &str) -> Self {
        Self {
            fields: vec![field],
            message: message.to_string(),
        }
    }

    #[must_use]
    pub fn fields(&self) -> &[FieldTag] {
        &self.fields
    }

    /// The message, verbatim.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn shows_on(&self, field: FieldTag) -> bool {
        self.fields.contains(&field)
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}
