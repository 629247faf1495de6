// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wire contract of the notification service.
//!
//! The request body wraps the reminder in a `user` object with camelCase
//! keys. Replies are a single message: the exact text `Success!` means the
//! reminder was accepted, anything else is shown to the visitor. Replies
//! may also be a JSON object naming the rejected field.

use crate::config::ClientConfig;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use wdw_reminders::{ServerReply, SubmissionDraft};
use wdw_reminders_domain::{FieldError, FieldTag, format_local_date};

/// The only reply text treated as success.
pub const SUCCESS_MESSAGE: &str = "Success!";

/// Body of `POST /api/submitEmail`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitEmailRequest {
    /// The reminder being registered.
    pub user: ReminderUser,
}

/// The reminder fields of a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderUser {
    /// Email as typed.
    pub email: String,
    /// Dining window open instant.
    pub dining_date: DateTime<Utc>,
    /// `FastPass+` window open instant.
    pub fast_pass_date: DateTime<Utc>,
    /// Time of day to show next to the dates.
    pub local_time: String,
    /// Dining open date, formatted for display.
    pub local_dining_date: String,
    /// `FastPass+` open date, formatted for display.
    pub local_fast_pass_date: String,
    /// Phone digits; empty when no text reminder was requested.
    #[serde(default)]
    pub phone: String,
}

impl SubmitEmailRequest {
    /// Builds the wire body for a draft issued by the form.
    #[must_use]
    pub fn from_draft(draft: &SubmissionDraft, config: &ClientConfig) -> Self {
        let dining_date: DateTime<Utc> = draft.plan.dining().open_date();
        let fast_pass_date: DateTime<Utc> = draft.plan.fast_pass().open_date();

        Self {
            user: ReminderUser {
                email: draft.email.clone(),
                dining_date,
                fast_pass_date,
                local_time: config.display_time().to_string(),
                local_dining_date: format_local_date(&dining_date, config.display_zone()),
                local_fast_pass_date: format_local_date(&fast_pass_date, config.display_zone()),
                phone: draft.phone_digits.clone(),
            },
        }
    }
}

/// A reply object that names the rejected field explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredReply {
    /// The field at fault, if the service knows it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<FieldTag>,
    /// Message for the visitor.
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireReply {
    Message(String),
    Structured(StructuredReply),
}

/// Interprets a reply body.
///
/// Only the exact text `Success!` is a success. Structured replies with a
/// field tag are routed to that field. Bare messages fall back to routing by
/// the field names they mention, and are kept exactly as sent.
#[must_use]
pub fn parse_reply(body: &str) -> ServerReply {
    match serde_json::from_str::<WireReply>(body) {
        Ok(WireReply::Message(message)) => reply_from_message(&message),
        Ok(WireReply::Structured(StructuredReply { field, message })) => match field {
            Some(field) if message != SUCCESS_MESSAGE => {
                ServerReply::Rejected(FieldError::tagged(field, &message))
            }
            _ => reply_from_message(&message),
        },
        Err(_) => reply_from_message(body),
    }
}

fn reply_from_message(message: &str) -> ServerReply {
    if message == SUCCESS_MESSAGE {
        ServerReply::Success
    } else {
        ServerReply::Rejected(FieldError::from_message(message))
    }
}
