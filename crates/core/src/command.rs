// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::{ServerReply, SubmissionFailure};

/// A command represents user or network intent as data only.
///
/// Commands are the only way to request state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// The date picker yielded a value.
    PickArrival {
        /// Raw picker output; may be an invalid-date sentinel.
        input: String,
    },
    /// The resort-stay checkbox changed.
    SetStayingOnProperty {
        /// Whether the visitor is staying on property.
        staying: bool,
    },
    /// The email input changed.
    SetEmail {
        /// The email as typed.
        email: String,
    },
    /// The phone input changed.
    SetPhone {
        /// The phone number as typed.
        phone: String,
    },
    /// The visitor pressed the submit button.
    Submit,
    /// The notification service answered.
    ReplyReceived {
        /// The attempt this reply belongs to.
        attempt: u64,
        /// The interpreted reply.
        reply: ServerReply,
    },
    /// The request never produced a reply.
    RequestFailed {
        /// The attempt that failed.
        attempt: u64,
        /// Why it failed.
        failure: SubmissionFailure,
    },
    /// The visitor chose to register another email after a success.
    AddAnother,
}
