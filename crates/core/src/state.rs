// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use wdw_reminders_domain::{ContactInfo, FieldError, FieldTag, ReminderPlan};

const CONFIRMATION_EMAIL: &str = "Thank you! We've sent you a confirmation email.";
const CONFIRMATION_EMAIL_AND_TEXT: &str =
    "Thank you! We've sent you a confirmation email and text.";

/// How the notification service answered a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerReply {
    /// The reminder was accepted.
    Success,
    /// The reminder was rejected with a message for the visitor.
    Rejected(FieldError),
}

/// Why a submission attempt failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionFailure {
    /// The service rejected the submission.
    Rejected(FieldError),
    /// No reply arrived within the configured timeout.
    Timeout,
    /// The caller stopped waiting before a reply arrived.
    Cancelled,
    /// The request could not be delivered or its reply could not be read.
    Transport {
        /// Description of the transport failure.
        message: String,
    },
}

impl SubmissionFailure {
    /// Whether this failure should be displayed on `field`.
    ///
    /// Failures that never reached the service belong to the general banner.
    #[must_use]
    pub fn shows_on(&self, field: FieldTag) -> bool {
        match self {
            Self::Rejected(error) => error.shows_on(field),
            Self::Timeout | Self::Cancelled | Self::Transport { .. } => {
                field == FieldTag::General
            }
        }
    }
}

impl std::fmt::Display for SubmissionFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejected(error) => write!(f, "{error}"),
            Self::Timeout => write!(
                f,
                "The reminder service did not respond in time. Please try again."
            ),
            Self::Cancelled => write!(
                f,
                "The reminder request was cancelled before a reply arrived. Please try again."
            ),
            Self::Transport { message } => {
                write!(f, "Could not reach the reminder service: {message}")
            }
        }
    }
}

/// The lifecycle of the form's submission.
///
/// The loading indicator is `Submitting`; it is never tracked separately.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionOutcome {
    /// Nothing submitted yet, or reset after a success.
    #[default]
    Idle,
    /// A request is in flight.
    Submitting {
        /// The 1-based attempt number of the in-flight request.
        attempt: u64,
    },
    /// The service accepted the reminder.
    Succeeded,
    /// The last attempt failed.
    Failed(SubmissionFailure),
}

/// Why the submit action is currently unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocker {
    /// A request is already in flight.
    InFlight,
    /// The current contact was already registered; use "add another".
    AlreadySucceeded,
    /// No valid arrival date has been picked.
    NoArrivalDate,
    /// The email does not look like an email address.
    InvalidEmail,
}

impl std::fmt::Display for SubmitBlocker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InFlight => write!(f, "a submission is already in progress"),
            Self::AlreadySucceeded => write!(f, "this reminder was already registered"),
            Self::NoArrivalDate => write!(f, "no arrival date has been selected"),
            Self::InvalidEmail => write!(f, "the email address is not valid"),
        }
    }
}

/// Everything the outbound request is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionDraft {
    /// The attempt this draft was issued for.
    pub attempt: u64,
    /// The email as typed.
    pub email: String,
    /// The phone number, digits only; empty when none was given.
    pub phone_digits: String,
    /// The arrival and the windows derived from it.
    pub plan: ReminderPlan,
}

/// Work the caller must perform after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send exactly one request to the notification service.
    Send(SubmissionDraft),
}

/// The complete state of one reminder form session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    plan: Option<ReminderPlan>,
    staying_on_property: bool,
    contact: ContactInfo,
    outcome: SubmissionOutcome,
    attempts: u64,
}

impl FormState {
    /// Creates an empty form. The resort-stay box starts checked.
    #[must_use]
    pub fn new() -> Self {
        Self {
            plan: None,
            staying_on_property: true,
            contact: ContactInfo::default(),
            outcome: SubmissionOutcome::Idle,
            attempts: 0,
        }
    }

    /// The current arrival and derived windows, if a date has been picked.
    #[must_use]
    pub const fn plan(&self) -> Option<&ReminderPlan> {
        self.plan.as_ref()
    }

    #[must_use]
    pub const fn staying_on_property(&self) -> bool {
        self.staying_on_property
    }

    #[must_use]
    pub const fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    #[must_use]
    pub const fn outcome(&self) -> &SubmissionOutcome {
        &self.outcome
    }

    /// Number of submit attempts issued in this session.
    #[must_use]
    pub const fn attempts(&self) -> u64 {
        self.attempts
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.outcome, SubmissionOutcome::Submitting { .. })
    }

    /// The attempt awaiting a reply, if any.
    #[must_use]
    pub const fn in_flight_attempt(&self) -> Option<u64> {
        match self.outcome {
            SubmissionOutcome::Submitting { attempt } => Some(attempt),
            _ => None,
        }
    }

    /// The first reason the submit button would be disabled.
    #[must_use]
    pub fn submit_blocker(&self) -> Option<SubmitBlocker> {
        match self.outcome {
            SubmissionOutcome::Submitting { .. } => return Some(SubmitBlocker::InFlight),
            SubmissionOutcome::Succeeded => return Some(SubmitBlocker::AlreadySucceeded),
            SubmissionOutcome::Idle | SubmissionOutcome::Failed(_) => {}
        }

        if self.plan.is_none() {
            return Some(SubmitBlocker::NoArrivalDate);
        }

        if !self.contact.has_valid_email() {
            return Some(SubmitBlocker::InvalidEmail);
        }

        None
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.submit_blocker().is_none()
    }

    /// The failure to display on `field`, if the last attempt failed there.
    #[must_use]
    pub fn failure_on(&self, field: FieldTag) -> Option<&SubmissionFailure> {
        match &self.outcome {
            SubmissionOutcome::Failed(failure) if failure.shows_on(field) => Some(failure),
            _ => None,
        }
    }

    /// The thank-you headline shown after a success.
    #[must_use]
    pub fn confirmation_message(&self) -> Option<&'static str> {
        if self.outcome != SubmissionOutcome::Succeeded {
            return None;
        }

        if self.contact.has_phone() {
            Some(CONFIRMATION_EMAIL_AND_TEXT)
        } else {
            Some(CONFIRMATION_EMAIL)
        }
    }

    pub(crate) fn set_plan(&mut self, plan: Option<ReminderPlan>) {
        self.plan = plan;
    }

    pub(crate) const fn set_staying_on_property(&mut self, staying: bool) {
        self.staying_on_property = staying;
    }

    pub(crate) fn set_contact(&mut self, contact: ContactInfo) {
        self.contact = contact;
    }

    pub(crate) fn set_outcome(&mut self, outcome: SubmissionOutcome) {
        self.outcome = outcome;
    }

    /// Allocates the next attempt number.
    pub(crate) const fn next_attempt(&mut self) -> u64 {
        self.attempts += 1;
        self.attempts
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: FormState,
    /// Work the caller must carry out, if any.
    pub effect: Option<Effect>,
}
