// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Submission controller.
//!
//! Owns one form session, feeds user input through the state machine and
//! performs the single outbound call a submit produces.
//!
//! ## Invariants
//!
//! - Exactly one request per accepted submit; no automatic retry
//! - Every request ends in `Succeeded` or `Failed` within the configured timeout
//! - Dropping the future returned by `submit` abandons the request and ends
//!   the attempt as `Failed(Cancelled)`

use crate::client::NotificationClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::request_response::SubmitEmailRequest;
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};
use wdw_reminders::{
    Command, CoreError, Effect, FormState, ServerReply, SubmissionFailure, SubmissionOutcome,
    apply,
};
use wdw_reminders_domain::{WindowAvailability, WindowKind, parse_arrival_input};

/// A derived window prepared for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSummary {
    /// Which window this is.
    pub kind: WindowKind,
    /// Days before arrival the window opens.
    pub offset_days: u32,
    /// Book now, or when.
    pub availability: WindowAvailability,
}

/// Drives a reminder form session against a notification client.
#[derive(Debug)]
pub struct SubmissionController<C> {
    state: FormState,
    client: C,
    config: ClientConfig,
}

impl<C: NotificationClient> SubmissionController<C> {
    /// Creates a controller with an empty form.
    #[must_use]
    pub fn new(client: C, config: ClientConfig) -> Self {
        Self {
            state: FormState::new(),
            client,
            config,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &FormState {
        &self.state
    }

    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[must_use]
    pub const fn client(&self) -> &C {
        &self.client
    }

    /// Records a date-picker value.
    ///
    /// Returns `false` when the value was not a valid date; the previous
    /// pick and its windows are left in place.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Core` if the state machine rejects the change.
    pub fn pick_arrival(&mut self, input: &str) -> Result<bool, ApiError> {
        let accepted: bool = parse_arrival_input(input).is_ok();
        if !accepted {
            debug!(input, "Ignoring invalid arrival date");
        }

        self.dispatch(Command::PickArrival {
            input: input.to_string(),
        })?;
        Ok(accepted)
    }

    /// Records the resort-stay checkbox.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Core` if the windows cannot be recomputed.
    pub fn set_staying_on_property(&mut self, staying: bool) -> Result<(), ApiError> {
        self.dispatch(Command::SetStayingOnProperty { staying })?;
        Ok(())
    }

    /// Records the email input.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Core` if the state machine rejects the change.
    pub fn set_email(&mut self, email: &str) -> Result<(), ApiError> {
        self.dispatch(Command::SetEmail {
            email: email.to_string(),
        })?;
        Ok(())
    }

    /// Records the phone input.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Core` if the state machine rejects the change.
    pub fn set_phone(&mut self, phone: &str) -> Result<(), ApiError> {
        self.dispatch(Command::SetPhone {
            phone: phone.to_string(),
        })?;
        Ok(())
    }

    /// Whether the submit button should be enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.state.can_submit()
    }

    /// Submits the form and waits for the outcome.
    ///
    /// Transport failures and timeouts are not errors here: they end the
    /// attempt as `Failed` and are returned as the outcome. If the returned
    /// future is dropped first, the attempt ends as `Failed(Cancelled)`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Core` if submitting is currently unavailable, in
    /// which case nothing is sent.
    pub async fn submit(&mut self) -> Result<&SubmissionOutcome, ApiError> {
        let Some(Effect::Send(draft)) = self.dispatch(Command::Submit)? else {
            return Ok(self.state.outcome());
        };

        let attempt: u64 = draft.attempt;
        let request: SubmitEmailRequest = SubmitEmailRequest::from_draft(&draft, &self.config);
        info!(
            attempt,
            with_phone = !draft.phone_digits.is_empty(),
            "Submitting reminder request"
        );

        let in_flight: InFlight<'_> = InFlight::new(&mut self.state, attempt);

        let command: Command = match tokio::time::timeout(
            self.config.timeout(),
            self.client.submit(&request),
        )
        .await
        {
            Ok(Ok(reply)) => {
                match &reply {
                    ServerReply::Success => info!(attempt, "Reminder accepted"),
                    ServerReply::Rejected(error) => {
                        info!(attempt, fields = ?error.fields(), "Reminder rejected");
                    }
                }
                Command::ReplyReceived { attempt, reply }
            }
            Ok(Err(err)) => {
                warn!(attempt, error = %err, "Reminder request failed");
                Command::RequestFailed {
                    attempt,
                    failure: err.to_failure(),
                }
            }
            Err(_) => {
                warn!(
                    attempt,
                    timeout = ?self.config.timeout(),
                    "Reminder request timed out"
                );
                Command::RequestFailed {
                    attempt,
                    failure: SubmissionFailure::Timeout,
                }
            }
        };

        in_flight.settle(command)?;
        Ok(self.state.outcome())
    }

    /// Clears the contact fields after a success so another email can be added.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Core` unless the last submission succeeded.
    pub fn add_another(&mut self) -> Result<(), ApiError> {
        self.dispatch(Command::AddAnother)?;
        Ok(())
    }

    /// Describes both windows as of `now`, dining first.
    ///
    /// Empty until a valid arrival date has been picked.
    #[must_use]
    pub fn window_summaries(&self, now: &DateTime<Utc>) -> Vec<WindowSummary> {
        self.state
            .plan()
            .map(|plan| {
                plan.windows()
                    .into_iter()
                    .map(|window| WindowSummary {
                        kind: window.kind(),
                        offset_days: window.offset_days(),
                        availability: window.availability(
                            now,
                            self.config.display_zone(),
                            self.config.display_time(),
                        ),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn dispatch(&mut self, command: Command) -> Result<Option<Effect>, ApiError> {
        let result = apply(&self.state, command)?;
        self.state = result.new_state;
        Ok(result.effect)
    }
}

/// Holds the form while a request is in flight.
///
/// If it is dropped before `settle`, the attempt is recorded as cancelled so
/// the form never stays `Submitting`.
struct InFlight<'a> {
    state: &'a mut FormState,
    attempt: u64,
    settled: bool,
}

impl<'a> InFlight<'a> {
    const fn new(state: &'a mut FormState, attempt: u64) -> Self {
        Self {
            state,
            attempt,
            settled: false,
        }
    }

    fn settle(mut self, command: Command) -> Result<(), CoreError> {
        let result = apply(self.state, command)?;
        *self.state = result.new_state;
        self.settled = true;
        Ok(())
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }

        let command: Command = Command::RequestFailed {
            attempt: self.attempt,
            failure: SubmissionFailure::Cancelled,
        };
        match apply(self.state, command) {
            Ok(result) => {
                warn!(attempt = self.attempt, "Reminder request cancelled");
                *self.state = result.new_state;
            }
            Err(err) => debug!(attempt = self.attempt, error = %err, "Attempt already settled"),
        }
    }
}
