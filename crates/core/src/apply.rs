// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{
    Effect, FormState, ServerReply, SubmissionDraft, SubmissionFailure, SubmissionOutcome,
    SubmitBlocker, TransitionResult,
};
use wdw_reminders_domain::{
    ArrivalSelection, ContactInfo, DomainError, ReminderPlan, parse_arrival_input,
};

/// Applies a command to the form state, producing the next state and any
/// effect the caller must run.
///
/// # Arguments
///
/// * `state` - The current form state (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and optional effect
/// * `Err(CoreError)` if the command is not valid in the current state
///
/// # Errors
///
/// Returns an error if:
/// - Submit is requested while a `SubmitBlocker` applies
/// - A reply or failure arrives for an attempt that is not in flight
/// - "Add another" is requested before a success
/// - Recomputing windows after a resort-stay change overflows
///
/// Unparseable date-picker input is not an error: the state is returned
/// unchanged.
pub fn apply(state: &FormState, command: Command) -> Result<TransitionResult, CoreError> {
    match command {
        Command::PickArrival { input } => {
            let Ok(plan) = plan_for_input(&input, state.staying_on_property()) else {
                return Ok(unchanged(state));
            };

            let mut new_state: FormState = state.clone();
            new_state.set_plan(Some(plan));
            Ok(changed(new_state))
        }
        Command::SetStayingOnProperty { staying } => {
            let plan: Option<ReminderPlan> = state
                .plan()
                .map(|plan| plan.with_resort_stay(staying))
                .transpose()?;

            let mut new_state: FormState = state.clone();
            new_state.set_staying_on_property(staying);
            new_state.set_plan(plan);
            Ok(changed(new_state))
        }
        Command::SetEmail { email } => {
            let mut new_state: FormState = state.clone();
            new_state.set_contact(state.contact().with_email(&email));
            Ok(changed(new_state))
        }
        Command::SetPhone { phone } => {
            let mut new_state: FormState = state.clone();
            new_state.set_contact(state.contact().with_phone(&phone));
            Ok(changed(new_state))
        }
        Command::Submit => {
            if let Some(blocker) = state.submit_blocker() {
                return Err(CoreError::SubmitUnavailable(blocker));
            }

            let Some(plan) = state.plan().copied() else {
                return Err(CoreError::SubmitUnavailable(SubmitBlocker::NoArrivalDate));
            };

            let mut new_state: FormState = state.clone();
            let attempt: u64 = new_state.next_attempt();
            new_state.set_outcome(SubmissionOutcome::Submitting { attempt });

            let draft: SubmissionDraft = SubmissionDraft {
                attempt,
                email: state.contact().email().to_string(),
                phone_digits: state.contact().phone_digits(),
                plan,
            };

            Ok(TransitionResult {
                new_state,
                effect: Some(Effect::Send(draft)),
            })
        }
        Command::ReplyReceived { attempt, reply } => {
            ensure_in_flight(state, attempt)?;

            let outcome: SubmissionOutcome = match reply {
                ServerReply::Success => SubmissionOutcome::Succeeded,
                ServerReply::Rejected(error) => {
                    SubmissionOutcome::Failed(SubmissionFailure::Rejected(error))
                }
            };

            let mut new_state: FormState = state.clone();
            new_state.set_outcome(outcome);
            Ok(changed(new_state))
        }
        Command::RequestFailed { attempt, failure } => {
            ensure_in_flight(state, attempt)?;

            let mut new_state: FormState = state.clone();
            new_state.set_outcome(SubmissionOutcome::Failed(failure));
            Ok(changed(new_state))
        }
        Command::AddAnother => {
            if *state.outcome() != SubmissionOutcome::Succeeded {
                return Err(CoreError::InvalidTransition {
                    command: "add another email",
                    state: outcome_name(state.outcome()),
                });
            }

            // The arrival date and windows are kept for the next email.
            let mut new_state: FormState = state.clone();
            new_state.set_contact(ContactInfo::default());
            new_state.set_outcome(SubmissionOutcome::Idle);
            Ok(changed(new_state))
        }
    }
}

fn plan_for_input(input: &str, staying_on_property: bool) -> Result<ReminderPlan, DomainError> {
    let date = parse_arrival_input(input)?;
    let selection: ArrivalSelection = ArrivalSelection::new(date, staying_on_property)?;
    ReminderPlan::derive(selection)
}

fn ensure_in_flight(state: &FormState, attempt: u64) -> Result<(), CoreError> {
    if state.in_flight_attempt() == Some(attempt) {
        Ok(())
    } else {
        Err(CoreError::StaleReply { attempt })
    }
}

const fn outcome_name(outcome: &SubmissionOutcome) -> &'static str {
    match outcome {
        SubmissionOutcome::Idle => "idle",
        SubmissionOutcome::Submitting { .. } => "submitting",
        SubmissionOutcome::Succeeded => "succeeded",
        SubmissionOutcome::Failed(_) => "failed",
    }
}

fn unchanged(state: &FormState) -> TransitionResult {
    TransitionResult {
        new_state: state.clone(),
        effect: None,
    }
}

fn changed(new_state: FormState) -> TransitionResult {
    TransitionResult {
        new_state,
        effect: None,
    }
}
