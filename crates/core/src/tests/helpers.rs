// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, Effect, FormState, SubmissionDraft, TransitionResult, apply};

pub const ARRIVAL: &str = "2025-12-25";
pub const EMAIL: &str = "guest@example.com";

pub fn step(state: &FormState, command: Command) -> FormState {
    apply(state, command).unwrap().new_state
}

pub fn create_ready_state() -> FormState {
    let state: FormState = FormState::new();
    let state: FormState = step(
        &state,
        Command::PickArrival {
            input: String::from(ARRIVAL),
        },
    );
    step(
        &state,
        Command::SetEmail {
            email: String::from(EMAIL),
        },
    )
}

/// Submits a ready form and returns the submitting state with its draft.
pub fn create_submitting_state() -> (FormState, SubmissionDraft) {
    let result: TransitionResult = apply(&create_ready_state(), Command::Submit).unwrap();
    let Some(Effect::Send(draft)) = result.effect else {
        panic!("submit did not produce a send effect");
    };
    (result.new_state, draft)
}
