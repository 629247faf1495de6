// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Terminal rendering of windows and submission outcomes.

use wdw_reminders::{FormState, SubmissionOutcome};
use wdw_reminders_api::WindowSummary;
use wdw_reminders_domain::{FieldTag, RESORT_LIST_URL};

/// Order in which field errors are printed.
const FIELD_ORDER: [FieldTag; 4] = [
    FieldTag::Date,
    FieldTag::Email,
    FieldTag::Phone,
    FieldTag::General,
];

const fn field_label(field: FieldTag) -> &'static str {
    match field {
        FieldTag::Date => "Arrival date",
        FieldTag::Email => "Email",
        FieldTag::Phone => "Phone",
        FieldTag::General => "Error",
    }
}

/// One line per window, dining first.
pub fn render_windows(summaries: &[WindowSummary], staying_on_property: bool) -> Vec<String> {
    let mut lines: Vec<String> = summaries
        .iter()
        .map(|summary| {
            format!(
                "{} ({} Days out): {}",
                summary.kind.label(),
                summary.offset_days,
                summary.availability
            )
        })
        .collect();

    if staying_on_property && !lines.is_empty() {
        lines.push(format!("Not sure your hotel counts? {RESORT_LIST_URL}"));
    }

    lines
}

/// The confirmation after a success, or each failure on the field it belongs to.
pub fn render_outcome(state: &FormState) -> Vec<String> {
    match state.outcome() {
        SubmissionOutcome::Succeeded => state
            .confirmation_message()
            .map(String::from)
            .into_iter()
            .collect(),
        SubmissionOutcome::Failed(_) => FIELD_ORDER
            .into_iter()
            .filter_map(|field| {
                state
                    .failure_on(field)
                    .map(|failure| format!("{}: {failure}", field_label(field)))
            })
            .collect(),
        SubmissionOutcome::Idle | SubmissionOutcome::Submitting { .. } => Vec::new(),
    }
}
