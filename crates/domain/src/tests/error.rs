// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::DateParseError {
        date_string: String::from("Invalid Date"),
        error: String::from("input contains invalid characters"),
    };
    assert_eq!(
        format!("{err}"),
        "Failed to parse date 'Invalid Date': input contains invalid characters"
    );

    let err: DomainError = DomainError::DateArithmeticOverflow {
        operation: String::from("subtracting 180 days"),
    };
    assert_eq!(
        format!("{err}"),
        "Date arithmetic overflow while subtracting 180 days"
    );

    let err: DomainError = DomainError::InvalidTimezone(String::from("Mars/Olympus"));
    assert_eq!(format!("{err}"), "Invalid timezone: 'Mars/Olympus'");
}

#[test]
fn test_domain_error_is_std_error() {
    let err: Box<dyn std::error::Error> =
        Box::new(DomainError::InvalidTimezone(String::from("Nowhere")));
    assert!(err.source().is_none());
}
