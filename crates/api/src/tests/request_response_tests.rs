// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;
use wdw_reminders::ServerReply;
use wdw_reminders_domain::{FieldError, FieldTag};

use crate::tests::helpers::{EMAIL, create_test_request};
use crate::{SubmitEmailRequest, parse_reply};

fn instant(value: &Value) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value.as_str().unwrap())
        .unwrap()
        .with_timezone(&Utc)
}

#[test]
fn test_request_body_uses_wire_field_names() {
    let body: Value = serde_json::to_value(create_test_request()).unwrap();
    let user: &Value = &body["user"];

    assert_eq!(user["email"], EMAIL);
    assert_eq!(
        instant(&user["diningDate"]),
        Utc.with_ymd_and_hms(2025, 6, 28, 12, 0, 0).unwrap()
    );
    assert_eq!(
        instant(&user["fastPassDate"]),
        Utc.with_ymd_and_hms(2025, 10, 26, 12, 0, 0).unwrap()
    );
    assert_eq!(user["localTime"], "7:00am EST");
    assert_eq!(user["localDiningDate"], "06/28/2025");
    assert_eq!(user["localFastPassDate"], "10/26/2025");
    assert_eq!(user["phone"], "");
    assert_eq!(user.as_object().unwrap().len(), 7);
}

#[test]
fn test_request_body_deserializes_without_phone() {
    let body: &str = r#"{"user":{"email":"guest@example.com","diningDate":"2025-06-28T12:00:00Z","fastPassDate":"2025-10-26T12:00:00Z","localTime":"7:00am EST","localDiningDate":"06/28/2025","localFastPassDate":"10/26/2025"}}"#;
    let request: SubmitEmailRequest = serde_json::from_str(body).unwrap();

    assert_eq!(request.user.phone, "");
    assert_eq!(request, create_test_request());
}

#[test]
fn test_parse_reply_plain_success() {
    assert_eq!(parse_reply("Success!"), ServerReply::Success);
}

#[test]
fn test_parse_reply_padded_success_is_not_success() {
    assert_eq!(
        parse_reply(" Success! "),
        ServerReply::Rejected(FieldError::from_message(" Success! "))
    );
    assert!(matches!(
        parse_reply("Success!\n"),
        ServerReply::Rejected(_)
    ));
}

#[test]
fn test_parse_reply_keeps_message_as_sent() {
    let ServerReply::Rejected(error) = parse_reply("  Invalid email address\n") else {
        panic!("expected a rejection");
    };
    assert_eq!(error.message(), "  Invalid email address\n");
    assert_eq!(error.fields(), &[FieldTag::Email]);
}

#[test]
fn test_parse_reply_json_string_success() {
    assert_eq!(parse_reply("\"Success!\""), ServerReply::Success);
}

#[test]
fn test_parse_reply_success_is_exact() {
    assert_eq!(
        parse_reply("success!"),
        ServerReply::Rejected(FieldError::from_message("success!"))
    );
}

#[test]
fn test_parse_reply_plain_failure_routes_by_wording() {
    let reply: ServerReply = parse_reply("Invalid email address");
    let ServerReply::Rejected(error) = reply else {
        panic!("expected a rejection");
    };
    assert_eq!(error.fields(), &[FieldTag::Email]);
    assert_eq!(error.message(), "Invalid email address");
}

#[test]
fn test_parse_reply_structured_field_wins_over_wording() {
    let reply: ServerReply =
        parse_reply(r#"{"field":"date","message":"That email is already booked"}"#);
    assert_eq!(
        reply,
        ServerReply::Rejected(FieldError::tagged(
            FieldTag::Date,
            "That email is already booked"
        ))
    );
}

#[test]
fn test_parse_reply_structured_without_field_falls_back() {
    let reply: ServerReply = parse_reply(r#"{"message":"Phone number is too short"}"#);
    assert_eq!(
        reply,
        ServerReply::Rejected(FieldError::from_message("Phone number is too short"))
    );
}

#[test]
fn test_parse_reply_structured_success() {
    assert_eq!(parse_reply(r#"{"message":"Success!"}"#), ServerReply::Success);
}

#[test]
fn test_parse_reply_unmatched_message_is_general() {
    let ServerReply::Rejected(error) = parse_reply("Server is busy") else {
        panic!("expected a rejection");
    };
    assert_eq!(error.fields(), &[FieldTag::General]);
}
