// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use clap::Parser;
use tracing::{info, warn};
use wdw_reminders_api::{ReminderUser, SUBMIT_EMAIL_PATH, SUCCESS_MESSAGE, SubmitEmailRequest};
use wdw_reminders_domain::{digits_only, is_valid_email};

const INVALID_EMAIL: &str = "Please enter a valid email address.";
const INVALID_PHONE: &str = "Please enter a valid phone number.";
const INVALID_DATES: &str = "The dining date must come before the FastPass date.";

/// Accepted phone lengths, in digits, including a country code.
const PHONE_DIGITS: std::ops::RangeInclusive<usize> = 10..=15;

/// WDW Reminders dev server - a local notification endpoint for development
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to bind the server to
    #[arg(short, long, default_value_t = 8000)]
    port: u16,
}

/// A rejection sent back as plain text.
#[derive(Debug)]
struct Rejection {
    status: StatusCode,
    message: &'static str,
}

impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

impl Rejection {
    const fn bad_request(message: &'static str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message,
        }
    }
}

/// Checks a reminder the way the hosted service does before scheduling it.
fn validate(user: &ReminderUser) -> Result<(), Rejection> {
    if !is_valid_email(&user.email) {
        return Err(Rejection::bad_request(INVALID_EMAIL));
    }

    let phone: String = digits_only(&user.phone);
    if !user.phone.is_empty() && !PHONE_DIGITS.contains(&phone.len()) {
        return Err(Rejection::bad_request(INVALID_PHONE));
    }

    if user.dining_date >= user.fast_pass_date {
        return Err(Rejection::bad_request(INVALID_DATES));
    }

    Ok(())
}

async fn handle_submit_email(
    Json(req): Json<SubmitEmailRequest>,
) -> Result<&'static str, Rejection> {
    let user: &ReminderUser = &req.user;

    if let Err(rejection) = validate(user) {
        warn!(
            email = %user.email,
            reason = rejection.message,
            "Rejecting reminder"
        );
        return Err(rejection);
    }

    info!(
        email = %user.email,
        dining = %user.local_dining_date,
        fast_pass = %user.local_fast_pass_date,
        at = %user.local_time,
        with_phone = !user.phone.is_empty(),
        "Accepted reminder"
    );

    Ok(SUCCESS_MESSAGE)
}

/// Build the application router.
fn build_router() -> Router {
    Router::new().route(SUBMIT_EMAIL_PATH, post(handle_submit_email))
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing WDW Reminders dev server");

    let app: Router = build_router();

    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use chrono::{TimeZone, Utc};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn create_test_body(email: &str, phone: &str) -> Value {
        json!({
            "user": {
                "email": email,
                "diningDate": Utc.with_ymd_and_hms(2025, 6, 28, 12, 0, 0).unwrap(),
                "fastPassDate": Utc.with_ymd_and_hms(2025, 10, 26, 12, 0, 0).unwrap(),
                "localTime": "7:00am EST",
                "localDiningDate": "06/28/2025",
                "localFastPassDate": "10/26/2025",
                "phone": phone
            }
        })
    }

    async fn post_body(body: &Value) -> (HttpStatusCode, String) {
        let response = build_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/submitEmail")
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_string(body).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status: HttpStatusCode = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body_bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_valid_reminder_is_accepted() {
        let (status, text) = post_body(&create_test_body("guest@example.com", "")).await;

        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(text, "Success!");
    }

    #[tokio::test]
    async fn test_valid_reminder_with_phone_is_accepted() {
        let (status, text) =
            post_body(&create_test_body("guest@example.com", "14075550199")).await;

        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(text, SUCCESS_MESSAGE);
    }

    #[tokio::test]
    async fn test_missing_phone_key_is_accepted() {
        let mut body: Value = create_test_body("guest@example.com", "");
        body["user"].as_object_mut().unwrap().remove("phone");

        let (status, _) = post_body(&body).await;
        assert_eq!(status, HttpStatusCode::OK);
    }

    #[tokio::test]
    async fn test_invalid_email_is_rejected_with_email_wording() {
        let (status, text) = post_body(&create_test_body("guest@", "")).await;

        assert_eq!(status, HttpStatusCode::BAD_REQUEST);
        assert!(text.to_lowercase().contains("email"));
    }

    #[tokio::test]
    async fn test_short_phone_is_rejected_with_phone_wording() {
        let (status, text) = post_body(&create_test_body("guest@example.com", "555")).await;

        assert_eq!(status, HttpStatusCode::BAD_REQUEST);
        assert_eq!(text, INVALID_PHONE);
    }

    #[tokio::test]
    async fn test_inverted_dates_are_rejected_with_date_wording() {
        let mut body: Value = create_test_body("guest@example.com", "");
        body["user"]["fastPassDate"] = body["user"]["diningDate"].clone();

        let (status, text) = post_body(&body).await;

        assert_eq!(status, HttpStatusCode::BAD_REQUEST);
        assert!(text.to_lowercase().contains("date"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_client_error() {
        let response = build_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/submitEmail")
                    .header("content-type", "application/json")
                    .body(Body::from("{\"user\":{}}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }

    #[test]
    fn test_args_default_port() {
        let args: Args = Args::parse_from(["wdw-reminders-dev-server"]);
        assert_eq!(args.port, 8000);
    }
}
