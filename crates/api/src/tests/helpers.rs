// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use wdw_reminders::ServerReply;

use crate::{ApiError, ClientConfig, Environment, NotificationClient, SubmitEmailRequest};

pub const ARRIVAL: &str = "2025-12-25";
pub const EMAIL: &str = "guest@example.com";

pub fn create_test_config() -> ClientConfig {
    ClientConfig::for_environment(Environment::Development)
        .with_timeout(Duration::from_millis(200))
        .unwrap()
}

/// A client that answers from a script and records every request it sees.
#[derive(Debug, Clone, Default)]
pub struct ScriptedClient {
    replies: Arc<Mutex<VecDeque<Result<ServerReply, ApiError>>>>,
    requests: Arc<Mutex<Vec<SubmitEmailRequest>>>,
}

impl ScriptedClient {
    pub fn replying(replies: Vec<Result<ServerReply, ApiError>>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(replies.into())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<SubmitEmailRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl NotificationClient for ScriptedClient {
    async fn submit(&self, request: &SubmitEmailRequest) -> Result<ServerReply, ApiError> {
        self.requests.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(ServerReply::Success))
    }
}

/// A client that never answers in time.
#[derive(Debug, Clone, Copy)]
pub struct StalledClient;

impl NotificationClient for StalledClient {
    async fn submit(&self, _request: &SubmitEmailRequest) -> Result<ServerReply, ApiError> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(ServerReply::Success)
    }
}

pub fn create_test_request() -> SubmitEmailRequest {
    use wdw_reminders::SubmissionDraft;
    use wdw_reminders_domain::{ArrivalSelection, ReminderPlan, chrono::NaiveDate};

    let date = NaiveDate::from_ymd_opt(2025, 12, 25).unwrap();
    let plan = ReminderPlan::derive(ArrivalSelection::new(date, true).unwrap()).unwrap();
    let draft = SubmissionDraft {
        attempt: 1,
        email: String::from(EMAIL),
        phone_digits: String::new(),
        plan,
    };
    SubmitEmailRequest::from_draft(&draft, &create_test_config())
}
