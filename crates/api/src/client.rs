// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! HTTP client for the notification service.

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::request_response::{SubmitEmailRequest, parse_reply};
use reqwest::Client;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};
use wdw_reminders::ServerReply;

/// Something that can deliver a reminder submission and report the reply.
pub trait NotificationClient {
    /// Sends one submission.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if no reply message could be obtained.
    fn submit(
        &self,
        request: &SubmitEmailRequest,
    ) -> impl Future<Output = Result<ServerReply, ApiError>> + Send;
}

/// Posts submissions to `<base-url>/api/submitEmail` as JSON.
#[derive(Debug, Clone)]
pub struct HttpNotificationClient {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpNotificationClient {
    /// Creates a client for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let client: Client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            client,
            endpoint: config.submit_url(),
            timeout: config.timeout(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn classify(&self, err: reqwest::Error) -> ApiError {
        if err.is_timeout() {
            ApiError::timeout(self.timeout)
        } else {
            ApiError::Transport(err)
        }
    }
}

impl NotificationClient for HttpNotificationClient {
    async fn submit(&self, request: &SubmitEmailRequest) -> Result<ServerReply, ApiError> {
        debug!(endpoint = %self.endpoint, "Posting reminder submission");

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|err| self.classify(err))?;

        // Rejections may come back with an error status; the body still
        // carries the message to show.
        let status = response.status();
        let body: String = response.text().await.map_err(|err| self.classify(err))?;

        if body.trim().is_empty() {
            warn!(status = status.as_u16(), "Notification endpoint sent an empty reply");
            return Err(ApiError::EmptyResponse {
                status: status.as_u16(),
            });
        }

        debug!(status = status.as_u16(), "Received notification reply");
        Ok(parse_reply(&body))
    }
}
