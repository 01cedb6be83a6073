//! HTTP client for the applications service
//!
//! Submissions are POSTed as JSON to `{base_url}/applications/`; the same
//! path answers GET with the list of stored applications.

use super::error::SubmitError;
use super::traits::ApplicationClientTrait;
use crate::state::{ApplicationPayload, ApplicationRecord, SubmissionResult};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

/// Default service address
pub const DEFAULT_ADDRESS: &str = "http://127.0.0.1:8000";

const APPLICATIONS_PATH: &str = "/applications/";

/// Client for the applications REST endpoint
pub struct ApplicationClient {
    client: Client,
    base_url: String,
}

impl ApplicationClient {
    /// Create a client; `timeout` bounds each request when set
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn applications_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), APPLICATIONS_PATH)
    }

    async fn read(response: reqwest::Response) -> Result<(u16, String), SubmitError> {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;
        Ok((status, body))
    }
}

#[async_trait]
impl ApplicationClientTrait for ApplicationClient {
    async fn submit_application(
        &self,
        payload: &ApplicationPayload,
    ) -> Result<SubmissionResult, SubmitError> {
        let url = self.applications_url();
        tracing::debug!("POST {url}");

        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;
        let (status, body) = Self::read(response).await?;
        tracing::debug!("POST {url} -> {status}");

        interpret_submission(status, &body)
    }

    async fn list_applications(&self) -> Result<Vec<ApplicationRecord>, SubmitError> {
        let url = self.applications_url();
        tracing::debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;
        let (status, body) = Self::read(response).await?;
        tracing::debug!("GET {url} -> {status}");

        interpret_listing(status, &body)
    }
}

/// Map a submission response to a result or failure
pub(crate) fn interpret_submission(status: u16, body: &str) -> Result<SubmissionResult, SubmitError> {
    let value = success_body(status, body)?;
    if !value.is_object() {
        return Err(SubmitError::MalformedResponse(
            "expected a JSON object".to_string(),
        ));
    }
    decode(value)
}

/// Map a listing response to records or failure
pub(crate) fn interpret_listing(
    status: u16,
    body: &str,
) -> Result<Vec<ApplicationRecord>, SubmitError> {
    let value = success_body(status, body)?;
    if !value.is_array() {
        return Err(SubmitError::MalformedResponse(
            "expected a JSON array".to_string(),
        ));
    }
    decode(value)
}

fn success_body(status: u16, body: &str) -> Result<Value, SubmitError> {
    if !(200..300).contains(&status) {
        return Err(SubmitError::Rejected {
            status,
            detail: extract_detail(body),
        });
    }
    serde_json::from_str(body).map_err(|e| SubmitError::MalformedResponse(e.to_string()))
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, SubmitError> {
    serde_json::from_value(value).map_err(|e| SubmitError::MalformedResponse(e.to_string()))
}

/// Pull a human-readable `detail` string out of an error body
fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let detail = value.get("detail")?.as_str()?.trim();
    if detail.is_empty() {
        None
    } else {
        Some(detail.to_string())
    }
}
