//! Trait abstraction for the applications client to enable mocking in tests

use super::error::SubmitError;
use crate::state::{ApplicationPayload, ApplicationRecord, SubmissionResult};
use async_trait::async_trait;

/// Operations the form needs from the applications service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApplicationClientTrait: Send + Sync {
    /// Submit an application and return the service's decision record
    async fn submit_application(
        &self,
        payload: &ApplicationPayload,
    ) -> Result<SubmissionResult, SubmitError>;

    /// List previously submitted applications
    async fn list_applications(&self) -> Result<Vec<ApplicationRecord>, SubmitError>;
}
