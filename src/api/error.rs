//! Failures of a round-trip to the applications service

use thiserror::Error;

/// Banner text when the service gives no usable explanation
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong";

/// Why a request did not produce the expected record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The request never got a response
    #[error("request failed: {0}")]
    Transport(String),

    /// The service answered with a non-success status
    #[error("service responded with status {status}")]
    Rejected { status: u16, detail: Option<String> },

    /// A success status with a body that is not the expected record
    #[error("unexpected response: {0}")]
    MalformedResponse(String),
}

impl SubmitError {
    /// Message for the form's error banner
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_with_detail_uses_detail() {
        let err = SubmitError::Rejected {
            status: 400,
            detail: Some("Invalid date format".to_string()),
        };
        assert_eq!(err.user_message(), "Invalid date format");
    }

    #[test]
    fn test_other_errors_use_generic_message() {
        let errors = [
            SubmitError::Transport("connection refused".to_string()),
            SubmitError::Rejected {
                status: 502,
                detail: None,
            },
            SubmitError::MalformedResponse("expected a JSON object".to_string()),
        ];
        for err in errors {
            assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
        }
    }

    #[test]
    fn test_display_includes_status() {
        let err = SubmitError::Rejected {
            status: 500,
            detail: None,
        };
        assert_eq!(err.to_string(), "service responded with status 500");
    }
}
