//! Records exchanged with the applications service

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// JSON body sent on submission
///
/// Optional fields are omitted from the wire entirely when the active
/// field set does not carry them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicationPayload {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub ssn_last4: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub household_size: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub income: Option<f64>,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enrolled_in_program: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_name: Option<String>,
}

/// Decision record returned for a successful submission
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub status: Option<String>,
    pub submission_date: Option<String>,
    pub approval_eta: Option<i64>,
    pub approval_estimated_date: Option<String>,
    pub approval_date: Option<String>,
}

impl SubmissionResult {
    pub fn status_label(&self) -> &str {
        self.status.as_deref().unwrap_or("Pending")
    }

    pub fn submission_date_label(&self) -> &str {
        self.submission_date.as_deref().unwrap_or("Not Available")
    }

    pub fn eta_label(&self) -> String {
        match self.approval_eta {
            Some(days) if days > 0 => format!("{days} days"),
            _ => "Not Available".to_string(),
        }
    }

    /// Estimated approval date as sent, or derived from submission date + ETA
    pub fn estimated_approval(&self) -> Option<NaiveDate> {
        if let Some(date) = self.approval_estimated_date.as_deref().and_then(parse_date) {
            return Some(date);
        }
        let submitted = self.submission_date.as_deref().and_then(parse_date)?;
        let eta = u64::try_from(self.approval_eta?).ok()?;
        submitted.checked_add_days(Days::new(eta))
    }

    pub fn estimated_approval_label(&self) -> String {
        self.estimated_approval()
            .map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_else(|| "Not Available".to_string())
    }

    pub fn approval_date_label(&self) -> &str {
        self.approval_date.as_deref().unwrap_or("N/A")
    }
}

/// Entry of the submitted-applications listing
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApplicationRecord {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub status: Option<String>,
    pub submission_date: Option<String>,
    pub approval_eta: Option<i64>,
    pub approval_estimated_date: Option<String>,
    pub approval_date: Option<String>,
}

impl ApplicationRecord {
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let name = name.trim();
        if name.is_empty() {
            self.id.clone().unwrap_or_else(|| "(unnamed)".to_string())
        } else {
            name.to_string()
        }
    }

    pub fn status_label(&self) -> &str {
        self.status.as_deref().unwrap_or("Pending")
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    mod payload {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_minimal_payload_omits_optional_keys() {
            let payload = ApplicationPayload {
                first_name: "Ana".to_string(),
                last_name: "Li".to_string(),
                date_of_birth: "1990-01-01".to_string(),
                ssn_last4: "1234".to_string(),
                household_size: None,
                income: None,
                address: "1 Main St".to_string(),
                is_enrolled_in_program: None,
                program_name: None,
            };

            assert_eq!(
                serde_json::to_value(&payload).unwrap(),
                json!({
                    "first_name": "Ana",
                    "last_name": "Li",
                    "date_of_birth": "1990-01-01",
                    "ssn_last4": "1234",
                    "address": "1 Main St",
                })
            );
        }
    }

    mod submission_result {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_partial_body_deserializes() {
            let result: SubmissionResult = serde_json::from_value(json!({
                "status": "approved",
                "submission_date": "2024-01-01",
                "approval_eta": 5,
            }))
            .unwrap();

            assert_eq!(
                result,
                SubmissionResult {
                    status: Some("approved".to_string()),
                    submission_date: Some("2024-01-01".to_string()),
                    approval_eta: Some(5),
                    approval_estimated_date: None,
                    approval_date: None,
                }
            );
        }

        #[test]
        fn test_unknown_keys_are_ignored() {
            let result: SubmissionResult = serde_json::from_value(json!({
                "_id": "abc",
                "first_name": "Ana",
                "status": "Pending",
                "approval_date": null,
            }))
            .unwrap();
            assert_eq!(result.status.as_deref(), Some("Pending"));
            assert!(result.approval_date.is_none());
        }

        #[test]
        fn test_estimated_approval_prefers_server_value() {
            let result = SubmissionResult {
                submission_date: Some("2024-01-01".to_string()),
                approval_eta: Some(5),
                approval_estimated_date: Some("2024-01-09".to_string()),
                ..Default::default()
            };
            assert_eq!(
                result.estimated_approval(),
                NaiveDate::from_ymd_opt(2024, 1, 9)
            );
        }

        #[test]
        fn test_estimated_approval_derived_from_eta() {
            let result = SubmissionResult {
                submission_date: Some("2024-01-30".to_string()),
                approval_eta: Some(5),
                ..Default::default()
            };
            assert_eq!(result.estimated_approval_label(), "2024-02-04");
        }

        #[test]
        fn test_labels_fall_back() {
            let result = SubmissionResult::default();
            assert_eq!(result.status_label(), "Pending");
            assert_eq!(result.submission_date_label(), "Not Available");
            assert_eq!(result.eta_label(), "Not Available");
            assert_eq!(result.estimated_approval_label(), "Not Available");
            assert_eq!(result.approval_date_label(), "N/A");
        }

        #[test]
        fn test_zero_eta_is_not_available() {
            let result = SubmissionResult {
                approval_eta: Some(0),
                ..Default::default()
            };
            assert_eq!(result.eta_label(), "Not Available");
        }
    }

    mod application_record {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_deserializes_mongo_id() {
            let record: ApplicationRecord = serde_json::from_value(json!({
                "_id": "65f0",
                "first_name": "Ana",
                "last_name": "Li",
                "status": "Pending",
            }))
            .unwrap();
            assert_eq!(record.id.as_deref(), Some("65f0"));
            assert_eq!(record.display_name(), "Ana Li");
        }

        #[test]
        fn test_display_name_falls_back_to_id() {
            let record = ApplicationRecord {
                id: Some("65f0".to_string()),
                ..Default::default()
            };
            assert_eq!(record.display_name(), "65f0");
        }
    }
}
