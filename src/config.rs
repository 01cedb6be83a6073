//! Configuration handling for the TUI

use crate::api::DEFAULT_ADDRESS;
use crate::state::{FormVariant, SubmissionPolicy};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the service address
pub const API_URL_ENV: &str = "INTAKE_API_URL";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IntakeConfig {
    /// Applications service address
    pub api_base_url: Option<String>,
    /// Which form layout to present
    pub form_variant: Option<FormVariant>,
    /// Empty the form after a successful submission
    pub clear_draft_on_success: Option<bool>,
    /// Per-request timeout in seconds
    pub request_timeout_secs: Option<u64>,
}

impl IntakeConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "intake", "intake-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: IntakeConfig = serde_json::from_str(&content)?;
                tracing::debug!("Loaded config from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Service address: environment, then config file, then default
    pub fn api_base_url(&self) -> String {
        self.resolve_base_url(std::env::var(API_URL_ENV).ok())
    }

    fn resolve_base_url(&self, from_env: Option<String>) -> String {
        from_env
            .filter(|url| !url.trim().is_empty())
            .or_else(|| self.api_base_url.clone())
            .unwrap_or_else(|| DEFAULT_ADDRESS.to_string())
    }

    pub fn variant(&self) -> FormVariant {
        self.form_variant.unwrap_or_default()
    }

    pub fn policy(&self) -> SubmissionPolicy {
        SubmissionPolicy {
            clear_draft_on_success: self.clear_draft_on_success.unwrap_or(false),
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}
