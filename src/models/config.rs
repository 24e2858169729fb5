//! Application configuration structures.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Title shown in every rendered page
    #[serde(default = "defaults::page_title")]
    pub page_title: String,

    /// Contact address shown on error pages
    #[serde(default)]
    pub admin_email: String,

    /// SNS topic comments are published to
    #[serde(default)]
    pub topic_arn: String,

    /// Region override for the SNS client (SDK default chain if unset)
    #[serde(default)]
    pub aws_region: Option<String>,

    /// Upper bound on a single publish call
    #[serde(default = "defaults::publish_timeout")]
    pub publish_timeout_secs: u64,

    /// Log level used when `RUST_LOG` is not set
    #[serde(default = "defaults::log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Apply overrides from environment-style variables.
    ///
    /// `lookup` is usually `|key| std::env::var(key).ok()`.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(arn) = lookup("SNS_TOPIC_ARN") {
            self.topic_arn = arn;
        }
        if let Some(title) = lookup("PAGE_TITLE") {
            self.page_title = title;
        }
        if let Some(email) = lookup("ADMIN_EMAIL") {
            self.admin_email = email;
        }
        if let Some(region) = lookup("EGGCORN_AWS_REGION") {
            self.aws_region = Some(region);
        }
        if let Some(timeout) = lookup("PUBLISH_TIMEOUT_SECS") {
            self.publish_timeout_secs = timeout.trim().parse().map_err(|e| {
                AppError::config(format!("PUBLISH_TIMEOUT_SECS={timeout:?}: {e}"))
            })?;
        }
        if let Some(level) = lookup("LOG_LEVEL") {
            self.log_level = level;
        }
        Ok(())
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.topic_arn.trim().is_empty() {
            return Err(AppError::validation("topic_arn is empty"));
        }
        if self.page_title.trim().is_empty() {
            return Err(AppError::validation("page_title is empty"));
        }
        if self.admin_email.trim().is_empty() {
            return Err(AppError::validation("admin_email is empty"));
        }
        if self.publish_timeout_secs == 0 {
            return Err(AppError::validation("publish_timeout_secs must be > 0"));
        }
        Ok(())
    }

    pub fn publish_timeout(&self) -> Duration {
        Duration::from_secs(self.publish_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_title: defaults::page_title(),
            admin_email: String::new(),
            topic_arn: String::new(),
            aws_region: None,
            publish_timeout_secs: defaults::publish_timeout(),
            log_level: defaults::log_level(),
        }
    }
}

mod defaults {
    pub fn page_title() -> String {
        "Comments".to_string()
    }

    pub fn publish_timeout() -> u64 {
        10
    }

    pub fn log_level() -> String {
        "info".to_string()
    }
}
