// src/error.rs

//! Error types for the comment pipeline.
//!
//! [`ValidationError`] and [`PublishError`] are ordinary pipeline outcomes that
//! end up rendered into an HTML page. [`AppError`] covers infrastructure
//! failures: configuration loading at startup and transport errors inside a
//! [`Notifier`](crate::publish::Notifier).

use std::time::Duration;

use thiserror::Error;

/// Result type alias for infrastructure operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified infrastructure error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// AWS SNS error
    #[error("SNS error: {0}")]
    Sns(String),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration value failed validation
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create an SNS transport error.
    pub fn sns(message: impl std::fmt::Display) -> Self {
        Self::Sns(message.to_string())
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

/// A defect in the submitted form body or the request metadata.
///
/// The `Display` output is the exact message shown to the commenter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("No body found")]
    NoBody,

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Field must not be blank: {0}")]
    BlankField(&'static str),

    #[error("Missing metadata: {0}")]
    MissingMetadata(&'static str),

    #[error("Metadata must not be blank: {0}")]
    BlankMetadata(&'static str),
}

/// Publishing a comment failed.
///
/// Every variant displays the same generic message. The transport cause is
/// only reachable through [`PublishError::cause`] and must not be rendered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PublishError {
    /// The notifier returned an error
    #[error("Unable to publish comment")]
    Rejected { cause: String },

    /// The notifier did not finish in time
    #[error("Unable to publish comment")]
    TimedOut { after: Duration },
}

impl PublishError {
    /// Operator-facing description of what went wrong.
    pub fn cause(&self) -> String {
        match self {
            Self::Rejected { cause } => cause.clone(),
            Self::TimedOut { after } => format!("publish timed out after {after:?}"),
        }
    }
}
