// src/extract.rs

//! Comment extraction and validation.
//!
//! Turns an untrusted [`CommentRequest`] into a fully populated [`Comment`]
//! or exactly one [`ValidationError`]. Fields are checked in a fixed order
//! and the first defect wins:
//!
//! 1. body present
//! 2. `name`, `email`, `text`, `url` from the form body
//! 3. `ip`, `userAgent` from the request metadata

use std::collections::HashMap;

use chrono::Utc;
use url::form_urlencoded;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::models::{Comment, CommentRequest};

/// Source of the receipt time.
pub trait Clock: Send + Sync {
    /// Current time in milliseconds since the Unix epoch.
    fn now_millis(&self) -> u64;
}

/// Source of comment identifiers. Each call must return a fresh id.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
    }
}

/// Random (v4) UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Validate a request and build the comment it describes.
///
/// The id and time are only generated once every field has passed.
pub fn extract_comment(
    request: &CommentRequest,
    clock: &dyn Clock,
    ids: &dyn IdGenerator,
) -> Result<Comment, ValidationError> {
    let body = request.body.as_deref().ok_or(ValidationError::NoBody)?;
    let mut params = parse_form(body);

    let mut body_field = |field: &'static str| -> Result<String, ValidationError> {
        let value = params
            .remove(field)
            .ok_or(ValidationError::MissingField(field))?;
        non_blank(value).ok_or(ValidationError::BlankField(field))
    };
    let name = body_field("name")?;
    let email = body_field("email")?;
    let text = body_field("text")?;
    let url = body_field("url")?;

    let metadata_field =
        |field: &'static str, value: Option<&str>| -> Result<String, ValidationError> {
            let value = value.ok_or(ValidationError::MissingMetadata(field))?;
            non_blank(value.to_string()).ok_or(ValidationError::BlankMetadata(field))
        };
    let ip = metadata_field("ip", request.ip.as_deref())?;
    let user_agent = metadata_field("userAgent", request.user_agent.as_deref())?;

    Ok(Comment {
        name,
        email,
        text,
        url,
        ip,
        user_agent,
        id: ids.generate(),
        time: clock.now_millis(),
    })
}

/// Decode a form body. A key given more than once keeps its last value.
fn parse_form(body: &str) -> HashMap<String, String> {
    form_urlencoded::parse(body.as_bytes())
        .into_owned()
        .collect()
}

/// Trim surrounding whitespace, including the byte order mark.
fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == value.len() {
        Some(value)
    } else {
        Some(trimmed.to_string())
    }
}
