//! Inbound Lambda event.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Comment submission as delivered by the API Gateway mapping template.
///
/// Each field is `None` when it is absent, `null`, or not a JSON string.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct CommentRequest {
    /// Raw `application/x-www-form-urlencoded` request body
    #[serde(default, deserialize_with = "string_or_none")]
    pub body: Option<String>,

    /// Source IP
    #[serde(default, deserialize_with = "string_or_none")]
    pub ip: Option<String>,

    /// Source User-Agent
    #[serde(
        default,
        rename = "userAgent",
        alias = "useragent",
        deserialize_with = "string_or_none"
    )]
    pub user_agent: Option<String>,
}

fn string_or_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}
