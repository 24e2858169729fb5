//! Comment data structure.

/// A validated comment.
///
/// Only [`extract_comment`](crate::extract::extract_comment) builds one, so
/// every field is always populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) text: String,
    /// Page the comment relates to
    pub(crate) url: String,
    pub(crate) ip: String,
    pub(crate) user_agent: String,
    pub(crate) id: String,
    /// Epoch milliseconds at receipt
    pub(crate) time: u64,
}

impl Comment {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn ip(&self) -> &str {
        &self.ip
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn time(&self) -> u64 {
        self.time
    }
}

#[cfg(test)]
pub(crate) fn sample_comment() -> Comment {
    Comment {
        name: "Joe Public".to_string(),
        email: "joe@example.com".to_string(),
        text: "Nice post".to_string(),
        url: "https://www.example.com".to_string(),
        ip: "127.0.0.1".to_string(),
        user_agent: "Nice bot".to_string(),
        id: "aaa-bbb".to_string(),
        time: 123,
    }
}
