//! Comment publishing.
//!
//! A [`Notifier`] performs the actual transport call. [`publish_comment`]
//! builds the outbound message, bounds the call with a timeout and turns any
//! failure into the generic [`PublishError`] after logging its cause.
//!
//! ## Message layout
//!
//! ```text
//! subject:    New comment
//! body:       New comment from <name>:\n<text>
//! attributes: name, email, text, url, ip, userAgent (String)
//!             time (Number, decimal string)
//!             id (String)
//! ```

#[cfg(feature = "sns")]
pub mod sns;

use std::time::Duration;

use async_trait::async_trait;
use tracing::{error, info};

use crate::error::{PublishError, Result};
use crate::models::Comment;

#[cfg(feature = "sns")]
pub use sns::SnsNotifier;

/// Subject of every comment notification.
pub const SUBJECT: &str = "New comment";

/// Declared type of a message attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    String,
    Number,
}

impl AttributeType {
    /// Type tag as SNS expects it.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeType::String => "String",
            AttributeType::Number => "Number",
        }
    }
}

/// A named, typed message attribute. Values are always carried as strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageAttribute {
    pub name: &'static str,
    pub data_type: AttributeType,
    pub value: String,
}

impl MessageAttribute {
    fn string(name: &'static str, value: &str) -> Self {
        Self {
            name,
            data_type: AttributeType::String,
            value: value.to_string(),
        }
    }
}

/// Everything a transport needs to publish one comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    /// Opaque destination identifier (topic ARN)
    pub topic: String,
    pub subject: String,
    pub body: String,
    pub attributes: Vec<MessageAttribute>,
}

impl OutboundMessage {
    pub fn for_comment(topic: &str, comment: &Comment) -> Self {
        Self {
            topic: topic.to_string(),
            subject: SUBJECT.to_string(),
            body: format!("New comment from {}:\n{}", comment.name(), comment.text()),
            attributes: vec![
                MessageAttribute::string("name", comment.name()),
                MessageAttribute::string("email", comment.email()),
                MessageAttribute::string("text", comment.text()),
                MessageAttribute::string("url", comment.url()),
                MessageAttribute::string("ip", comment.ip()),
                MessageAttribute::string("userAgent", comment.user_agent()),
                MessageAttribute {
                    name: "time",
                    data_type: AttributeType::Number,
                    value: comment.time().to_string(),
                },
                MessageAttribute::string("id", comment.id()),
            ],
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&MessageAttribute> {
        self.attributes.iter().find(|a| a.name == name)
    }
}

/// Publish capability.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver the message. Errors carry the transport cause.
    async fn notify(&self, message: &OutboundMessage) -> Result<()>;
}

/// Notifier that only logs. Used for local dry runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, message: &OutboundMessage) -> Result<()> {
        info!(
            "Dry run, not publishing to {}: {} attributes",
            message.topic,
            message.attributes.len()
        );
        Ok(())
    }
}

/// Publish a comment, giving up after `timeout`.
///
/// Returns the comment unchanged on success. Failures are logged and reported
/// as [`PublishError`], whose message never includes the cause. No retries.
pub async fn publish_comment(
    notifier: &dyn Notifier,
    topic: &str,
    comment: Comment,
    timeout: Duration,
) -> std::result::Result<Comment, PublishError> {
    let message = OutboundMessage::for_comment(topic, &comment);
    info!("{}", message.body);

    match tokio::time::timeout(timeout, notifier.notify(&message)).await {
        Ok(Ok(())) => Ok(comment),
        Ok(Err(e)) => {
            error!("Publish of comment {} failed: {}", comment.id(), e);
            Err(PublishError::Rejected {
                cause: e.to_string(),
            })
        }
        // The elapsed timeout drops the in-flight notify future.
        Err(_) => {
            error!(
                "Publish of comment {} timed out after {:?}",
                comment.id(),
                timeout
            );
            Err(PublishError::TimedOut { after: timeout })
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::error::AppError;
    use crate::models::sample_comment;

    /// Records every message and succeeds.
    #[derive(Default)]
    pub(crate) struct RecordingNotifier {
        pub sent: Mutex<Vec<OutboundMessage>>,
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn notify(&self, message: &OutboundMessage) -> Result<()> {
            self.sent.lock().unwrap().push(message.clone());
            Ok(())
        }
    }

    /// Always fails with a transport-looking error.
    pub(crate) struct FailingNotifier;

    #[async_trait]
    impl Notifier for FailingNotifier {
        async fn notify(&self, _message: &OutboundMessage) -> Result<()> {
            Err(AppError::sns("AuthorizationError: User is not authorized"))
        }
    }

    /// Never completes.
    pub(crate) struct HangingNotifier;

    #[async_trait]
    impl Notifier for HangingNotifier {
        async fn notify(&self, _message: &OutboundMessage) -> Result<()> {
            std::future::pending().await
        }
    }

    const TOPIC: &str = "arn:aws:sns:us-west-2:000000000000:comments";

    #[test]
    fn test_message_layout() {
        let message = OutboundMessage::for_comment(TOPIC, &sample_comment());
        assert_eq!(message.topic, TOPIC);
        assert_eq!(message.subject, "New comment");
        assert_eq!(message.body, "New comment from Joe Public:\nNice post");

        let names: Vec<_> = message.attributes.iter().map(|a| a.name).collect();
        assert_eq!(
            names,
            ["name", "email", "text", "url", "ip", "userAgent", "time", "id"]
        );

        let time = message.attribute("time").unwrap();
        assert_eq!(time.data_type, AttributeType::Number);
        assert_eq!(time.value, "123");

        let user_agent = message.attribute("userAgent").unwrap();
        assert_eq!(user_agent.data_type.as_str(), "String");
        assert_eq!(user_agent.value, "Nice bot");
        assert_eq!(message.attribute("id").unwrap().value, "aaa-bbb");
    }

    #[tokio::test]
    async fn test_publish_success_returns_comment() {
        let notifier = RecordingNotifier::default();
        let comment = sample_comment();

        let published =
            publish_comment(&notifier, TOPIC, comment.clone(), Duration::from_secs(1))
                .await
                .unwrap();

        assert_eq!(published, comment);
        let sent = notifier.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0], OutboundMessage::for_comment(TOPIC, &comment));
    }

    #[tokio::test]
    async fn test_publish_failure_is_generic() {
        let timeout = Duration::from_secs(1);
        let err = publish_comment(&FailingNotifier, TOPIC, sample_comment(), timeout)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Unable to publish comment");
        assert!(matches!(err, PublishError::Rejected { .. }));
        assert!(err.cause().contains("AuthorizationError"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_publish_timeout() {
        let timeout = Duration::from_secs(30);
        let err = publish_comment(&HangingNotifier, TOPIC, sample_comment(), timeout)
            .await
            .unwrap_err();

        assert_eq!(err, PublishError::TimedOut { after: timeout });
        assert_eq!(err.to_string(), "Unable to publish comment");
    }

    #[tokio::test]
    async fn test_log_notifier_succeeds() {
        let comment = sample_comment();
        let published =
            publish_comment(&LogNotifier, TOPIC, comment.clone(), Duration::from_secs(1))
                .await
                .unwrap();
        assert_eq!(published, comment);
    }
}
