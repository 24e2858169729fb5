//! AWS SNS notifier.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_sns::Client;
use aws_sdk_sns::error::DisplayErrorContext;
use aws_sdk_sns::types::MessageAttributeValue;
use tracing::{debug, info};

use crate::error::{AppError, Result};
use crate::models::Config;
use crate::publish::{MessageAttribute, Notifier, OutboundMessage};

/// Publishes comment notifications to an SNS topic.
#[derive(Debug, Clone)]
pub struct SnsNotifier {
    client: Client,
}

impl SnsNotifier {
    /// Create a notifier from an existing client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a notifier from the SDK's default environment configuration.
    ///
    /// Credentials always come from the default provider chain. The region
    /// does too unless `config.aws_region` overrides it.
    pub async fn from_env(config: &Config) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(region) = &config.aws_region {
            loader = loader.region(aws_config::Region::new(region.clone()));
        }
        let sdk_config = loader.load().await;
        Self::new(Client::new(&sdk_config))
    }
}

fn to_sns_attributes(
    attributes: &[MessageAttribute],
) -> Result<HashMap<String, MessageAttributeValue>> {
    attributes
        .iter()
        .map(|attribute| {
            let value = MessageAttributeValue::builder()
                .data_type(attribute.data_type.as_str())
                .string_value(&attribute.value)
                .build()
                .map_err(AppError::sns)?;
            Ok((attribute.name.to_string(), value))
        })
        .collect()
}

#[async_trait]
impl Notifier for SnsNotifier {
    async fn notify(&self, message: &OutboundMessage) -> Result<()> {
        let attributes = to_sns_attributes(&message.attributes)?;
        debug!("Publishing {} attributes to {}", attributes.len(), message.topic);

        let output = self
            .client
            .publish()
            .topic_arn(&message.topic)
            .subject(&message.subject)
            .message(&message.body)
            .set_message_attributes(Some(attributes))
            .send()
            .await
            .map_err(|e| AppError::sns(DisplayErrorContext(e)))?;

        info!(
            "Published to {} (message id {})",
            message.topic,
            output.message_id().unwrap_or("-")
        );
        Ok(())
    }
}
