// src/lambda/mod.rs

//! AWS Lambda handler for comment submissions.
//!
//! The function is invoked by API Gateway with a mapping template that
//! provides `body`, `ip` and `userAgent`. It always succeeds with an HTML
//! string so browsers get a readable page instead of a JSON error.

use lambda_runtime::{Error as LambdaError, LambdaEvent};
use tracing::{info, instrument};

use crate::error::Result;
use crate::extract::{SystemClock, UuidGenerator};
use crate::handler::{Services, handle_request};
use crate::models::{CommentRequest, Config};
use crate::publish::SnsNotifier;

/// Collaborators built once per cold start and shared by invocations.
pub struct App {
    config: Config,
    notifier: SnsNotifier,
    clock: SystemClock,
    ids: UuidGenerator,
}

impl App {
    pub fn new(config: Config, notifier: SnsNotifier) -> Self {
        Self {
            config,
            notifier,
            clock: SystemClock,
            ids: UuidGenerator,
        }
    }

    /// Validate configuration, then build the SNS client.
    pub async fn from_config(config: Config) -> Result<Self> {
        config.validate()?;
        info!("Publishing comments to {}", config.topic_arn);

        let notifier = SnsNotifier::from_env(&config).await;
        Ok(Self::new(config, notifier))
    }

    fn services(&self) -> Services<'_> {
        Services {
            config: &self.config,
            notifier: &self.notifier,
            clock: &self.clock,
            ids: &self.ids,
        }
    }
}

/// Main Lambda handler function.
#[instrument(skip_all, fields(request_id = %event.context.request_id))]
pub async fn handler(
    app: &App,
    event: LambdaEvent<CommentRequest>,
) -> std::result::Result<String, LambdaError> {
    let (request, _context) = event.into_parts();
    Ok(handle_request(&app.services(), &request).await)
}

#[cfg(test)]
mod tests {
    use lambda_runtime::Context;

    use super::*;

    fn offline_app() -> App {
        let sdk_config = aws_sdk_sns::Config::builder()
            .behavior_version(aws_sdk_sns::config::BehaviorVersion::latest())
            .region(aws_sdk_sns::config::Region::new("us-west-2"))
            .build();
        let notifier = SnsNotifier::new(aws_sdk_sns::Client::from_conf(sdk_config));
        let config = Config {
            page_title: "my site".to_string(),
            admin_email: "joe@example.com".to_string(),
            topic_arn: "arn:aws:sns:us-west-2:000000000000:comments".to_string(),
            ..Config::default()
        };
        App::new(config, notifier)
    }

    #[tokio::test]
    async fn test_invalid_event_returns_error_page() {
        let app = offline_app();
        let payload: CommentRequest = serde_json::from_str(r#"{"ip": "127.0.0.1"}"#).unwrap();

        let html = handler(&app, LambdaEvent::new(payload, Context::default()))
            .await
            .unwrap();

        assert!(html.contains("The error was: No body found"));
        assert!(html.contains("<title>my site - Error!</title>"));
    }
}
