// src/handler.rs

//! Request orchestration: extract, publish, render.

use tracing::{info, warn};

use crate::extract::{Clock, IdGenerator, extract_comment};
use crate::models::{CommentRequest, Config};
use crate::publish::{Notifier, publish_comment};
use crate::render::{render_error, render_success};

/// Collaborators a request is handled with.
#[derive(Clone, Copy)]
pub struct Services<'a> {
    pub config: &'a Config,
    pub notifier: &'a dyn Notifier,
    pub clock: &'a dyn Clock,
    pub ids: &'a dyn IdGenerator,
}

/// Handle one comment submission and return the page to show.
///
/// Always produces HTML. Validation failures skip publishing.
pub async fn handle_request(services: &Services<'_>, request: &CommentRequest) -> String {
    let config = services.config;

    let comment = match extract_comment(request, services.clock, services.ids) {
        Ok(comment) => comment,
        Err(e) => {
            warn!("Rejected submission: {}", e);
            return render_error(config, &e.to_string());
        }
    };

    match publish_comment(
        services.notifier,
        &config.topic_arn,
        comment,
        config.publish_timeout(),
    )
    .await
    {
        Ok(comment) => {
            info!("Accepted comment {} on {}", comment.id(), comment.url());
            render_success(config, &comment)
        }
        Err(e) => render_error(config, &e.to_string()),
    }
}
