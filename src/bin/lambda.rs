//! AWS Lambda entry point for eggcorn.
//!
//! Deploy with `cargo lambda build --release --features lambda`.
//! Configuration comes from the environment, see [`eggcorn::config`].

use lambda_runtime::{Error as LambdaError, service_fn};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use eggcorn::config;
use eggcorn::lambda::{App, handler};

/// Main entry point for the AWS Lambda function.
#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    let config = config::load(None)?;

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    info!("eggcorn Lambda starting...");
    let app = App::from_config(config).await?;
    let app = &app;

    lambda_runtime::run(service_fn(move |event| handler(app, event))).await
}
