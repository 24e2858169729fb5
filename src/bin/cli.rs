//! eggcorn CLI
//!
//! Local execution entry point. For AWS Lambda, use `eggcorn-lambda`.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use eggcorn::{
    config,
    error::Result,
    extract::{SystemClock, UuidGenerator},
    handler::{Services, handle_request},
    models::CommentRequest,
    publish::{LogNotifier, Notifier},
};
use tracing::{error, info};

/// eggcorn - web page comment submission handler
#[derive(Parser, Debug)]
#[command(name = "eggcorn", version, about = "Comment submission handler")]
struct Cli {
    /// Path to a TOML config file (default: $EGGCORN_CONFIG)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Handle one submission locally and print the resulting page
    Submit {
        /// Lambda event JSON file; replaces the other request flags
        #[arg(long, conflicts_with_all = ["body", "ip", "user_agent"])]
        event: Option<PathBuf>,

        /// URL-encoded form body, e.g. "name=Joe&email=joe%40example.com&text=Hi&url=..."
        #[arg(long)]
        body: Option<String>,

        /// Source IP reported for the request
        #[arg(long)]
        ip: Option<String>,

        /// User-Agent reported for the request
        #[arg(long)]
        user_agent: Option<String>,

        /// Publish to the configured SNS topic instead of logging
        #[cfg(feature = "sns")]
        #[arg(long)]
        publish: bool,
    },

    /// Validate configuration
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn read_event(path: &Path) -> Result<CommentRequest> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = config::load(cli.config.as_deref())?;

    match cli.command {
        Command::Submit {
            event,
            body,
            ip,
            user_agent,
            #[cfg(feature = "sns")]
            publish,
        } => {
            let request = match event {
                Some(path) => read_event(&path)?,
                None => CommentRequest {
                    body,
                    ip,
                    user_agent,
                },
            };

            #[cfg(feature = "sns")]
            let sns = if publish {
                config.validate()?;
                Some(eggcorn::publish::SnsNotifier::from_env(&config).await)
            } else {
                None
            };
            #[cfg(feature = "sns")]
            let notifier: &dyn Notifier = match &sns {
                Some(sns) => sns,
                None => &LogNotifier,
            };
            #[cfg(not(feature = "sns"))]
            let notifier: &dyn Notifier = &LogNotifier;

            let services = Services {
                config: &config,
                notifier,
                clock: &SystemClock,
                ids: &UuidGenerator,
            };
            let html = handle_request(&services, &request).await;
            println!("{html}");
        }

        Command::Validate => {
            info!("Validating configuration...");

            if let Err(e) = config.validate() {
                error!("Config validation failed: {}", e);
                return Err(e);
            }
            info!("✓ Config OK (topic {})", config.topic_arn);
        }
    }

    Ok(())
}
