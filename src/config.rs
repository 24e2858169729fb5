// src/config.rs

//! Configuration loading.
//!
//! An optional TOML file is read first, then environment variables override
//! individual values:
//!
//! - `EGGCORN_CONFIG`: path of the TOML file (if no path is given explicitly)
//! - `SNS_TOPIC_ARN`, `PAGE_TITLE`, `ADMIN_EMAIL`
//! - `EGGCORN_AWS_REGION`: region override for the SNS client
//! - `PUBLISH_TIMEOUT_SECS`, `LOG_LEVEL`

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{AppError, Result};
use crate::models::Config;

/// Load configuration from `path` (or `EGGCORN_CONFIG`) and the process
/// environment.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let path = path
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os("EGGCORN_CONFIG").map(PathBuf::from));
    load_with(path.as_deref(), |key| std::env::var(key).ok())
}

/// Load configuration using an explicit variable lookup.
pub fn load_with(
    path: Option<&Path>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<Config> {
    let mut config = match path {
        Some(path) => {
            info!("Loading config file: {}", path.display());
            Config::load(path)
                .map_err(|e| AppError::config(format!("{}: {e}", path.display())))?
        }
        None => Config::default(),
    };
    config.apply_env(lookup)?;
    Ok(config)
}
