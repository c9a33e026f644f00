//! Runtime configuration from CLI flags and environment

use std::path::PathBuf;

use clap::Args;

use crate::api::DEFAULT_BASE_URL;
use crate::storage::FileStorage;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("missing API key: set WEATHER_API_KEY or pass --api-key")]
    MissingApiKey,
}

/// Flags shared by the binary; flattened into its top-level parser
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// City to look up on startup
    #[arg(long, short)]
    pub city: Option<String>,

    /// WeatherAPI.com key
    #[arg(long, env = "WEATHER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Override the current-conditions endpoint
    #[arg(long, env = "WEATHER_API_BASE_URL")]
    pub base_url: Option<String>,

    /// Directory holding persisted favorites
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub api_key: String,
    pub base_url: String,
    pub data_dir: PathBuf,
    pub initial_city: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl Settings {
    pub fn from_args(args: ConfigArgs) -> Result<Self, ConfigError> {
        let api_key = args
            .api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(Settings {
            api_key,
            base_url: args.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            data_dir: args.data_dir.unwrap_or_else(FileStorage::default_dir),
            initial_city: args
                .city
                .map(|city| city.trim().to_string())
                .filter(|city| !city.is_empty()),
            log_file: args.log_file,
        })
    }
}
