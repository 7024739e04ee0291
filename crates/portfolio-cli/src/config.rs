// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Layered configuration for the command line client
//!
//! Sources, later ones overriding earlier ones:
//! 1. Built-in defaults
//! 2. `debank.toml` / `debank.json` in the working directory, or an explicit file
//! 3. Environment variables with the `DEBANK_` prefix

use std::{collections::HashMap, path::Path, time::Duration};

use api_client::ProxySpec;
use config::{Config, ConfigError, Environment, File};
use debank_api::{DebankConfig, PollConfig, config::DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// Command line client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Backend base URL
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
    /// One proxy or a list to pick from per request
    #[serde(default)]
    pub proxies: ProxySpec,
    /// Requests per backend job before giving up
    pub poll_attempts: u32,
    /// Wait between job polls in milliseconds
    pub poll_delay_ms: u64,
    /// History page size
    pub page_size: u32,
    /// Upper bound on concurrent per-chain requests
    pub max_concurrency: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        let defaults = DebankConfig::default();
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: defaults.timeout_seconds,
            proxies: ProxySpec::None,
            poll_attempts: defaults.poll.max_attempts,
            poll_delay_ms: u64::try_from(defaults.poll.delay.as_millis()).unwrap_or(u64::MAX),
            page_size: defaults.page_size,
            max_concurrency: defaults.max_concurrency,
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment and optional files
    ///
    /// # Errors
    ///
    /// Returns `CliError::Config` if a source cannot be read or a value is invalid
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        Ok(Self::load_with(path, None)?)
    }

    /// Load configuration, reading variables from `env` instead of the process
    /// environment when given
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be read or a value is invalid
    pub fn load_with(
        path: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let mut builder = Config::builder()
            .set_default("base_url", defaults.base_url)?
            .set_default("timeout_seconds", defaults.timeout_seconds)?
            .set_default("poll_attempts", defaults.poll_attempts)?
            .set_default("poll_delay_ms", defaults.poll_delay_ms)?
            .set_default("page_size", defaults.page_size)?
            .set_default(
                "max_concurrency",
                u64::try_from(defaults.max_concurrency).unwrap_or(u64::MAX),
            )?;

        builder = match path {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name("debank").required(false)),
        };

        let config = builder
            .add_source(
                Environment::with_prefix("DEBANK")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("proxies")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Library configuration for these settings
    ///
    /// # Errors
    ///
    /// Returns `CliError::Config` if the settings do not form a usable client
    /// configuration
    pub fn to_debank_config(&self) -> CliResult<DebankConfig> {
        let config = DebankConfig {
            timeout_seconds: self.timeout_seconds,
            proxies: self.proxies.clone(),
            poll: PollConfig {
                max_attempts: self.poll_attempts,
                delay: Duration::from_millis(self.poll_delay_ms),
            },
            page_size: self.page_size,
            max_concurrency: self.max_concurrency,
            ..DebankConfig::default()
        }
        .with_base_url(&self.base_url)
        .map_err(config_error)?;

        config.validate().map_err(config_error)?;
        Ok(config)
    }
}

fn config_error(error: api_client::ApiError) -> CliError {
    CliError::Config {
        message: error.to_string(),
    }
}
