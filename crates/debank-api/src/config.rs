// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Client configuration

use std::time::Duration;

use api_client::{ApiError, ProxySpec};
use url::Url;

/// Public DeBank web API host
pub const DEFAULT_BASE_URL: &str = "https://api.debank.com/";

// Backend constants
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
const DEFAULT_POLL_ATTEMPTS: u32 = 3;
const DEFAULT_POLL_DELAY_SECONDS: u64 = 3;
const DEFAULT_MAX_CONCURRENCY: usize = 4;

/// Largest page the history endpoint serves
pub const MAX_PAGE_SIZE: u32 = 20;

/// Polling policy for asynchronous backend jobs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    /// Total number of requests per job, including the first
    pub max_attempts: u32,
    /// Fixed wait between attempts
    pub delay: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_POLL_ATTEMPTS,
            delay: Duration::from_secs(DEFAULT_POLL_DELAY_SECONDS),
        }
    }
}

/// Configuration for [`crate::DebankClient`]
#[derive(Debug, Clone)]
pub struct DebankConfig {
    /// Base URL every endpoint path is joined onto
    pub base_url: Url,
    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
    /// Proxy selection applied to every outbound call
    pub proxies: ProxySpec,
    /// Job polling policy
    pub poll: PollConfig,
    /// History page size, at most [`MAX_PAGE_SIZE`]
    pub page_size: u32,
    /// Upper bound on concurrent per-chain requests
    pub max_concurrency: usize,
}

impl Default for DebankConfig {
    #[allow(clippy::missing_panics_doc)]
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            proxies: ProxySpec::None,
            poll: PollConfig::default(),
            page_size: MAX_PAGE_SIZE,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
        }
    }
}

impl DebankConfig {
    /// Replace the base URL, parsing and normalizing it
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute http(s) URL
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ApiError> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    /// Replace the proxy selection
    #[must_use]
    pub fn with_proxies(mut self, proxies: ProxySpec) -> Self {
        self.proxies = proxies;
        self
    }

    /// Replace the job polling policy
    #[must_use]
    pub fn with_poll(mut self, poll: PollConfig) -> Self {
        self.poll = poll;
        self
    }

    /// Check the configuration is usable
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Configuration` describing the first invalid field
    pub fn validate(&self) -> Result<(), ApiError> {
        if !matches!(self.base_url.scheme(), "http" | "https") {
            return Err(ApiError::configuration(format!(
                "base URL must be http or https, got {}",
                self.base_url
            )));
        }
        if self.base_url.cannot_be_a_base() {
            return Err(ApiError::configuration("base URL cannot be a base"));
        }
        if self.timeout_seconds == 0 {
            return Err(ApiError::configuration("timeout must be greater than 0"));
        }
        if self.poll.max_attempts == 0 {
            return Err(ApiError::configuration(
                "poll attempts must be greater than 0",
            ));
        }
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(ApiError::configuration(format!(
                "page size must be between 1 and {MAX_PAGE_SIZE}"
            )));
        }
        if self.max_concurrency == 0 {
            return Err(ApiError::configuration(
                "max concurrency must be greater than 0",
            ));
        }
        Ok(())
    }

    /// Per-request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Absolute URL for an endpoint path
    pub(crate) fn endpoint_url(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::configuration(format!("invalid endpoint {path}: {e}")))
    }
}

/// Parse a base URL, ensuring a trailing slash so endpoint paths join under it
pub fn parse_base_url(base_url: &str) -> Result<Url, ApiError> {
    let trimmed = base_url.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };

    let url = Url::parse(&with_slash)
        .map_err(|e| ApiError::configuration(format!("invalid base URL {trimmed}: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ApiError::configuration(format!(
            "base URL must be http or https, got {trimmed}"
        )));
    }

    Ok(url)
}
