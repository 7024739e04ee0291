// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! reqwest-backed [`Transport`]

use std::time::Duration;

use reqwest::{Client, Proxy, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{ApiError, GetRequest, RawResponse, STATUS_UNAVAILABLE, Transport};

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// HTTP transport issuing exactly one GET per call
///
/// Direct calls share one connection pool. A proxied call builds a client bound
/// to that proxy for the duration of the call, since reqwest fixes proxies per
/// client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    timeout: Duration,
}

impl HttpTransport {
    /// Create a transport with the given per-request timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built
    pub fn new(timeout: Duration) -> Result<Self, ApiError> {
        let client = Self::builder(timeout)
            .build()
            .map_err(|e| ApiError::configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, timeout })
    }

    fn builder(timeout: Duration) -> reqwest::ClientBuilder {
        Client::builder().timeout(timeout)
    }

    fn client_for(&self, proxy: Option<&str>) -> Option<Client> {
        let Some(proxy) = proxy else {
            return Some(self.client.clone());
        };

        let proxy = match Proxy::all(proxy) {
            Ok(proxy) => proxy,
            Err(error) => {
                warn!(%error, "proxy rejected by HTTP client");
                return None;
            }
        };

        match Self::builder(self.timeout).proxy(proxy).build() {
            Ok(client) => Some(client),
            Err(error) => {
                warn!(%error, "failed to build proxied HTTP client");
                None
            }
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        let timeout = Duration::from_secs(DEFAULT_TIMEOUT_SECONDS);
        let client = Self::builder(timeout).build().unwrap_or_else(|error| {
            warn!(%error, "falling back to an HTTP client without a timeout");
            Client::new()
        });
        Self { client, timeout }
    }
}

impl Transport for HttpTransport {
    async fn get(&self, request: &GetRequest) -> RawResponse {
        let Some(client) = self.client_for(request.proxy.as_deref()) else {
            return RawResponse::empty(STATUS_UNAVAILABLE);
        };

        let mut builder = client.get(request.url.clone()).query(&request.params);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }

        debug!(url = %request.url, proxied = request.proxy.is_some(), "sending GET");

        let response = match builder.send().await {
            Ok(response) => response,
            Err(error) => {
                let status = error.status().map_or(STATUS_UNAVAILABLE, |s| s.as_u16());
                warn!(url = %request.url, status, %error, "request failed");
                return RawResponse::empty(status);
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            return RawResponse::empty(status.as_u16());
        }

        match response.json::<Value>().await {
            Ok(body) => RawResponse {
                status: status.as_u16(),
                body: Some(body),
            },
            Err(error) => {
                warn!(url = %request.url, %error, "response body is not JSON");
                RawResponse::empty(status.as_u16())
            }
        }
    }
}
