// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP plumbing shared by every backend call
//!
//! This crate provides the pieces every outbound request goes through, in order:
//!
//! - **Proxy selection**: [`ProxySpec::select`] picks the proxy for one call
//! - **Headers**: [`browser_headers`] builds the browser-like header set
//! - **Transport**: the [`Transport`] trait and its reqwest implementation
//!   [`HttpTransport`], issuing exactly one GET per call
//! - **Validation**: [`validate`] classifies the raw response into the `data`
//!   payload or an [`ApiError`]
//!
//! The transport never fails: it reports what it observed as a [`RawResponse`]
//! and leaves failure classification to the validator, so there is a single
//! place where responses are judged.

use serde_json::Value;
use thiserror::Error;
use url::Url;

pub mod headers;
pub mod http;
pub mod proxy;
pub mod validate;

pub use headers::{USER_AGENTS, browser_headers};
pub use http::HttpTransport;
pub use proxy::ProxySpec;
pub use validate::validate;

/// Status reported by the transport when no HTTP response was obtained
pub const STATUS_UNAVAILABLE: u16 = 0;

/// One outbound GET, fully assembled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetRequest {
    /// Absolute endpoint URL
    pub url: Url,
    /// Query parameters, in insertion order
    pub params: Vec<(&'static str, String)>,
    /// Request headers
    pub headers: Vec<(&'static str, String)>,
    /// Proxy URI for this call, if any
    pub proxy: Option<String>,
}

impl GetRequest {
    /// Value of a query parameter, if present
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// What the transport observed for one request
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    /// HTTP status, or [`STATUS_UNAVAILABLE`] if no response arrived
    pub status: u16,
    /// Parsed JSON body; `None` for non-200 statuses and unparseable bodies
    pub body: Option<Value>,
}

impl RawResponse {
    /// A 200 response carrying `body`
    pub fn ok(body: Value) -> Self {
        Self {
            status: 200,
            body: Some(body),
        }
    }

    /// A response with no usable body
    pub fn empty(status: u16) -> Self {
        Self { status, body: None }
    }
}

/// Single-attempt GET transport
///
/// Implementations must not retry and must not fail: any problem obtaining a
/// well-formed response is reported through [`RawResponse::empty`].
pub trait Transport: Send + Sync {
    /// Issue one GET request
    fn get(&self, request: &GetRequest) -> impl Future<Output = RawResponse> + Send;
}

/// Errors produced while talking to the backend
#[derive(Debug, Error, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum ApiError {
    /// Non-200 status or a body without the success marker
    #[error("transport error (status {status})")]
    Transport { status: u16 },

    /// HTTP 200 carrying a backend-declared failure
    #[error("backend error (status {status}): {message}")]
    Backend { status: u16, message: String },

    /// Asynchronous backend job still computing after the attempt budget
    #[error("backend job still computing after {attempts} attempts")]
    JobTimeout { attempts: u32 },

    /// Payload present but not in the expected shape
    #[error("invalid response format: {message}")]
    InvalidResponse { message: String },

    /// Client configuration is unusable
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// The operation was cancelled by the caller
    #[error("operation cancelled")]
    Cancelled,
}

impl ApiError {
    /// Build an [`ApiError::InvalidResponse`]
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    /// Build an [`ApiError::Configuration`]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(value: serde_json::Error) -> Self {
        Self::InvalidResponse {
            message: value.to_string(),
        }
    }
}
