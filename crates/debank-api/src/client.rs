// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Client core: request assembly, cancellation and per-chain fan-out

use std::future::Future;

use api_client::{ApiError, GetRequest, HttpTransport, Transport, browser_headers, validate};
use futures::{StreamExt, TryStreamExt, stream};
use indexmap::IndexMap;
use serde_json::Value;
use shared_types::ChainId;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::config::DebankConfig;

/// Backend endpoints, relative to the configured base URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `user/addr`
    UserAddr,
    /// `hi/user/info`
    UserInfo,
    /// `user/total_balance`
    TotalBalance,
    /// `asset/net_curve_24h`
    NetCurve24h,
    /// `token/balance_list`
    TokenBalanceList,
    /// `token/cache_balance_list`
    TokenCacheBalanceList,
    /// `portfolio/project_list`
    ProjectList,
    /// `nft/collection_list`
    NftCollectionList,
    /// `nft/history_collection_list`
    NftHistoryCollectionList,
    /// `nft/history_list`
    NftHistoryList,
    /// `nft/used_chains`
    NftUsedChains,
    /// `history/list`
    HistoryList,
    /// `history/token_price`
    TokenPrice,
}

impl Endpoint {
    /// Path relative to the base URL
    pub const fn path(self) -> &'static str {
        match self {
            Self::UserAddr => "user/addr",
            Self::UserInfo => "hi/user/info",
            Self::TotalBalance => "user/total_balance",
            Self::NetCurve24h => "asset/net_curve_24h",
            Self::TokenBalanceList => "token/balance_list",
            Self::TokenCacheBalanceList => "token/cache_balance_list",
            Self::ProjectList => "portfolio/project_list",
            Self::NftCollectionList => "nft/collection_list",
            Self::NftHistoryCollectionList => "nft/history_collection_list",
            Self::NftHistoryList => "nft/history_list",
            Self::NftUsedChains => "nft/used_chains",
            Self::HistoryList => "history/list",
            Self::TokenPrice => "history/token_price",
        }
    }
}

/// Query parameters for one request
pub(crate) type Params = Vec<(&'static str, String)>;

/// Read-only DeBank client
///
/// Every call selects its own proxy, draws fresh browser headers, goes through
/// the transport exactly once and is classified by [`api_client::validate`].
/// Nothing is cached between calls.
#[derive(Debug)]
pub struct DebankClient<T = HttpTransport> {
    transport: T,
    config: DebankConfig,
    cancellation: CancellationToken,
}

impl DebankClient<HttpTransport> {
    /// Create a client over the default HTTP transport
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be built
    pub fn new(config: DebankConfig) -> Result<Self, ApiError> {
        config.validate()?;
        let transport = HttpTransport::new(config.timeout())?;
        Self::with_transport(config, transport)
    }
}

impl<T: Transport> DebankClient<T> {
    /// Create a client over a caller-supplied transport
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn with_transport(config: DebankConfig, transport: T) -> Result<Self, ApiError> {
        config.validate()?;
        Ok(Self {
            transport,
            config,
            cancellation: CancellationToken::new(),
        })
    }

    /// Observe `token` at every suspension point
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    /// Client configuration
    pub fn config(&self) -> &DebankConfig {
        &self.config
    }

    /// Underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Pick a proxy for one logical query
    pub(crate) fn select_proxy(&self) -> Option<String> {
        self.config.proxies.select()
    }

    /// Issue one request and validate it, with a freshly selected proxy
    pub(crate) async fn fetch(
        &self,
        endpoint: Endpoint,
        params: Params,
    ) -> Result<Value, ApiError> {
        let proxy = self.select_proxy();
        self.fetch_via(endpoint, params, proxy).await
    }

    /// Issue one request through a given proxy and validate it
    pub(crate) async fn fetch_via(
        &self,
        endpoint: Endpoint,
        params: Params,
        proxy: Option<String>,
    ) -> Result<Value, ApiError> {
        let request = GetRequest {
            url: self.config.endpoint_url(endpoint.path())?,
            params,
            headers: browser_headers(),
            proxy,
        };

        debug!(
            endpoint = endpoint.path(),
            proxied = request.proxy.is_some(),
            "calling DeBank"
        );

        let response = self.cancellable(self.transport.get(&request)).await?;
        validate(response)
    }

    /// Run `future` unless the client's cancellation token fires first
    pub(crate) async fn cancellable<F: Future>(&self, future: F) -> Result<F::Output, ApiError> {
        tokio::select! {
            biased;
            () = self.cancellation.cancelled() => Err(ApiError::Cancelled),
            output = future => Ok(output),
        }
    }

    /// Run one query per chain with bounded concurrency
    ///
    /// Results keep the order of `chains`. The first failure aborts the rest.
    pub(crate) async fn per_chain<V, F, Fut>(
        &self,
        chains: Vec<ChainId>,
        query: F,
    ) -> Result<IndexMap<ChainId, V>, ApiError>
    where
        F: Fn(ChainId) -> Fut,
        Fut: Future<Output = Result<V, ApiError>>,
    {
        stream::iter(chains.into_iter().map(|chain| {
            let pending = query(chain.clone());
            async move { pending.await.map(|value| (chain, value)) }
        }))
        .buffered(self.config.max_concurrency)
        .try_collect()
        .await
    }
}

/// Group a flat list of records by their `chain` field, keeping first-seen order
pub(crate) fn group_by_chain(data: Value) -> Result<IndexMap<ChainId, Vec<Value>>, ApiError> {
    let Value::Array(items) = data else {
        return Err(ApiError::invalid_response("expected a list of records"));
    };

    let mut grouped: IndexMap<ChainId, Vec<Value>> = IndexMap::new();
    for item in items {
        let Some(chain) = item.get("chain").and_then(Value::as_str) else {
            warn!("skipping record without a chain");
            continue;
        };
        grouped.entry(ChainId::new(chain)).or_default().push(item);
    }
    Ok(grouped)
}

/// Interpret a payload as a list, treating `null` as empty
pub(crate) fn into_list(data: Value) -> Result<Vec<Value>, ApiError> {
    match data {
        Value::Array(items) => Ok(items),
        Value::Null => Ok(Vec::new()),
        other => Err(ApiError::invalid_response(format!(
            "expected a list, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::testing::{ScriptedTransport, test_client};

    #[test]
    fn group_by_chain_keeps_first_seen_order() {
        let grouped = group_by_chain(json!([
            {"id": "a", "chain": "bsc"},
            {"id": "b", "chain": "eth"},
            {"id": "c"},
            {"id": "d", "chain": "bsc"},
        ]))
        .unwrap();

        let keys: Vec<_> = grouped.keys().map(ChainId::as_str).collect();
        assert_eq!(keys, vec!["bsc", "eth"]);
        assert_eq!(grouped["bsc"].len(), 2);
        assert_eq!(grouped["eth"].len(), 1);
    }

    #[test]
    fn group_by_chain_rejects_non_list() {
        assert!(group_by_chain(json!({"chain": "eth"})).is_err());
    }

    #[test]
    fn into_list_accepts_null() {
        assert!(into_list(Value::Null).unwrap().is_empty());
        assert_eq!(into_list(json!([1])).unwrap(), vec![json!(1)]);
        assert!(into_list(json!("x")).is_err());
    }

    #[tokio::test]
    async fn fetch_sends_headers_and_params() {
        let transport = ScriptedTransport::new();
        transport.push_data("user/total_balance", json!({"total_usd_value": 1.0}));
        let client = test_client(transport);

        client
            .fetch(Endpoint::TotalBalance, vec![("addr", "0xabc".to_string())])
            .await
            .unwrap();

        let requests = client.transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].param("addr"), Some("0xabc"));
        assert!(requests[0].headers.iter().any(|(name, _)| *name == "user-agent"));
        assert!(requests[0].url.as_str().ends_with("/user/total_balance"));
    }

    #[tokio::test]
    async fn cancelled_client_stops_before_sending() {
        let token = CancellationToken::new();
        token.cancel();
        let client = test_client(ScriptedTransport::new()).with_cancellation(token);

        let result = client.fetch(Endpoint::NftUsedChains, vec![]).await;

        assert_eq!(result, Err(ApiError::Cancelled));
        assert!(client.transport.requests().is_empty());
    }
}
