// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! In-memory transport for orchestration tests

use std::{
    collections::{HashMap, VecDeque},
    sync::Mutex,
};

use api_client::{GetRequest, RawResponse, Transport};
use serde_json::{Value, json};
use tokio::time::Instant;

use crate::{DebankClient, config::DebankConfig};

/// Serves queued responses and records every request
///
/// Responses are queued per endpoint path, optionally narrowed to one chain with
/// a `path@chain` key. A request with nothing queued gets a 404.
#[derive(Debug, Default)]
pub(crate) struct ScriptedTransport {
    queues: Mutex<HashMap<String, VecDeque<RawResponse>>>,
    log: Mutex<Vec<(GetRequest, Instant)>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&self, key: &str, response: RawResponse) {
        self.queues
            .lock()
            .unwrap()
            .entry(key.to_string())
            .or_default()
            .push_back(response);
    }

    /// Queue a successful response carrying `data`
    pub(crate) fn push_data(&self, key: &str, data: Value) {
        self.push(key, RawResponse::ok(json!({"error_code": 0, "data": data})));
    }

    pub(crate) fn requests(&self) -> Vec<GetRequest> {
        self.log
            .lock()
            .unwrap()
            .iter()
            .map(|(request, _)| request.clone())
            .collect()
    }

    pub(crate) fn requests_to(&self, path: &str) -> Vec<GetRequest> {
        self.requests()
            .into_iter()
            .filter(|request| endpoint_path(request) == path)
            .collect()
    }

    pub(crate) fn request_times(&self) -> Vec<Instant> {
        self.log.lock().unwrap().iter().map(|(_, at)| *at).collect()
    }
}

fn endpoint_path(request: &GetRequest) -> &str {
    request.url.path().trim_start_matches('/')
}

impl Transport for ScriptedTransport {
    async fn get(&self, request: &GetRequest) -> RawResponse {
        self.log
            .lock()
            .unwrap()
            .push((request.clone(), Instant::now()));

        let path = endpoint_path(request);
        let mut queues = self.queues.lock().unwrap();

        let chain_key = request.param("chain").map(|chain| format!("{path}@{chain}"));
        if let Some(response) = chain_key
            .and_then(|key| queues.get_mut(&key))
            .and_then(VecDeque::pop_front)
        {
            return response;
        }

        queues
            .get_mut(path)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| RawResponse::empty(404))
    }
}

/// A job payload the backend is still computing
pub(crate) fn pending_job() -> Value {
    json!({"job": {"id": "job-1", "status": "pending"}, "result": null})
}

/// A finished job payload
pub(crate) fn finished_job(data: Value) -> Value {
    json!({"job": null, "result": {"data": data}})
}

pub(crate) fn test_config() -> DebankConfig {
    DebankConfig::default()
}

pub(crate) fn test_client(transport: ScriptedTransport) -> DebankClient<ScriptedTransport> {
    DebankClient::with_transport(test_config(), transport).unwrap()
}

/// A token record worth `price × amount`
pub(crate) fn token(id: &str, chain: &str, price: f64, amount: f64) -> Value {
    json!({"id": id, "chain": chain, "symbol": id.to_uppercase(), "price": price, "amount": amount})
}

/// A project record holding one supplied token
pub(crate) fn project(id: &str, chain: &str, usd: f64) -> Value {
    json!({
        "id": id,
        "name": id,
        "chain": chain,
        "portfolio_item_list": [{
            "name": "Deposit",
            "detail": {"supply_token_list": [token("usdc", chain, 1.0, usd)]}
        }]
    })
}

/// An NFT collection record holding one item priced at `usd`
pub(crate) fn collection(id: &str, chain: &str, usd: f64) -> Value {
    json!({
        "id": id,
        "chain": chain,
        "name": id,
        "nft_list": [{"id": format!("{id}-1"), "inner_id": "1", "usd_price": usd}]
    })
}
