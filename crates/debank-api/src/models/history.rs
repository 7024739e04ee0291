// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Transaction and NFT history records

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared_types::ChainId;

/// Transaction history of an address, newest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    /// Records in the order the backend served them
    #[serde(default, rename = "history_list")]
    pub records: Vec<HistoryRecord>,
    /// Token metadata referenced by records, keyed by token id
    #[serde(default)]
    pub token_dict: IndexMap<String, Value>,
    /// Project metadata referenced by records, keyed by project id
    #[serde(default)]
    pub project_dict: IndexMap<String, Value>,
}

impl History {
    /// Append a later page: records are concatenated, side tables merged with
    /// the later page winning on key collisions
    pub fn append(&mut self, page: Self) {
        self.records.extend(page.records);
        self.token_dict.extend(page.token_dict);
        self.project_dict.extend(page.project_dict);
    }

    /// Timestamp of the oldest record served so far
    pub fn last_time_at(&self) -> Option<f64> {
        self.records.last().map(|record| record.time_at)
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no records were served
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Token metadata for a record's token id
    pub fn token(&self, token_id: &str) -> Option<&Value> {
        self.token_dict.get(token_id)
    }
}

/// One transaction in the history feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Transaction hash
    pub id: String,
    /// Unix timestamp in seconds, possibly fractional
    pub time_at: f64,
    /// Chain the transaction ran on
    #[serde(default)]
    pub chain: Option<ChainId>,
    /// Key into [`History::project_dict`]
    #[serde(default)]
    pub project_id: Option<String>,
    /// Category, e.g. `send`, `receive`, `approve`
    #[serde(default)]
    pub cate_id: Option<String>,
    /// Outgoing transfers
    #[serde(default)]
    pub sends: Vec<TokenTransfer>,
    /// Incoming transfers
    #[serde(default)]
    pub receives: Vec<TokenTransfer>,
    /// Raw transaction details
    #[serde(default)]
    pub tx: Option<Value>,
}

/// A token movement inside a transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenTransfer {
    /// Key into [`History::token_dict`]
    pub token_id: String,
    /// Amount in whole units
    #[serde(default)]
    pub amount: f64,
    /// Counterparty for outgoing transfers
    #[serde(default)]
    pub to_addr: Option<String>,
    /// Counterparty for incoming transfers
    #[serde(default)]
    pub from_addr: Option<String>,
}

/// One page of NFT activity on a chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NftHistory {
    /// Chain the activity happened on
    pub chain: ChainId,
    /// Payload as served
    pub data: Value,
}

impl NftHistory {
    /// Activity entries, if the payload carries a list
    pub fn events(&self) -> &[Value] {
        self.data
            .get("history_list")
            .and_then(Value::as_array)
            .map_or(&[], Vec::as_slice)
    }
}
