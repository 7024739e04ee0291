// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! NFT collections and profit leaderboards

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use shared_types::ChainId;

use super::total;

/// An NFT collection with the items the address holds in it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NftCollection {
    /// Collection id
    pub id: String,
    /// Chain of the collection contract
    pub chain: ChainId,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Floor price in USD
    #[serde(default)]
    pub floor_price: Option<f64>,
    /// Held items
    #[serde(default, rename = "nft_list")]
    pub items: Vec<NftItem>,
}

impl NftCollection {
    /// Sum of item values
    pub fn usd_value(&self) -> f64 {
        total(self.items.iter().map(NftItem::usd_value))
    }
}

/// One held NFT
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NftItem {
    /// Backend item id
    pub id: String,
    /// Contract address
    #[serde(default)]
    pub contract_id: Option<String>,
    /// Token id within the contract
    #[serde(default)]
    pub inner_id: Option<String>,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Quantity held
    #[serde(default = "one")]
    pub amount: f64,
    /// Last traded price in USD
    #[serde(default)]
    pub usd_price: Option<f64>,
}

const fn one() -> f64 {
    1.0
}

impl NftItem {
    /// `amount × usd_price`
    pub fn usd_value(&self) -> f64 {
        self.amount * self.usd_price.unwrap_or(0.0)
    }
}

/// Realized NFT profit per collection on one chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitLeaderboard {
    /// Chain the leaderboard covers
    pub chain: ChainId,
    /// One entry per collection ever held
    pub entries: Vec<ProfitEntry>,
}

impl ProfitLeaderboard {
    /// Sum of entry profits
    pub fn usd_profit(&self) -> f64 {
        total(self.entries.iter().map(|entry| entry.usd_profit))
    }
}

/// Profit realized on one collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitEntry {
    /// Realized profit in USD
    #[serde(default)]
    pub usd_profit: f64,
    /// Remaining collection fields, as reported
    #[serde(flatten)]
    pub collection: Map<String, Value>,
}

impl ProfitEntry {
    /// Collection name, if reported
    pub fn name(&self) -> Option<&str> {
        self.collection.get("name").and_then(Value::as_str)
    }
}
