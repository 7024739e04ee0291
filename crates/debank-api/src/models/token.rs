// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Fungible token balances

use serde::{Deserialize, Serialize};
use shared_types::ChainId;

/// A fungible token balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Contract address, or the native coin symbol
    pub id: String,
    /// Chain the balance lives on
    pub chain: ChainId,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Ticker symbol
    #[serde(default)]
    pub symbol: Option<String>,
    /// Token decimals
    #[serde(default)]
    pub decimals: Option<u32>,
    /// Unit price in USD; unpriced tokens count as zero
    #[serde(default)]
    pub price: Option<f64>,
    /// Balance in whole units
    #[serde(default)]
    pub amount: f64,
}

impl Token {
    /// `price × amount`
    pub fn usd_value(&self) -> f64 {
        self.price.unwrap_or(0.0) * self.amount
    }
}
