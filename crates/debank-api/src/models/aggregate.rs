// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Per-chain portfolio aggregate

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use shared_types::ChainId;

use super::{NftCollection, Project, Token, total};

/// Everything the address holds on one chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainAggregate {
    /// Chain the holdings live on
    pub chain: ChainId,
    /// Wallet token balances
    pub tokens: Vec<Token>,
    /// DeFi positions
    pub projects: Vec<Project>,
    /// NFT holdings
    pub nfts: Vec<NftCollection>,
}

impl ChainAggregate {
    /// An aggregate with every category empty
    pub fn empty(chain: ChainId) -> Self {
        Self {
            chain,
            tokens: Vec::new(),
            projects: Vec::new(),
            nfts: Vec::new(),
        }
    }

    /// Wallet token value
    pub fn token_usd_value(&self) -> f64 {
        total(self.tokens.iter().map(Token::usd_value))
    }

    /// DeFi position value
    pub fn project_usd_value(&self) -> f64 {
        total(self.projects.iter().map(Project::usd_value))
    }

    /// NFT holding value
    pub fn nft_usd_value(&self) -> f64 {
        total(self.nfts.iter().map(NftCollection::usd_value))
    }

    /// Sum over every category
    pub fn usd_value(&self) -> f64 {
        self.token_usd_value() + self.project_usd_value() + self.nft_usd_value()
    }

    /// Whether no category holds anything
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty() && self.projects.is_empty() && self.nfts.is_empty()
    }
}

/// Per-chain holdings, ranked by value descending
pub type Portfolio = IndexMap<ChainId, ChainAggregate>;

/// Total value across a portfolio
pub fn portfolio_usd_value(portfolio: &Portfolio) -> f64 {
    total(portfolio.values().map(ChainAggregate::usd_value))
}
