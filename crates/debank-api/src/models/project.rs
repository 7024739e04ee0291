// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! DeFi projects and their positions

use serde::{Deserialize, Serialize};
use shared_types::ChainId;

use super::{Token, total};

/// A DeFi protocol holding part of the address's assets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Backend project id
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Chain the position lives on
    pub chain: ChainId,
    /// Project website
    #[serde(default)]
    pub site_url: Option<String>,
    /// Positions held in this project
    #[serde(default, rename = "portfolio_item_list")]
    pub portfolio_items: Vec<PortfolioItem>,
}

impl Project {
    /// Sum of position values
    pub fn usd_value(&self) -> f64 {
        total(self.portfolio_items.iter().map(PortfolioItem::usd_value))
    }
}

/// One position inside a project, e.g. "Lending" or "Liquidity Pool"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawPortfolioItem")]
pub struct PortfolioItem {
    /// Category label
    pub name: String,
    /// Supplied and reward tokens
    pub tokens: Vec<Token>,
    /// Borrowed tokens, reported apart from the position value
    pub borrowed: Vec<Token>,
}

impl PortfolioItem {
    /// Sum of held token values
    pub fn usd_value(&self) -> f64 {
        total(self.tokens.iter().map(Token::usd_value))
    }

    /// Sum of borrowed token values
    pub fn debt_usd_value(&self) -> f64 {
        total(self.borrowed.iter().map(Token::usd_value))
    }

    /// Held value minus debt
    pub fn net_usd_value(&self) -> f64 {
        self.usd_value() - self.debt_usd_value()
    }
}

#[derive(Deserialize)]
struct RawPortfolioItem {
    #[serde(default)]
    name: String,
    #[serde(default)]
    detail: RawDetail,
}

#[derive(Default, Deserialize)]
struct RawDetail {
    #[serde(default)]
    supply_token_list: Vec<Token>,
    #[serde(default)]
    reward_token_list: Vec<Token>,
    #[serde(default)]
    borrow_token_list: Vec<Token>,
}

impl From<RawPortfolioItem> for PortfolioItem {
    fn from(raw: RawPortfolioItem) -> Self {
        let RawDetail {
            mut supply_token_list,
            reward_token_list,
            borrow_token_list,
        } = raw.detail;
        supply_token_list.extend(reward_token_list);

        Self {
            name: raw.name,
            tokens: supply_token_list,
            borrowed: borrow_token_list,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn aave() -> Project {
        serde_json::from_value(json!({
            "id": "aave3",
            "name": "Aave V3",
            "chain": "eth",
            "site_url": "https://app.aave.com",
            "portfolio_item_list": [{
                "name": "Lending",
                "detail": {
                    "supply_token_list": [
                        {"id": "eth", "chain": "eth", "price": 2000.0, "amount": 2.0}
                    ],
                    "reward_token_list": [
                        {"id": "0xaave", "chain": "eth", "price": 100.0, "amount": 1.0}
                    ],
                    "borrow_token_list": [
                        {"id": "0xusdc", "chain": "eth", "price": 1.0, "amount": 1500.0}
                    ]
                }
            }, {
                "name": "Rewards",
                "detail": {}
            }]
        }))
        .unwrap()
    }

    #[test]
    fn item_value_counts_supply_and_rewards() {
        let project = aave();
        let lending = &project.portfolio_items[0];
        assert_eq!(lending.tokens.len(), 2);
        assert_eq!(lending.usd_value(), 4100.0);
        assert_eq!(lending.debt_usd_value(), 1500.0);
        assert_eq!(lending.net_usd_value(), 2600.0);
    }

    #[test]
    fn project_value_sums_items() {
        let project = aave();
        assert_eq!(project.portfolio_items[1].usd_value(), 0.0);
        assert_eq!(project.usd_value(), 4100.0);
    }
}
