// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Typed records decoded from backend payloads
//!
//! Every record is built fresh from one response. Dollar totals are never
//! stored: they are recomputed from children by the `usd_value` methods.

use api_client::ApiError;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub mod account;
pub mod aggregate;
pub mod history;
pub mod nft;
pub mod project;
pub mod token;

pub use account::{Curve, CurveMark, User, UserInfo};
pub use aggregate::{ChainAggregate, Portfolio, portfolio_usd_value};
pub use history::{History, HistoryRecord, NftHistory, TokenTransfer};
pub use nft::{NftCollection, NftItem, ProfitEntry, ProfitLeaderboard};
pub use project::{PortfolioItem, Project};
pub use token::Token;

/// Decode a payload into a typed record
///
/// # Errors
///
/// Returns `ApiError::InvalidResponse` naming `what` if the payload does not fit
pub fn decode<T: DeserializeOwned>(what: &str, data: Value) -> Result<T, ApiError> {
    serde_json::from_value(data)
        .map_err(|e| ApiError::invalid_response(format!("failed to decode {what}: {e}")))
}

/// Sum of `f64` values
pub(crate) fn total<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    values.into_iter().sum()
}
