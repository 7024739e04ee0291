// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Portfolio aggregation over the DeBank web API
//!
//! [`DebankClient`] turns an address into per-chain holdings by orchestrating
//! many small backend calls, each routed through the proxy selection and
//! response validation of [`api_client`].
//!
//! # Architecture
//!
//! - **Job polling**: [`poller`] - resolves server-side computations with a
//!   bounded fixed-interval retry
//! - **Pagination**: [`history`] - splits large history requests into pages
//!   linked by a timestamp cursor
//! - **Aggregation**: [`aggregate`] - fans out the token, project and NFT
//!   queries concurrently and merges them per chain
//! - **Ranking**: [`ranking`] - stable descending order by USD value
//! - **Models**: [`models`] - typed records with derived dollar values
//!
//! # Example
//!
//! ```no_run
//! use debank_api::{DebankClient, DebankConfig, ResponseMode};
//! use shared_types::ChainSelector;
//!
//! # async fn run() -> Result<(), api_client::ApiError> {
//! let client = DebankClient::new(DebankConfig::default())?;
//! let address = "0x00000000219ab540356cbb839cbe05303d7705fa";
//! let portfolio = client
//!     .balance(address, &ChainSelector::All, ResponseMode::Typed)
//!     .await?;
//! if let Some(portfolio) = portfolio.typed() {
//!     for (chain, holdings) in &portfolio {
//!         println!("{chain}: ${:.2}", holdings.usd_value());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod account;
pub mod aggregate;
pub mod client;
pub mod config;
pub mod history;
pub mod models;
pub mod nft;
pub mod output;
pub mod poller;
pub mod portfolio;
pub mod ranking;
pub mod token;

#[cfg(test)]
mod testing;

pub use api_client::{ApiError, ProxySpec};
pub use client::{DebankClient, Endpoint};
pub use config::{DebankConfig, PollConfig};
pub use models::{
    ChainAggregate, Curve, CurveMark, History, HistoryRecord, NftCollection, NftHistory, NftItem,
    Portfolio, PortfolioItem, ProfitEntry, ProfitLeaderboard, Project, Token, TokenTransfer, User,
    UserInfo, portfolio_usd_value,
};
pub use output::{Output, RawByChain, ResponseMode};
