// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Command line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use shared_types::{ChainId, ChainSelector};

/// Read-only DeBank portfolio explorer
#[derive(Debug, Parser)]
#[command(name = "debank-portfolio", version, about)]
pub struct Cli {
    /// Configuration file (TOML or JSON); defaults to ./debank.{toml,json} if present
    #[arg(long, global = true, env = "DEBANK_CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Print JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// What to query
    #[command(subcommand)]
    pub command: Command,
}

/// Queries
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Tokens, DeFi positions and NFTs per chain, ranked by value
    Balance {
        /// Address to inspect
        address: String,
        /// Restrict to one chain
        #[arg(long)]
        chain: Option<ChainId>,
        /// Print the backend payloads untouched
        #[arg(long)]
        raw: bool,
    },
    /// Most recent transactions
    History {
        /// Address to inspect
        address: String,
        /// Restrict to one chain
        #[arg(long)]
        chain: Option<ChainId>,
        /// Only transactions before this unix timestamp; 0 means now
        #[arg(long, default_value_t = 0)]
        start_time: u64,
        /// Number of transactions
        #[arg(long, default_value_t = 20)]
        count: u32,
    },
    /// Chains with NFT activity
    UsedChains {
        /// Address to inspect
        address: String,
    },
    /// Net worth across every chain
    Total {
        /// Address to inspect
        address: String,
    },
    /// Net worth over the last 24 hours
    Curve {
        /// Address to inspect
        address: String,
    },
    /// Realized NFT profit per collection
    Leaderboard {
        /// Address to inspect
        address: String,
        /// Restrict to one chain
        #[arg(long)]
        chain: Option<ChainId>,
    },
    /// Token price in USD
    Price {
        /// Token contract address or native coin id
        token_id: String,
        /// Chain the token lives on
        #[arg(long)]
        chain: ChainId,
        /// Unix timestamp for a historical price
        #[arg(long)]
        at: Option<u64>,
    },
}

/// Chain selection from an optional `--chain`
pub fn selector(chain: Option<&ChainId>) -> ChainSelector {
    ChainSelector::from(chain.cloned())
}
