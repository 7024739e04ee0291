// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Plain text rendering of query results

use std::fmt::Write;

use chrono::{DateTime, Utc};
use debank_api::{
    ChainAggregate, Curve, History, Portfolio, ProfitLeaderboard, portfolio_usd_value,
};
use indexmap::IndexMap;
use serde_json::Value;
use shared_types::ChainId;

/// Dollar amount with two decimals
pub fn usd(value: f64) -> String {
    if value < 0.0 {
        format!("-${:.2}", -value)
    } else {
        format!("${value:.2}")
    }
}

/// Unix timestamp as UTC date and time
#[allow(clippy::cast_possible_truncation)]
pub fn timestamp(time_at: f64) -> String {
    DateTime::<Utc>::from_timestamp(time_at.floor() as i64, 0).map_or_else(
        || time_at.to_string(),
        |at| at.format("%Y-%m-%d %H:%M:%S").to_string(),
    )
}

fn chain_label(chain: &ChainId) -> String {
    match chain.info() {
        Some(info) => format!("{} ({chain})", info.name),
        None => chain.to_string(),
    }
}

/// Holdings per chain with a grand total
pub fn portfolio(portfolio: &Portfolio) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<24} {:>16} {:>7} {:>9} {:>5}",
        "CHAIN", "USD", "TOKENS", "PROJECTS", "NFTS"
    );
    for aggregate in portfolio.values() {
        let ChainAggregate {
            chain,
            tokens,
            projects,
            nfts,
        } = aggregate;
        let _ = writeln!(
            out,
            "{:<24} {:>16} {:>7} {:>9} {:>5}",
            chain_label(chain),
            usd(aggregate.usd_value()),
            tokens.len(),
            projects.len(),
            nfts.len()
        );
    }
    let _ = write!(
        out,
        "{:<24} {:>16}",
        "TOTAL",
        usd(portfolio_usd_value(portfolio))
    );
    out
}

/// Transactions, newest first
pub fn history(history: &History) -> String {
    let mut out = String::new();
    for record in &history.records {
        let chain = record.chain.as_ref().map_or("-", ChainId::as_str);
        let category = record.cate_id.as_deref().unwrap_or("-");
        let project = record
            .project_id
            .as_ref()
            .and_then(|id| history.project_dict.get(id))
            .and_then(|project| project.get("name"))
            .and_then(Value::as_str)
            .unwrap_or("");
        let _ = writeln!(
            out,
            "{}  {chain:<6} {category:<10} {}  {project}",
            timestamp(record.time_at),
            record.id
        );
    }
    let _ = write!(out, "{} transactions", history.len());
    out
}

/// Chain symbols with their display names
pub fn chains(chains: &[ChainId]) -> String {
    chains
        .iter()
        .map(chain_label)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Current value and 24 hour change
pub fn curve(curve: &Curve) -> String {
    let Some(current) = curve.usd_value() else {
        return "no data".to_string();
    };
    let change = curve.usd_change().unwrap_or(0.0);
    match curve.percent_change() {
        Some(percent) => format!("{} ({} / {percent:+.2}%)", usd(current), usd(change)),
        None => format!("{} ({})", usd(current), usd(change)),
    }
}

/// Collections by realized profit, per chain
pub fn leaderboard(boards: &IndexMap<ChainId, ProfitLeaderboard>) -> String {
    let mut out = String::new();
    for board in boards.values() {
        let _ = writeln!(
            out,
            "{}: {}",
            chain_label(&board.chain),
            usd(board.usd_profit())
        );
        for entry in &board.entries {
            let _ = writeln!(
                out,
                "  {:<32} {:>14}",
                entry.name().unwrap_or("(unnamed)"),
                usd(entry.usd_profit)
            );
        }
    }
    out.trim_end().to_string()
}
