// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Command execution

use api_client::Transport;
use debank_api::{DebankClient, Output, ResponseMode};
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::{
    cli::{Command, selector},
    error::CliResult,
    render,
};

/// Serialize `value` as pretty JSON, or render it as text
fn emit<S: Serialize>(
    value: &S,
    json: bool,
    text: impl FnOnce(&S) -> String,
) -> CliResult<String> {
    if json {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(text(value))
    }
}

/// Run one command and return what to print
pub async fn run<T: Transport>(
    client: &DebankClient<T>,
    command: &Command,
    json: bool,
) -> CliResult<String> {
    match command {
        Command::Balance {
            address,
            chain,
            raw,
        } => {
            let mode = if *raw {
                ResponseMode::Raw
            } else {
                ResponseMode::Typed
            };
            let output = client
                .balance(address, &selector(chain.as_ref()), mode)
                .await?;
            match output {
                Output::Typed(portfolio) => emit(&portfolio, json, render::portfolio),
                Output::Raw(raw) => Ok(serde_json::to_string_pretty(&raw)?),
            }
        }
        Command::History {
            address,
            chain,
            start_time,
            count,
        } => {
            let history = client
                .history(address, &selector(chain.as_ref()), *start_time, *count)
                .await?;
            emit(&history, json, render::history)
        }
        Command::UsedChains { address } => {
            let chains = client.used_chains(address).await?;
            emit(&chains, json, |chains| render::chains(chains))
        }
        Command::Total { address } => {
            let total = client.total_balance(address).await?;
            emit(&total, json, |total| render::usd(*total))
        }
        Command::Curve { address } => {
            let curve = client.net_curve_24h(address).await?;
            emit(&curve, json, render::curve)
        }
        Command::Leaderboard { address, chain } => {
            let boards = client
                .profit_leaderboard(address, &selector(chain.as_ref()))
                .await?;
            emit(&boards, json, render::leaderboard)
        }
        Command::Price {
            token_id,
            chain,
            at,
        } => {
            let price = client.token_price(token_id, chain, *at).await?;
            emit(&price, json, |price| render::usd(*price))
        }
    }
}

/// Cancel `token` when the user presses Ctrl-C
///
/// The listener exits quietly once `token` is cancelled elsewhere.
pub fn cancel_on_ctrl_c(token: CancellationToken) {
    tokio::spawn(async move {
        tokio::select! {
            result = tokio::signal::ctrl_c() => match result {
                Ok(()) => {
                    warn!("received Ctrl-C, cancelling in-flight requests");
                    token.cancel();
                }
                Err(error) => warn!(%error, "failed to listen for Ctrl-C"),
            },
            () = token.cancelled() => {
                debug!("signal listener exiting");
            }
        }
    });
}
