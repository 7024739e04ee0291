// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! DeBank portfolio explorer
//!
//! A read-only command line client for address portfolios across chains.

use anyhow::{Context, Result};
use clap::Parser;
use debank_api::DebankClient;
use portfolio_cli::{AppConfig, Cli, commands};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // logs go to stderr so query output stays pipeable
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    let debank_config = config.to_debank_config()?;
    info!(
        base_url = %debank_config.base_url,
        proxied = debank_config.proxies.is_configured(),
        "configuration loaded"
    );

    let cancellation_token = CancellationToken::new();
    commands::cancel_on_ctrl_c(cancellation_token.clone());

    let client = DebankClient::new(debank_config)?.with_cancellation(cancellation_token.clone());
    let result = commands::run(&client, &cli.command, cli.json).await;
    cancellation_token.cancel();

    let output = match result {
        Err(error) if error.is_cancelled() => {
            warn!("interrupted");
            return Ok(());
        }
        other => other.context("query failed")?,
    };
    println!("{output}");

    Ok(())
}
