// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Command line front end for the DeBank portfolio client
//!
//! The binary loads layered configuration, builds a [`debank_api::DebankClient`]
//! bound to a cancellation token tied to Ctrl-C, runs one query and prints the
//! result as a table or as JSON.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod render;

pub use cli::{Cli, Command};
pub use config::AppConfig;
pub use error::{CliError, CliResult};
