// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Shared types for the DeBank portfolio workspace
//!
//! This crate provides the chain identifier and chain scope types used by both
//! the HTTP plumbing and the aggregation engine, avoiding circular dependencies.

pub mod chains;
pub mod selector;

pub use chains::{ChainId, ChainIdParseError, ChainInfo, lookup};
pub use selector::ChainSelector;
