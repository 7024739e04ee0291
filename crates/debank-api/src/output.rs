// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Typed or raw results

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use shared_types::ChainId;

/// Unprocessed payloads keyed by chain
pub type RawByChain = IndexMap<ChainId, Value>;

/// Whether a query decodes its payload or hands it back untouched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseMode {
    /// Decode into typed records and rank by value
    #[default]
    Typed,
    /// Return per-chain payloads as served, unranked
    Raw,
}

/// Result of a query that can run in either [`ResponseMode`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Output<T> {
    /// Decoded and ranked
    Typed(T),
    /// Payloads as served
    Raw(RawByChain),
}

impl<T> Output<T> {
    /// The typed result, if this is one
    pub fn typed(self) -> Option<T> {
        match self {
            Self::Typed(value) => Some(value),
            Self::Raw(_) => None,
        }
    }

    /// The raw payloads, if this is one
    pub fn raw(self) -> Option<RawByChain> {
        match self {
            Self::Typed(_) => None,
            Self::Raw(raw) => Some(raw),
        }
    }
}
