// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Chain identifiers and the static chain catalog
//!
//! DeBank identifies chains by short symbols (`eth`, `bsc`, `matic`, ...). The
//! backend adds chains over time, so [`ChainId`] is an opaque key rather than a
//! closed enum: any symbol the backend returns is accepted and carried through
//! untouched. The catalog only adds display names for chains we know about.

use std::{borrow::Borrow, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Opaque chain symbol as used by the DeBank backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(String);

impl ChainId {
    /// Create a chain identifier from a backend symbol
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    /// The raw symbol, exactly as sent to and received from the backend
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Catalog metadata for this chain, if it is a known chain
    pub fn info(&self) -> Option<&'static ChainInfo> {
        lookup(&self.0)
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ChainId {
    type Err = ChainIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbol = s.trim();
        if symbol.is_empty() {
            return Err(ChainIdParseError::Empty);
        }
        Ok(Self(symbol.to_string()))
    }
}

impl From<&str> for ChainId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ChainId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for ChainId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ChainId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Static metadata for a chain known to the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainInfo {
    /// DeBank chain symbol
    pub symbol: &'static str,
    /// Human-readable chain name
    pub name: &'static str,
}

const CATALOG: &[ChainInfo] = &[
    ChainInfo {
        symbol: "eth",
        name: "Ethereum",
    },
    ChainInfo {
        symbol: "bsc",
        name: "BNB Chain",
    },
    ChainInfo {
        symbol: "matic",
        name: "Polygon",
    },
    ChainInfo {
        symbol: "arb",
        name: "Arbitrum",
    },
    ChainInfo {
        symbol: "op",
        name: "Optimism",
    },
    ChainInfo {
        symbol: "avax",
        name: "Avalanche",
    },
    ChainInfo {
        symbol: "ftm",
        name: "Fantom",
    },
    ChainInfo {
        symbol: "xdai",
        name: "Gnosis Chain",
    },
    ChainInfo {
        symbol: "base",
        name: "Base",
    },
    ChainInfo {
        symbol: "era",
        name: "zkSync Era",
    },
    ChainInfo {
        symbol: "linea",
        name: "Linea",
    },
    ChainInfo {
        symbol: "cro",
        name: "Cronos",
    },
    ChainInfo {
        symbol: "celo",
        name: "Celo",
    },
    ChainInfo {
        symbol: "movr",
        name: "Moonriver",
    },
];

/// Look up catalog metadata by DeBank symbol (case-insensitive)
pub fn lookup(symbol: &str) -> Option<&'static ChainInfo> {
    CATALOG
        .iter()
        .find(|info| info.symbol.eq_ignore_ascii_case(symbol))
}

/// Error type for chain identifier parsing
#[derive(Debug, thiserror::Error)]
pub enum ChainIdParseError {
    /// Chain symbol was empty or whitespace
    #[error("chain symbol cannot be empty")]
    Empty,
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use super::*;

    #[test]
    fn unknown_chains_are_accepted() {
        let chain: ChainId = "somenewchain".parse().unwrap();
        assert_eq!(chain.as_str(), "somenewchain");
        assert!(chain.info().is_none());
    }

    #[test]
    fn empty_symbol_rejected() {
        assert!(ChainId::from_str("").is_err());
        assert!(ChainId::from_str("   ").is_err());
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(ChainId::from_str(" eth ").unwrap(), ChainId::new("eth"));
    }

    #[test]
    fn catalog_lookup() {
        let eth = ChainId::new("eth");
        assert_eq!(eth.info().map(|i| i.name), Some("Ethereum"));

        assert_eq!(lookup("MATIC").map(|i| i.name), Some("Polygon"));
        assert!(lookup("nochain").is_none());
    }

    #[test]
    fn catalog_entries_unique() {
        let mut symbols = HashSet::new();
        for info in CATALOG {
            assert!(symbols.insert(info.symbol), "duplicate symbol {}", info.symbol);
        }
    }

    #[test]
    fn serde_is_transparent() {
        let chain = ChainId::new("bsc");
        assert_eq!(serde_json::to_string(&chain).unwrap(), "\"bsc\"");

        let parsed: ChainId = serde_json::from_str("\"op\"").unwrap();
        assert_eq!(parsed, ChainId::new("op"));
    }

    #[test]
    fn usable_as_str_keyed_map() {
        let mut values = HashMap::new();
        values.insert(ChainId::new("eth"), 1);
        assert_eq!(values.get("eth"), Some(&1));
    }
}
