// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Chain scope of a query

use std::fmt;

use crate::ChainId;

/// Which chains a multi-chain query should cover
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ChainSelector {
    /// Every chain the address has used
    #[default]
    All,
    /// Exactly one named chain
    One(ChainId),
}

impl ChainSelector {
    /// The named chain, if the selector is single-chain
    pub fn chain(&self) -> Option<&ChainId> {
        match self {
            Self::All => None,
            Self::One(chain) => Some(chain),
        }
    }

    /// Chain query parameter, empty for "all chains" as the backend expects
    pub fn as_param(&self) -> &str {
        self.chain().map_or("", ChainId::as_str)
    }

    /// Whether `chain` falls inside this selector
    pub fn includes(&self, chain: &ChainId) -> bool {
        self.chain().is_none_or(|selected| selected == chain)
    }
}

impl From<Option<ChainId>> for ChainSelector {
    fn from(value: Option<ChainId>) -> Self {
        value.map_or(Self::All, Self::One)
    }
}

impl From<ChainId> for ChainSelector {
    fn from(value: ChainId) -> Self {
        Self::One(value)
    }
}

impl fmt::Display for ChainSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::One(chain) => write!(f, "{chain}"),
        }
    }
}
