// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Per-chain aggregation of tokens, DeFi positions and NFTs

use api_client::{ApiError, Transport};
use indexmap::IndexMap;
use serde_json::{Value, json};
use shared_types::{ChainId, ChainSelector};
use tracing::{debug, error, info};

use crate::{
    client::DebankClient,
    models::{ChainAggregate, Portfolio, decode, portfolio_usd_value},
    output::{Output, RawByChain, ResponseMode},
    ranking::rank_map,
};

/// Raw records of one category, grouped by chain
pub(crate) type Lists = IndexMap<ChainId, Vec<Value>>;

/// A holdings category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Category {
    Tokens,
    Projects,
    Nfts,
}

/// Raw records of every category on one chain
#[derive(Debug, Default)]
pub(crate) struct ChainLists {
    tokens: Vec<Value>,
    projects: Vec<Value>,
    nfts: Vec<Value>,
}

impl ChainLists {
    fn slot(&mut self, category: Category) -> &mut Vec<Value> {
        match category {
            Category::Tokens => &mut self.tokens,
            Category::Projects => &mut self.projects,
            Category::Nfts => &mut self.nfts,
        }
    }

    fn is_empty(&self) -> bool {
        self.tokens.is_empty() && self.projects.is_empty() && self.nfts.is_empty()
    }

    fn into_raw(self) -> Value {
        json!({
            "tokens": self.tokens,
            "projects": self.projects,
            "nfts": self.nfts,
        })
    }

    fn decode(self, chain: ChainId) -> Result<ChainAggregate, ApiError> {
        Ok(ChainAggregate {
            tokens: decode(&format!("tokens on {chain}"), Value::Array(self.tokens))?,
            projects: decode(&format!("projects on {chain}"), Value::Array(self.projects))?,
            nfts: decode(&format!("NFT collections on {chain}"), Value::Array(self.nfts))?,
            chain,
        })
    }
}

/// Union the category lists by chain
///
/// Chains keep first-seen order across `categories`. In single-chain mode the
/// selected chain is the only key, present even when every category is empty;
/// otherwise a chain is kept only if some category has records for it.
pub(crate) fn merge(
    categories: Vec<(Category, Lists)>,
    selector: &ChainSelector,
) -> IndexMap<ChainId, ChainLists> {
    let mut merged: IndexMap<ChainId, ChainLists> = IndexMap::new();
    if let ChainSelector::One(chain) = selector {
        merged.insert(chain.clone(), ChainLists::default());
    }

    for (category, lists) in categories {
        for (chain, records) in lists {
            if !selector.includes(&chain) {
                continue;
            }
            merged
                .entry(chain)
                .or_default()
                .slot(category)
                .extend(records);
        }
    }

    if selector.chain().is_none() {
        merged.retain(|_, lists| !lists.is_empty());
    }
    merged
}

/// Decode and rank merged lists, or hand them back untouched
pub(crate) fn assemble(
    merged: IndexMap<ChainId, ChainLists>,
    mode: ResponseMode,
) -> Result<Output<Portfolio>, ApiError> {
    match mode {
        ResponseMode::Raw => Ok(Output::Raw(
            merged
                .into_iter()
                .map(|(chain, lists)| (chain, lists.into_raw()))
                .collect(),
        )),
        ResponseMode::Typed => {
            let portfolio = merged
                .into_iter()
                .map(|(chain, lists)| Ok((chain.clone(), lists.decode(chain)?)))
                .collect::<Result<Portfolio, ApiError>>()?;
            Ok(Output::Typed(rank_map(portfolio, ChainAggregate::usd_value)))
        }
    }
}

/// Shape a single category's lists as a query result
///
/// Raw results carry each chain's record list as served.
pub(crate) fn single_category(
    category: Category,
    lists: Lists,
    mode: ResponseMode,
) -> Result<Output<Portfolio>, ApiError> {
    match mode {
        ResponseMode::Raw => Ok(Output::Raw(
            lists
                .into_iter()
                .map(|(chain, records)| (chain, Value::Array(records)))
                .collect::<RawByChain>(),
        )),
        ResponseMode::Typed => {
            let merged = lists
                .into_iter()
                .map(|(chain, records)| {
                    let mut chain_lists = ChainLists::default();
                    *chain_lists.slot(category) = records;
                    (chain, chain_lists)
                })
                .collect();
            assemble(merged, mode)
        }
    }
}

impl<T: Transport> DebankClient<T> {
    /// Everything the address holds, per chain, ranked by value
    ///
    /// NFTs, wallet tokens and DeFi positions are fetched concurrently. With a
    /// single chain selected, tokens come from that chain's balance list and
    /// positions are filtered to it; otherwise the cached cross-chain balance
    /// list is used and NFTs are fetched for every chain the address used. Any
    /// failing category fails the whole aggregation.
    pub async fn balance(
        &self,
        address: &str,
        selector: &ChainSelector,
        mode: ResponseMode,
    ) -> Result<Output<Portfolio>, ApiError> {
        let (nfts, tokens, projects) = tokio::try_join!(
            self.nft_lists(address, selector),
            self.token_lists(address, selector),
            self.project_lists(address),
        )
        .inspect_err(|e| error!(error = %e, chain = %selector, "balance aggregation failed"))?;

        debug!(
            nft_chains = nfts.len(),
            token_chains = tokens.len(),
            project_chains = projects.len(),
            "categories fetched"
        );

        let merged = merge(
            vec![
                (Category::Nfts, nfts),
                (Category::Tokens, tokens),
                (Category::Projects, projects),
            ],
            selector,
        );
        let output = assemble(merged, mode)?;

        if let Output::Typed(portfolio) = &output {
            info!(
                chain = %selector,
                chains = portfolio.len(),
                usd_value = portfolio_usd_value(portfolio),
                "balance aggregated"
            );
        }
        Ok(output)
    }
}
