// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! NFT holdings, profits and activity

use api_client::{ApiError, Transport};
use indexmap::IndexMap;
use serde_json::Value;
use shared_types::{ChainId, ChainSelector};
use tracing::{debug, info};

use crate::{
    aggregate::{Category, Lists, single_category},
    client::{DebankClient, Endpoint, into_list},
    models::{NftHistory, Portfolio, ProfitEntry, ProfitLeaderboard, decode},
    output::{Output, ResponseMode},
    ranking::rank_map,
};

/// Fixed page size of the NFT activity feed
const NFT_HISTORY_PAGE: &str = "20";

impl<T: Transport> DebankClient<T> {
    /// Chains on which the address has interacted with NFTs
    pub async fn used_chains(&self, address: &str) -> Result<Vec<ChainId>, ApiError> {
        let data = self
            .fetch(Endpoint::NftUsedChains, vec![("user_addr", address.to_string())])
            .await?;
        let chains: Vec<ChainId> = decode("used chains", data)?;

        debug!(chains = chains.len(), "discovered NFT chains");
        Ok(chains)
    }

    /// The selected chain, or every chain from [`Self::used_chains`]
    async fn fan_out_plan(
        &self,
        address: &str,
        selector: &ChainSelector,
    ) -> Result<Vec<ChainId>, ApiError> {
        match selector {
            ChainSelector::One(chain) => Ok(vec![chain.clone()]),
            ChainSelector::All => self.used_chains(address).await,
        }
    }

    /// Resolve one job-backed NFT query per chain
    async fn nft_jobs(
        &self,
        endpoint: Endpoint,
        address: &str,
        selector: &ChainSelector,
    ) -> Result<IndexMap<ChainId, Value>, ApiError> {
        let chains = self.fan_out_plan(address, selector).await?;
        self.per_chain(chains, |chain| {
            let params = vec![
                ("user_addr", address.to_string()),
                ("chain", chain.to_string()),
            ];
            self.resolve_job(endpoint, params)
        })
        .await
    }

    /// Held collection records per chain
    pub(crate) async fn nft_lists(
        &self,
        address: &str,
        selector: &ChainSelector,
    ) -> Result<Lists, ApiError> {
        self.nft_jobs(Endpoint::NftCollectionList, address, selector)
            .await?
            .into_iter()
            .map(|(chain, data)| into_list(data).map(|list| (chain, list)))
            .collect()
    }

    /// NFT collections held on one or every chain, ranked by value
    pub async fn nft_collections(
        &self,
        address: &str,
        selector: &ChainSelector,
        mode: ResponseMode,
    ) -> Result<Output<Portfolio>, ApiError> {
        let lists = self.nft_lists(address, selector).await?;
        single_category(Category::Nfts, lists, mode)
    }

    /// Realized profit per collection, per chain, ranked by total profit
    ///
    /// Chains without any entries are left out.
    pub async fn profit_leaderboard(
        &self,
        address: &str,
        selector: &ChainSelector,
    ) -> Result<IndexMap<ChainId, ProfitLeaderboard>, ApiError> {
        let jobs = self
            .nft_jobs(Endpoint::NftHistoryCollectionList, address, selector)
            .await?;

        let mut boards = IndexMap::new();
        for (chain, data) in jobs {
            let entries: Vec<ProfitEntry> = decode(
                &format!("profit entries on {chain}"),
                Value::Array(into_list(data)?),
            )?;
            if entries.is_empty() {
                continue;
            }
            boards.insert(chain.clone(), ProfitLeaderboard { chain, entries });
        }

        let boards = rank_map(boards, ProfitLeaderboard::usd_profit);
        info!(chains = boards.len(), "profit leaderboard fetched");
        Ok(boards)
    }

    /// Most recent NFT activity, one page per chain
    pub async fn nft_history(
        &self,
        address: &str,
        selector: &ChainSelector,
    ) -> Result<IndexMap<ChainId, NftHistory>, ApiError> {
        let chains = self.fan_out_plan(address, selector).await?;
        self.per_chain(chains, |chain| async move {
            let params = vec![
                ("user_addr", address.to_string()),
                ("chain", chain.to_string()),
                ("type", String::new()),
                ("anchor_time", String::new()),
                ("anchor_id", String::new()),
                ("page_count", NFT_HISTORY_PAGE.to_string()),
                ("direction", String::new()),
            ];
            let data = self.fetch(Endpoint::NftHistoryList, params).await?;
            Ok(NftHistory { chain, data })
        })
        .await
    }
}
