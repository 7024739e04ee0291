// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Wallet token balances

use api_client::{ApiError, Transport};
use shared_types::{ChainId, ChainSelector};
use tracing::debug;

use crate::{
    aggregate::{Category, Lists, single_category},
    client::{DebankClient, Endpoint, group_by_chain, into_list},
    models::Portfolio,
    output::{Output, ResponseMode},
};

impl<T: Transport> DebankClient<T> {
    /// Token records for one chain, or for every chain from the cached list
    pub(crate) async fn token_lists(
        &self,
        address: &str,
        selector: &ChainSelector,
    ) -> Result<Lists, ApiError> {
        match selector {
            ChainSelector::One(chain) => {
                let params = vec![
                    ("user_addr", address.to_string()),
                    ("is_all", "false".to_string()),
                    ("chain", chain.to_string()),
                ];
                let data = self.fetch(Endpoint::TokenBalanceList, params).await?;
                Ok(Lists::from([(chain.clone(), into_list(data)?)]))
            }
            ChainSelector::All => {
                let data = self
                    .fetch(
                        Endpoint::TokenCacheBalanceList,
                        vec![("user_addr", address.to_string())],
                    )
                    .await?;
                let lists = group_by_chain(data)?;
                debug!(chains = lists.len(), "grouped cached balances");
                Ok(lists)
            }
        }
    }

    /// Token balances on one chain
    pub async fn token_balances(
        &self,
        address: &str,
        chain: &ChainId,
        mode: ResponseMode,
    ) -> Result<Output<Portfolio>, ApiError> {
        let lists = self
            .token_lists(address, &ChainSelector::One(chain.clone()))
            .await?;
        single_category(Category::Tokens, lists, mode)
    }

    /// Token balances on every chain, from the backend's cached list
    pub async fn cached_token_balances(
        &self,
        address: &str,
        mode: ResponseMode,
    ) -> Result<Output<Portfolio>, ApiError> {
        let lists = self.token_lists(address, &ChainSelector::All).await?;
        single_category(Category::Tokens, lists, mode)
    }
}
