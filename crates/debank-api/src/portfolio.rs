// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! DeFi positions

use api_client::{ApiError, Transport};

use crate::{
    aggregate::{Category, Lists, single_category},
    client::{DebankClient, Endpoint, group_by_chain},
    models::Portfolio,
    output::{Output, ResponseMode},
};

impl<T: Transport> DebankClient<T> {
    /// Project records on every chain
    pub(crate) async fn project_lists(&self, address: &str) -> Result<Lists, ApiError> {
        let data = self
            .fetch(Endpoint::ProjectList, vec![("user_addr", address.to_string())])
            .await?;
        group_by_chain(data)
    }

    /// Protocols holding the address's assets (lending, liquidity, staking),
    /// per chain, ranked by value
    pub async fn projects(
        &self,
        address: &str,
        mode: ResponseMode,
    ) -> Result<Output<Portfolio>, ApiError> {
        let lists = self.project_lists(address).await?;
        single_category(Category::Projects, lists, mode)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use shared_types::ChainId;

    use super::*;
    use crate::testing::{ScriptedTransport, project, test_client};

    #[tokio::test]
    async fn projects_grouped_by_chain() {
        let transport = ScriptedTransport::new();
        transport.push_data(
            "portfolio/project_list",
            json!([
                project("uniswap3", "eth", 10.0),
                project("gmx", "arb", 400.0),
                project("curve", "eth", 15.0),
            ]),
        );
        let client = test_client(transport);

        let portfolio = client
            .projects("0xabc", ResponseMode::Typed)
            .await
            .unwrap()
            .typed()
            .unwrap();

        let chains: Vec<_> = portfolio.keys().map(ChainId::as_str).collect();
        assert_eq!(chains, vec!["arb", "eth"]);
        assert_eq!(portfolio["eth"].project_usd_value(), 25.0);
        assert!(portfolio["eth"].tokens.is_empty());
    }
}
