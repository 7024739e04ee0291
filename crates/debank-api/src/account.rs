// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Address profile and net worth

use api_client::{ApiError, Transport};
use serde_json::Value;

use crate::{
    client::{DebankClient, Endpoint},
    models::{Curve, User, UserInfo, decode},
};

impl<T: Transport> DebankClient<T> {
    /// On-chain profile of an address
    pub async fn user(&self, address: &str) -> Result<User, ApiError> {
        let data = self
            .fetch(Endpoint::UserAddr, vec![("addr", address.to_string())])
            .await?;
        decode("user", data)
    }

    /// Social profile of an address
    pub async fn user_info(&self, address: &str) -> Result<UserInfo, ApiError> {
        let data = self
            .fetch(Endpoint::UserInfo, vec![("id", address.to_string())])
            .await?;
        decode("user info", data)
    }

    /// Net worth in USD across every chain
    pub async fn total_balance(&self, address: &str) -> Result<f64, ApiError> {
        let data = self
            .fetch(Endpoint::TotalBalance, vec![("addr", address.to_string())])
            .await?;
        data.get("total_usd_value")
            .and_then(Value::as_f64)
            .ok_or_else(|| ApiError::invalid_response("total balance lacks total_usd_value"))
    }

    /// Net worth over the last 24 hours
    pub async fn net_curve_24h(&self, address: &str) -> Result<Curve, ApiError> {
        let data = self
            .fetch(Endpoint::NetCurve24h, vec![("user_addr", address.to_string())])
            .await?;
        decode("net curve", data)
    }
}
