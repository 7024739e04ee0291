// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Address profile and net worth curve records

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Address profile from `user/addr`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct User(pub Map<String, Value>);

impl User {
    /// Address the profile belongs to
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    /// Unix timestamp the address was first seen on chain
    pub fn born_at(&self) -> Option<f64> {
        self.0.get("born_at").and_then(Value::as_f64)
    }

    /// Whether the address is a contract
    pub fn is_contract(&self) -> bool {
        self.0
            .get("is_contract")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Any other reported field
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }
}

/// Social profile from `hi/user/info`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserInfo(pub Map<String, Value>);

impl UserInfo {
    /// The nested `user` object, falling back to the whole payload
    fn user(&self) -> &Map<String, Value> {
        self.0
            .get("user")
            .and_then(Value::as_object)
            .unwrap_or(&self.0)
    }

    /// Address the profile belongs to
    pub fn id(&self) -> Option<&str> {
        self.user().get("id").and_then(Value::as_str)
    }

    /// Web3 identity, if one is registered
    pub fn web3_id(&self) -> Option<&str> {
        self.user().get("web3_id").and_then(Value::as_str)
    }

    /// Follower count
    pub fn follower_count(&self) -> Option<u64> {
        self.user().get("follower_count").and_then(Value::as_u64)
    }

    /// Any other reported field
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.user().get(field)
    }
}

/// Net worth over the last 24 hours
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    /// Samples, oldest first
    #[serde(rename = "usd_value_list")]
    pub marks: Vec<CurveMark>,
}

/// One `(timestamp, value)` sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveMark(pub f64, pub f64);

impl CurveMark {
    /// Unix timestamp in seconds
    pub fn time_at(self) -> f64 {
        self.0
    }

    /// Net worth in USD
    pub fn usd_value(self) -> f64 {
        self.1
    }
}

impl Curve {
    /// Latest net worth
    pub fn usd_value(&self) -> Option<f64> {
        self.marks.last().map(|mark| mark.usd_value())
    }

    /// Latest minus earliest value
    pub fn usd_change(&self) -> Option<f64> {
        let (first, last) = (self.marks.first()?, self.marks.last()?);
        Some(last.usd_value() - first.usd_value())
    }

    /// Change relative to the earliest value, in percent
    ///
    /// `None` when the curve is empty or starts at zero.
    pub fn percent_change(&self) -> Option<f64> {
        let start = self.marks.first()?.usd_value();
        if start == 0.0 {
            return None;
        }
        Some(self.usd_change()? / start * 100.0)
    }
}
