// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Value ranking
//!
//! Sorting is stable and descending. Ties keep their input order, so ranking an
//! already ranked sequence changes nothing. A NaN value ranks below every number.

use std::{cmp::Reverse, hash::Hash};

use indexmap::IndexMap;

/// Sort key giving a total order over `f64`, with NaN below everything
fn rank_key(value: f64) -> Reverse<(bool, SortKey)> {
    if value.is_nan() {
        return Reverse((false, SortKey(0.0)));
    }
    // fold -0.0 into 0.0 so both tie
    Reverse((true, SortKey(value + 0.0)))
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct SortKey(f64);

impl Eq for SortKey {}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Sort `items` by `value_of`, highest first
pub fn rank_by<T, F>(items: &mut [T], value_of: F)
where
    F: Fn(&T) -> f64,
{
    items.sort_by_cached_key(|item| rank_key(value_of(item)));
}

/// Reorder a map by the value of its entries, highest first
pub fn rank_map<K, V, F>(map: IndexMap<K, V>, value_of: F) -> IndexMap<K, V>
where
    K: Hash + Eq,
    F: Fn(&V) -> f64,
{
    let mut entries: Vec<(K, V)> = map.into_iter().collect();
    rank_by(&mut entries, |(_, value)| value_of(value));
    entries.into_iter().collect()
}
