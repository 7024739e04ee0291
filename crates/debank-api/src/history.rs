// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Transaction history and historical prices

use api_client::{ApiError, Transport};
use serde_json::Value;
use shared_types::{ChainId, ChainSelector};
use tracing::{debug, info};

use crate::{
    client::{DebankClient, Endpoint},
    models::{History, decode},
};

/// Page sizes for a requested record count, each no larger than `page_size`
///
/// Sizes are produced lazily, so an oversized count costs nothing until the
/// pages are actually requested. A count of 0 still yields one page.
///
/// ```
/// use debank_api::history::page_sizes;
///
/// assert_eq!(page_sizes(45, 20).collect::<Vec<_>>(), vec![20, 20, 5]);
/// assert_eq!(page_sizes(40, 20).collect::<Vec<_>>(), vec![20, 20]);
/// assert_eq!(page_sizes(7, 20).collect::<Vec<_>>(), vec![7]);
/// ```
pub fn page_sizes(page_count: u32, page_size: u32) -> impl Iterator<Item = u32> {
    let page_size = page_size.max(1);
    let mut remaining = Some(page_count);
    std::iter::from_fn(move || {
        let left = remaining?;
        let requested = left.min(page_size);
        let rest = left - requested;
        remaining = (rest > 0).then_some(rest);
        Some(requested)
    })
}

/// Cursor for the page after one ending at `time_at`
///
/// The last whole second strictly before `time_at`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn next_cursor(time_at: f64) -> u64 {
    // float-to-int casts saturate, NaN becomes 0
    (time_at.ceil().max(0.0) as u64).saturating_sub(1)
}

impl<T: Transport> DebankClient<T> {
    /// Fetch the `page_count` most recent transactions before `start_time`
    ///
    /// A `start_time` of 0 means "now". Counts above the page size are split
    /// into consecutive pages, each starting just before the last timestamp of
    /// the previous one. Pages are concatenated in order; token and project
    /// tables are merged with later pages winning. Fetching stops early once a
    /// page comes back short.
    pub async fn history(
        &self,
        address: &str,
        chain: &ChainSelector,
        start_time: u64,
        page_count: u32,
    ) -> Result<History, ApiError> {
        let page_size = self.config().page_size;
        let pages = page_count.div_ceil(page_size.max(1)).max(1);

        let mut history = History::default();
        let mut cursor = start_time;

        for (index, requested) in page_sizes(page_count, page_size).enumerate() {
            let params = vec![
                ("user_addr", address.to_string()),
                ("chain", chain.as_param().to_string()),
                ("start_time", cursor.to_string()),
                ("page_count", requested.to_string()),
            ];
            let data = self.fetch(Endpoint::HistoryList, params).await?;
            let page: History = decode("history page", data)?;

            let served = page.len();
            debug!(
                page = index + 1,
                pages,
                requested,
                served,
                start_time = cursor,
                "fetched history page"
            );
            history.append(page);

            if served < requested as usize {
                break;
            }
            match history.last_time_at().map(next_cursor) {
                Some(next) if next > 0 => cursor = next,
                _ => break,
            }
        }

        info!(
            chain = %chain,
            records = history.len(),
            "history fetched"
        );
        Ok(history)
    }

    /// Price of a token in USD, now or at `time_at`
    pub async fn token_price(
        &self,
        token_id: &str,
        chain: &ChainId,
        time_at: Option<u64>,
    ) -> Result<f64, ApiError> {
        let mut params = vec![
            ("chain", chain.to_string()),
            ("token_id", token_id.to_string()),
        ];
        if let Some(time_at) = time_at {
            params.push(("time_at", time_at.to_string()));
        }

        let data = self.fetch(Endpoint::TokenPrice, params).await?;
        data.get("price").and_then(Value::as_f64).ok_or_else(|| {
            ApiError::invalid_response(format!("no price for {token_id} on {chain}"))
        })
    }
}
