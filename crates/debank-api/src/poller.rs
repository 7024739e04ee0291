// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Bounded polling of asynchronous backend jobs
//!
//! Some endpoints answer with `{"job": {...}}` while the backend is still
//! computing, and with `{"job": null, "result": {"data": ...}}` once done. The
//! poller repeats the identical request at a fixed interval until the result is
//! ready or the attempt budget runs out.

use api_client::{ApiError, Transport, validate::is_truthy};
use serde_json::Value;
use tokio_retry::{RetryIf, strategy::FixedInterval};
use tracing::{debug, warn};

use crate::client::{DebankClient, Endpoint, Params};

/// Outcome of one poll that did not produce a result
#[derive(Debug)]
enum PollError {
    /// The backend is still computing
    Pending,
    /// The request itself failed; never retried
    Failed(ApiError),
}

impl<T: Transport> DebankClient<T> {
    /// Resolve a backend job, returning `data.result.data`
    ///
    /// One proxy is selected for the whole job so every attempt reaches the
    /// backend the same way.
    pub(crate) async fn resolve_job(
        &self,
        endpoint: Endpoint,
        params: Params,
    ) -> Result<Value, ApiError> {
        let poll = self.config().poll;
        let proxy = self.select_proxy();

        // the first attempt is not a retry
        let retries = usize::try_from(poll.max_attempts.saturating_sub(1)).unwrap_or(usize::MAX);
        let strategy = FixedInterval::new(poll.delay).take(retries);

        let mut attempt = 0u32;
        let action = || {
            attempt += 1;
            let current = attempt;
            let params = params.clone();
            let proxy = proxy.clone();
            async move {
                let data = self
                    .fetch_via(endpoint, params, proxy)
                    .await
                    .map_err(PollError::Failed)?;
                job_result(data, current, endpoint)
            }
        };

        let outcome = self
            .cancellable(RetryIf::start(strategy, action, |error: &PollError| {
                matches!(error, PollError::Pending)
            }))
            .await?;

        match outcome {
            Ok(data) => Ok(data),
            Err(PollError::Failed(error)) => Err(error),
            Err(PollError::Pending) => {
                warn!(
                    endpoint = endpoint.path(),
                    attempts = poll.max_attempts,
                    "backend job did not finish"
                );
                Err(ApiError::JobTimeout {
                    attempts: poll.max_attempts,
                })
            }
        }
    }
}

/// Extract the finished result from one poll payload
fn job_result(mut data: Value, attempt: u32, endpoint: Endpoint) -> Result<Value, PollError> {
    if data.get("job").is_some_and(is_truthy) {
        debug!(endpoint = endpoint.path(), attempt, "backend job still computing");
        return Err(PollError::Pending);
    }

    data.get_mut("result")
        .and_then(|result| result.get_mut("data"))
        .map(Value::take)
        .ok_or_else(|| {
            PollError::Failed(ApiError::invalid_response(format!(
                "{} finished without result.data",
                endpoint.path()
            )))
        })
}
