// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Response classification

use serde_json::Value;
use tracing::{debug, warn};

use crate::{ApiError, RawResponse};

const SUCCESS_MARKER: &str = "error_code";
const ERROR_MESSAGE: &str = "error_msg";
const DATA: &str = "data";

/// Classify a raw response into its `data` payload or an error
///
/// Checks run in a fixed order: HTTP status, presence of the `error_code`
/// marker, the marker's value, and finally extraction of `data`.
pub fn validate(response: RawResponse) -> Result<Value, ApiError> {
    let RawResponse { status, body } = response;

    if status != 200 {
        debug!(status, "backend returned non-success status");
        return Err(ApiError::Transport { status });
    }

    let Some(Value::Object(mut body)) = body else {
        warn!(status, "response body missing or not a JSON object");
        return Err(ApiError::Transport { status });
    };

    let Some(marker) = body.get(SUCCESS_MARKER) else {
        warn!(status, "response body lacks the error_code marker");
        return Err(ApiError::Transport { status });
    };

    if is_truthy(marker) {
        let message = match body.get(ERROR_MESSAGE) {
            Some(Value::String(message)) => message.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        };
        debug!(status, message, "backend declared a failure");
        return Err(ApiError::Backend { status, message });
    }

    body.remove(DATA)
        .ok_or_else(|| ApiError::invalid_response("response has no data field"))
}

/// Loose truthiness of a JSON value
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
