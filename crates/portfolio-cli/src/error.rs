// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! CLI error types

use api_client::ApiError;
use thiserror::Error;

/// Errors raised by the command line front end
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// A backend query failed
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Output could not be serialized
    #[error("Failed to render output: {source}")]
    Render {
        /// Underlying serialization error
        #[from]
        source: serde_json::Error,
    },
}

impl From<config::ConfigError> for CliError {
    fn from(value: config::ConfigError) -> Self {
        Self::Config {
            message: value.to_string(),
        }
    }
}

impl CliError {
    /// Whether the run was stopped by the user
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Api(ApiError::Cancelled))
    }
}

/// Convenience result alias
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancellation_is_recognized() {
        assert!(CliError::Api(ApiError::Cancelled).is_cancelled());
        assert!(!CliError::Api(ApiError::Transport { status: 502 }).is_cancelled());
        let config = CliError::Config {
            message: "bad".to_string(),
        };
        assert!(!config.is_cancelled());
    }

    #[test]
    fn api_errors_display_transparently() {
        let error = CliError::from(ApiError::JobTimeout { attempts: 3 });
        assert_eq!(
            error.to_string(),
            "backend job still computing after 3 attempts"
        );
    }
}
