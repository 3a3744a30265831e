//! Error taxonomy for detail fetches.
//!
//! ERROR HANDLING
//! ==============
//! Every failure ends up as one line of text in the detail view. Status
//! failures name the endpoint and HTTP code; transport and decode failures
//! carry the underlying message, or a generic fallback when it is empty.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::Endpoint;

/// Shown when a failure carries no message of its own.
pub const GENERIC_FAILURE: &str = "An unexpected error occurred";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("Failed to fetch {endpoint}: HTTP {status}")]
    Status { endpoint: Endpoint, status: u16 },
    #[error("{}", or_generic(.0))]
    Network(String),
    #[error("{}", or_generic(.0))]
    Decode(String),
}

impl FetchError {
    pub fn network(err: impl std::fmt::Display) -> Self {
        Self::Network(err.to_string())
    }

    pub fn decode(err: impl std::fmt::Display) -> Self {
        Self::Decode(err.to_string())
    }
}

fn or_generic(message: &str) -> &str {
    if message.trim().is_empty() { GENERIC_FAILURE } else { message }
}
