//! REST client for the asset detail endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): a stub error, since detail data is only fetched on
//! user action in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<DetailResponse, FetchError>`; no failure panics or
//! leaves the caller without a value to record.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::FetchError;
use super::types::{DetailResponse, Endpoint};

/// Backend base URL baked in at build time; empty means same origin.
pub fn api_base() -> &'static str {
    option_env!("ASSET_API_BASE").unwrap_or("").trim_end_matches('/')
}

/// `{base}/api/Assets/{endpoint}/{id}`.
pub fn detail_url(base: &str, endpoint: Endpoint, id: u32) -> String {
    format!("{}/api/Assets/{endpoint}/{id}", base.trim_end_matches('/'))
}

/// Fetch one detail category for an asset.
///
/// # Errors
///
/// Returns [`FetchError::Status`] for non-2xx replies, [`FetchError::Network`]
/// when the request cannot be completed and [`FetchError::Decode`] when the
/// body is not the expected JSON.
pub async fn fetch_detail(endpoint: Endpoint, id: u32) -> Result<DetailResponse, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let url = detail_url(api_base(), endpoint, id);
        log::debug!("GET {url}");
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(FetchError::network)?;
        if !resp.ok() {
            log::warn!("{endpoint} for asset {id} failed with HTTP {}", resp.status());
            return Err(FetchError::Status { endpoint, status: resp.status() });
        }
        let body: serde_json::Value = resp.json().await.map_err(FetchError::decode)?;
        DetailResponse::parse(endpoint, body).map_err(FetchError::decode)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, id);
        Err(FetchError::Network("not available on server".to_owned()))
    }
}
