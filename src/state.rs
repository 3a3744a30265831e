//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the outbound HTTP client and the asset API base URL used by the
//! detail proxy.

use std::sync::Arc;
use std::time::Duration;

use crate::config::HostConfig;

/// Clone is required by Axum; inner fields are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub backend_url: Option<Arc<str>>,
}

impl AppState {
    /// Build state from host config. Only a connect timeout is applied to
    /// outbound requests.
    ///
    /// # Errors
    ///
    /// Returns the reqwest error if the HTTP client cannot be constructed.
    pub fn new(config: &HostConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()?;
        Ok(Self { http, backend_url: config.backend_url.as_deref().map(Arc::from) })
    }
}
