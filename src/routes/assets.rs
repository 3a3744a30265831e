//! Asset detail proxy routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser requests `/api/Assets/{Endpoint}/{id}` from this host. The
//! handler forwards the GET to the configured asset API and relays its status
//! and body unchanged, so non-2xx replies reach the client as-is.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Json, Response};
use client::net::api::detail_url;
use client::net::types::Endpoint;

use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("unknown endpoint: {0}")]
    UnknownEndpoint(String),
    #[error("invalid asset id: {0}")]
    InvalidId(String),
    #[error("asset API not configured")]
    NotConfigured,
    #[error("asset API request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::UnknownEndpoint(_) => StatusCode::NOT_FOUND,
            Self::InvalidId(_) => StatusCode::BAD_REQUEST,
            Self::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

/// A relayed asset API reply.
#[derive(Debug)]
pub struct Upstream {
    pub status: StatusCode,
    pub content_type: String,
    pub body: Bytes,
}

/// Forward one detail request to the asset API.
///
/// # Errors
///
/// Returns [`ProxyError::NotConfigured`] without a backend URL and
/// [`ProxyError::Upstream`] when the request or body read fails.
pub async fn forward(state: &AppState, endpoint: Endpoint, id: u32) -> Result<Upstream, ProxyError> {
    let base = state.backend_url.as_deref().ok_or(ProxyError::NotConfigured)?;
    let url = detail_url(base, endpoint, id);

    let resp = state.http.get(&url).send().await.inspect_err(|e| {
        tracing::warn!(%endpoint, id, error = %e, "asset API unreachable");
    })?;
    let status = resp.status();
    let content_type = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/json")
        .to_owned();
    let body = resp.bytes().await?;

    tracing::info!(%endpoint, id, status = status.as_u16(), "proxied asset detail");
    Ok(Upstream { status, content_type, body })
}

/// `GET /api/Assets/{endpoint}/{id}`: relay to the asset API.
pub async fn proxy_detail(
    State(state): State<AppState>,
    Path((endpoint, id)): Path<(String, String)>,
) -> Result<Response, ProxyError> {
    let Some(endpoint) = Endpoint::from_path(&endpoint) else {
        return Err(ProxyError::UnknownEndpoint(endpoint));
    };
    let Ok(id) = id.parse::<u32>() else {
        return Err(ProxyError::InvalidId(id));
    };

    let upstream = forward(&state, endpoint, id).await?;
    Ok((upstream.status, [(CONTENT_TYPE, upstream.content_type)], upstream.body).into_response())
}

#[cfg(test)]
#[path = "assets_test.rs"]
mod tests;
