//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the asset API proxy and stitches it with Leptos SSR
//! rendering under a single Axum router. The WASM bundle is served from
//! `/pkg`, media from the static directory.

pub mod assets;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// API routes used by the hydrated client.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/Assets/{endpoint}/{id}", get(assets::proxy_detail))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// API routes + Leptos SSR pages + static bundle and media.
///
/// `/assets/images` is mounted explicitly so image requests never fall into
/// the `/assets/{name}/{id}` page route.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section).
pub fn app(state: AppState, static_dir: Option<PathBuf>) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());
    let static_root = static_dir.unwrap_or_else(|| site_root.clone());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .nest_service("/assets/images", ServeDir::new(static_root.join("assets").join("images")))
        .fallback_service(ServeDir::new(static_root))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
