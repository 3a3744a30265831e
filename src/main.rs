#![recursion_limit = "256"]

mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::HostConfig::from_env().expect("invalid configuration");
    match config.backend_url.as_deref() {
        Some(url) => tracing::info!(backend = url, "asset API configured"),
        None => tracing::warn!("ASSET_API_URL not set, asset detail requests will answer 503"),
    }

    let state = state::AppState::new(&config).expect("HTTP client init failed");
    let app = routes::app(state, config.static_dir.clone()).expect("router init failed");

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "asset-directory listening");
    axum::serve(listener, app).await.expect("server failed");
}
