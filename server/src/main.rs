mod config;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");

    let buildings = services::buildings::load_directory(&config.buildings_path)
        .await
        .expect("building directory load failed");

    let portal = services::portal::PortalClient::new(config.open_classrooms_url.clone(), config.upstream_timeout())
        .expect("portal client init failed");

    let state = state::AppState::new(buildings, Arc::new(portal), config.campus_timezone, config.lookahead());

    let app = routes::app(state, config.cors_allow_origin.clone());
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "watclassroom listening");
    axum::serve(listener, app).await.expect("server failed");
}
