mod config;
mod routes;

use leptos::prelude::get_configuration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")))
        .init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let leptos_options = get_configuration(None)
        .expect("leptos configuration")
        .leptos_options;

    let app = routes::app(leptos_options, &config);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, assets = %config.assets_dir.display(), "site listening");
    axum::serve(listener, app).await.expect("server failed");
}
