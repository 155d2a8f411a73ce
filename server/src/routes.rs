//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server only renders the Leptos app and hands out files: the compiled
//! WASM/JS/CSS bundle under `/pkg` and static assets for every other path.
//! There is no API; sessions live entirely in the browser.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Health check plus static assets as the fallback service.
pub fn asset_routes(assets_dir: &Path) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(ServeDir::new(assets_dir).append_index_html_on_directories(true))
}

/// Full router: Leptos SSR pages, `/pkg` bundle, assets, health check.
pub fn app(leptos_options: LeptosOptions, config: &ServerConfig) -> Router {
    let routes = generate_route_list(site::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || site::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    leptos_router
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .merge(asset_routes(&config.assets_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
