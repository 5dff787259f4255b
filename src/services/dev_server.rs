//! Development Asset Server
//!
//! Serves the built bundle and the remote entry manifest so a host on another
//! origin can load this remote during development. Configuration comes from the
//! bundle descriptor; the server itself adds no behavior beyond serving it.

use std::net::SocketAddr;

use axum::Router;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::{error, info, warn};

use crate::assets::Assets;
use crate::bundle::config::{BundleConfig, DevServerConfig};
use crate::error::Result;
use crate::services::runtime::spawn_in_tokio;

/// Start the dev server in the background
pub fn start(config: BundleConfig) {
    spawn_in_tokio(async move {
        if let Err(e) = serve(config).await {
            error!("Dev server failed: {e}");
        }
    });
}

/// Bind the configured port and serve until shutdown
async fn serve(config: BundleConfig) -> Result<()> {
    let addr = SocketAddr::from(([127, 0, 0, 1], config.dev_server.port));
    let router = build_router(&config)?;

    info!(
        "Dev server for remote '{}' listening on http://{addr}",
        config.federation.name
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}

/// Build the router serving the manifest and the built assets
pub fn build_router(config: &BundleConfig) -> Result<Router> {
    let entry_json = config.federation.remote_entry().to_json()?;
    let entry_path = format!("/{}", config.federation.filename);

    let router = Router::new().route(
        &entry_path,
        get(move || {
            let body = entry_json.clone();
            async move { ([(header::CONTENT_TYPE, "application/json")], body) }
        }),
    );

    let static_files = ServeDir::new(&config.dev_server.static_dir);
    let router = if config.dev_server.history_api_fallback {
        router.fallback_service(static_files.not_found_service(get(serve_index)))
    } else {
        router.fallback_service(static_files)
    };

    Ok(router.layer(cors_layer(&config.dev_server)))
}

/// Serve the embedded host page template
async fn serve_index() -> impl IntoResponse {
    match Assets::get("index.html") {
        Some(file) => Html(String::from_utf8_lossy(&file.data).into_owned()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Cross-origin layer derived from the configured response headers
fn cors_layer(config: &DevServerConfig) -> CorsLayer {
    match config.allow_origin() {
        Some("*") => CorsLayer::permissive(),
        Some(origin) => match origin.parse::<HeaderValue>() {
            Ok(origin) => CorsLayer::new().allow_origin(origin),
            Err(_) => {
                warn!("Ignoring malformed Access-Control-Allow-Origin: {origin}");
                CorsLayer::new()
            }
        },
        None => CorsLayer::new(),
    }
}
