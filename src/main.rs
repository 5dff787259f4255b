//! Remote UI - Main Entry Point
//!
//! Federated remote exposing the App page and Button primitive to a host shell.

use std::path::Path;

use remote_ui::app::application::run_app;
use remote_ui::bundle::config::BundleConfig;
use remote_ui::services::dev_server;

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting remote-ui...");

    // The bundle descriptor is immutable after this point
    let config = match BundleConfig::load_or_default(Path::new("bundle.toml")) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid bundle descriptor: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = config.emit_manifest(Path::new(".")) {
        tracing::error!("Failed to emit remote entry manifest: {e}");
        std::process::exit(1);
    }

    // Serve the bundle for hosts on other origins
    dev_server::start(config);

    // Run the GPUI application
    run_app();
}
