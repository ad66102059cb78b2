pub mod app;
pub mod config;
pub mod error;
pub mod features;
pub mod utilities;

use std::net::SocketAddr;
use std::path::PathBuf;

use config::Config;
use tracing::info;
use utilities::observability::init_tracing;
use utilities::shutdown_signal::shutdown_signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // These are baked at COMPILE time
    let cargo_manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let cargo_pkg_name = env!("CARGO_PKG_NAME");
    let cargo_pkg_version = env!("CARGO_PKG_VERSION");

    // Load service-specific .env
    dotenvy::from_path(cargo_manifest_dir.join(".env")).ok();
    // Load workspace root .env as fallback
    dotenvy::dotenv().ok();

    let config = Config::init(cargo_manifest_dir).await?;
    init_tracing(config.tracing_level.as_deref(), config.log_format.as_deref());

    let app = app::app(cargo_pkg_name, cargo_pkg_version, &config);
    let listener = tokio::net::TcpListener::bind(config.server_address).await?;

    info!(
        "🚀 {} service running at {:#?}",
        cargo_pkg_name, config.server_address
    );
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    println!("👋 Shutting down gracefully...");

    Ok(())
}
