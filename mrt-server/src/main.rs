use mrt_server::config::ServerConfig;
use mrt_server::directory::StationDirectory;
use mrt_server::web::{AppState, create_router};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "mrt_server=info,tower_http=info";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = ServerConfig::from_env().expect("Invalid configuration");

    let source = config
        .snapshot_source()
        .expect("Failed to create station feed client");
    match &config.fixture {
        Some(path) => warn!(path = %path.display(), "serving fixture snapshot, not the live feed"),
        None => info!(url = %config.feed_url, timeout_secs = config.timeout_secs, "using live feed"),
    }

    let directory = StationDirectory::new(source).with_clock(config.clock());
    info!(clock = ?directory.clock(), "schedule clock");

    let app = create_router(AppState::new(directory));

    let addr = config.bind_addr;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    info!("MRT station directory listening on http://{addr}");
    info!("  GET /health");
    info!("  GET /v1/stations");
    info!("  GET /v1/stations/:id");
    info!("  GET /v1/stations/:id/estimates");
    info!("  GET /v1/stations/:id/facilities");

    axum::serve(listener, app).await.expect("Server error");
}
