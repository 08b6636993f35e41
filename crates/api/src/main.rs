use std::net::SocketAddr;
use std::sync::Arc;

use celltrack_api::config::ServerConfig;
use celltrack_api::router::build_app_router;
use celltrack_api::state::AppState;
use celltrack_core::staff::StaffDirectory;
use celltrack_store::{KvStore, RedisStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "celltrack_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();

    let store = RedisStore::connect(&config.store_url)
        .await
        .expect("Failed to connect to store");
    store.ping().await.expect("Store health check failed");
    tracing::info!(url = %config.store_url, "Store connection established");

    let staff = load_staff(&config.staff_path);
    tracing::info!(members = staff.members().len(), "Staff roster loaded");

    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST"),
        config.port,
    );

    let state = AppState::new(Arc::new(store), staff, config.clone());
    let app = build_app_router(state, &config);

    tracing::info!("Starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");
    axum::serve(listener, app).await.expect("Server error");
}

/// Load the staff roster, degrading to an empty directory if the file is
/// missing or malformed. Record names then fall back to raw staff IDs.
fn load_staff(path: &str) -> StaffDirectory {
    match std::fs::read_to_string(path) {
        Ok(json) => match StaffDirectory::from_json(&json) {
            Ok(dir) => dir,
            Err(err) => {
                tracing::warn!(path, %err, "Malformed staff roster, continuing without one");
                StaffDirectory::new(Vec::new())
            }
        },
        Err(err) => {
            tracing::warn!(path, %err, "Staff roster not found, continuing without one");
            StaffDirectory::new(Vec::new())
        }
    }
}
