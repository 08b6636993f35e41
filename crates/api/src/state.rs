use std::sync::Arc;

use celltrack_core::staff::StaffDirectory;
use celltrack_store::{KvStore, RecordRepo};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; inner data is behind `Arc` or is already `Clone`.
#[derive(Clone)]
pub struct AppState {
    /// Record repository over the key-value store.
    pub repo: RecordRepo,
    /// The store itself, for health reporting.
    pub store: Arc<dyn KvStore>,
    /// Read-only staff roster.
    pub staff: Arc<StaffDirectory>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Shared HTTP client (Discord OAuth, OCR proxy).
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(
        store: Arc<dyn KvStore>,
        staff: StaffDirectory,
        config: ServerConfig,
    ) -> Self {
        Self {
            repo: RecordRepo::new(store.clone()),
            store,
            staff: Arc::new(staff),
            config: Arc::new(config),
            http: reqwest::Client::new(),
        }
    }
}
