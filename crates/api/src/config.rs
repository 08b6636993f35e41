use crate::auth::discord::DiscordConfig;
use crate::auth::session::{EditorPolicy, SessionConfig};

/// Server configuration loaded from environment variables.
///
/// All fields except the session secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Key-value store URL (default: `redis://127.0.0.1:6379`).
    pub store_url: String,
    /// Public base URL of the deployment, used for OAuth redirects.
    pub base_url: String,
    /// Path to the staff roster JSON file (default: `data/staff.json`).
    pub staff_path: String,
    /// OCR.space API key; the analyze endpoint is disabled without it.
    pub ocr_api_key: Option<String>,
    /// Session token configuration.
    pub session: SessionConfig,
    /// Who may create/update/delete records.
    pub editors: EditorPolicy,
    /// Discord OAuth application settings.
    pub discord: DiscordConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `STORE_URL`            | `redis://127.0.0.1:6379`   |
    /// | `BASE_URL`             | `http://localhost:3000`    |
    /// | `STAFF_PATH`           | `data/staff.json`          |
    /// | `OCR_SPACE_API_KEY`    | unset                      |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let store_url =
            std::env::var("STORE_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".into());

        let base_url =
            std::env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".into());

        let staff_path = std::env::var("STAFF_PATH").unwrap_or_else(|_| "data/staff.json".into());

        let ocr_api_key = std::env::var("OCR_SPACE_API_KEY").ok().filter(|k| !k.is_empty());

        let session = SessionConfig::from_env();
        let editors = EditorPolicy::from_env();
        let discord = DiscordConfig::from_env(&base_url);

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            store_url,
            base_url,
            staff_path,
            ocr_api_key,
            session,
            editors,
            discord,
        }
    }
}
