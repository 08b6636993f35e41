//! Self-contained signed session tokens and the editor policy.
//!
//! The session is an HS256 JWT carried in an HttpOnly cookie. Verification
//! failure is a typed `Unauthorized` result, never a panic; optional
//! extraction (for `/auth/me`) maps any failure to "no session".

use std::collections::HashSet;

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use celltrack_core::CoreError;

/// Default session cookie name.
pub const DEFAULT_COOKIE_NAME: &str = "cct_session";
/// Default session lifetime in days.
const DEFAULT_EXPIRY_DAYS: i64 = 7;

/// Claims embedded in every session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// The user's external identity-provider id.
    pub sub: String,
    pub username: String,
    /// Whether the user may create/update/delete records.
    pub admin: bool,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
}

/// Configuration for session token issuance and verification.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Cookie carrying the token (default: `cct_session`).
    pub cookie_name: String,
    /// Session lifetime in days (default: 7).
    pub expiry_days: i64,
}

impl SessionConfig {
    /// Load session configuration from environment variables.
    ///
    /// | Env Var               | Required | Default       |
    /// |-----------------------|----------|---------------|
    /// | `SESSION_SECRET`      | **yes**  | --            |
    /// | `SESSION_COOKIE_NAME` | no       | `cct_session` |
    /// | `SESSION_EXPIRY_DAYS` | no       | `7`           |
    ///
    /// # Panics
    ///
    /// Panics if `SESSION_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("SESSION_SECRET").expect("SESSION_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "SESSION_SECRET must not be empty");

        let cookie_name = std::env::var("SESSION_COOKIE_NAME")
            .unwrap_or_else(|_| DEFAULT_COOKIE_NAME.to_string());

        let expiry_days: i64 = std::env::var("SESSION_EXPIRY_DAYS")
            .unwrap_or_else(|_| DEFAULT_EXPIRY_DAYS.to_string())
            .parse()
            .expect("SESSION_EXPIRY_DAYS must be a valid i64");

        Self {
            secret,
            cookie_name,
            expiry_days,
        }
    }
}

/// Issue a signed session token for the given identity.
pub fn issue_session(
    id: &str,
    username: &str,
    admin: bool,
    config: &SessionConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let claims = SessionClaims {
        sub: id.to_string(),
        username: username.to_string(),
        admin,
        iat: now,
        exp: now + config.expiry_days * 24 * 3600,
    };
    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Verify a session token, returning its claims.
///
/// Signature and expiry are validated; any failure is `Unauthorized`.
pub fn verify_session(token: &str, config: &SessionConfig) -> Result<SessionClaims, CoreError> {
    decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| CoreError::Unauthorized("Invalid or expired session".into()))
}

/// `Set-Cookie` value installing the session token.
pub fn session_cookie(token: &str, config: &SessionConfig) -> String {
    let max_age = config.expiry_days * 24 * 3600;
    format!(
        "{}={token}; Path=/; HttpOnly; Max-Age={max_age}; SameSite=Lax",
        config.cookie_name
    )
}

/// `Set-Cookie` value clearing the session.
pub fn clear_session_cookie(config: &SessionConfig) -> String {
    format!(
        "{}=; Path=/; HttpOnly; Max-Age=0; SameSite=Lax",
        config.cookie_name
    )
}

// ---------------------------------------------------------------------------
// Editor policy
// ---------------------------------------------------------------------------

/// Who may create, update, and delete records.
///
/// Built from an environment-configured allowlist of identity-provider ids
/// minus an optional exclude list, but injected as a value so handlers and
/// tests never consult globals, and the policy can later be swapped for a
/// role table.
#[derive(Debug, Clone, Default)]
pub struct EditorPolicy {
    editors: HashSet<String>,
}

impl EditorPolicy {
    /// Build from comma-separated id lists.
    pub fn from_lists(editor_ids: &str, exclude_ids: &str) -> Self {
        let excluded: HashSet<&str> = exclude_ids
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        let editors = editor_ids
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty() && !excluded.contains(s))
            .map(str::to_string)
            .collect();
        Self { editors }
    }

    /// Load from `EDITOR_IDS` / `EDITOR_EXCLUDE_IDS`.
    pub fn from_env() -> Self {
        Self::from_lists(
            &std::env::var("EDITOR_IDS").unwrap_or_default(),
            &std::env::var("EDITOR_EXCLUDE_IDS").unwrap_or_default(),
        )
    }

    pub fn is_editor(&self, id: &str) -> bool {
        self.editors.contains(id)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
