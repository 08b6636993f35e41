//! Discord OAuth collaborator: authorize-URL construction and the
//! code-for-identity exchange. The handshake itself is Discord's; this
//! module only drives it and reports failures as upstream errors.

use serde::Deserialize;

use celltrack_core::CoreError;

const AUTHORIZE_URL: &str = "https://discord.com/api/oauth2/authorize";
const TOKEN_URL: &str = "https://discord.com/api/oauth2/token";
const USER_URL: &str = "https://discord.com/api/users/@me";

/// OAuth application settings.
#[derive(Debug, Clone, Default)]
pub struct DiscordConfig {
    pub client_id: String,
    pub client_secret: String,
    /// Callback URL registered with the OAuth application.
    pub redirect_uri: String,
}

impl DiscordConfig {
    /// Load from `DISCORD_CLIENT_ID` / `DISCORD_CLIENT_SECRET` /
    /// `DISCORD_REDIRECT_URI`. Missing values are tolerated here and
    /// rejected at login time, so the rest of the API works without OAuth
    /// configured (e.g. in tests).
    pub fn from_env(base_url: &str) -> Self {
        Self {
            client_id: std::env::var("DISCORD_CLIENT_ID").unwrap_or_default(),
            client_secret: std::env::var("DISCORD_CLIENT_SECRET").unwrap_or_default(),
            redirect_uri: std::env::var("DISCORD_REDIRECT_URI")
                .unwrap_or_else(|_| format!("{base_url}/api/auth/callback")),
        }
    }

    /// The authorize URL the login endpoint redirects to.
    pub fn authorize_url(&self) -> String {
        format!(
            "{AUTHORIZE_URL}?client_id={}&redirect_uri={}&response_type=code&scope=identify&prompt=consent",
            urlencode(&self.client_id),
            urlencode(&self.redirect_uri),
        )
    }
}

/// The identity fields we keep from Discord's user object.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscordUser {
    pub id: String,
    pub username: String,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Exchange an authorization code for the user's identity.
pub async fn exchange_code(
    http: &reqwest::Client,
    config: &DiscordConfig,
    code: &str,
) -> Result<DiscordUser, CoreError> {
    let params = [
        ("client_id", config.client_id.as_str()),
        ("client_secret", config.client_secret.as_str()),
        ("grant_type", "authorization_code"),
        ("code", code),
        ("redirect_uri", config.redirect_uri.as_str()),
    ];

    let token_resp = http
        .post(TOKEN_URL)
        .form(&params)
        .send()
        .await
        .map_err(|err| CoreError::Upstream(format!("token exchange failed: {err}")))?;
    if !token_resp.status().is_success() {
        return Err(CoreError::Upstream(format!(
            "token exchange failed: {}",
            token_resp.status()
        )));
    }
    let token: TokenResponse = token_resp
        .json()
        .await
        .map_err(|err| CoreError::Upstream(format!("token response unreadable: {err}")))?;

    let user_resp = http
        .get(USER_URL)
        .bearer_auth(&token.access_token)
        .send()
        .await
        .map_err(|err| CoreError::Upstream(format!("user fetch failed: {err}")))?;
    if !user_resp.status().is_success() {
        return Err(CoreError::Upstream(format!(
            "user fetch failed: {}",
            user_resp.status()
        )));
    }
    user_resp
        .json()
        .await
        .map_err(|err| CoreError::Upstream(format!("user response unreadable: {err}")))
}

/// Percent-encode the characters that matter in a query component.
fn urlencode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            other => {
                out.push('%');
                out.push_str(&format!("{other:02X}"));
            }
        }
    }
    out
}
