//! Session endpoints: Discord OAuth login/callback, `me`, and logout.

use axum::extract::{Query, State};
use axum::http::header::SET_COOKIE;
use axum::response::{AppendHeaders, IntoResponse, Redirect};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::discord::exchange_code;
use crate::auth::extract::MaybeUser;
use crate::auth::session::{clear_session_cookie, issue_session, session_cookie};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Safe session fields reported by `/auth/me`.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub id: String,
    pub username: String,
    pub admin: bool,
}

#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
}

/// GET /auth/login -- redirect to the Discord authorize URL.
pub async fn login(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    if state.config.discord.client_id.is_empty() {
        return Err(AppError::InternalError(
            "DISCORD_CLIENT_ID not configured".into(),
        ));
    }
    Ok(Redirect::temporary(&state.config.discord.authorize_url()))
}

/// GET /auth/callback?code= -- exchange the code, set the session cookie,
/// and send the browser back to the app.
pub async fn callback(
    State(state): State<AppState>,
    Query(params): Query<CallbackParams>,
) -> AppResult<impl IntoResponse> {
    let code = params
        .code
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::BadRequest("Missing code".into()))?;

    let user = exchange_code(&state.http, &state.config.discord, &code).await?;
    let admin = state.config.editors.is_editor(&user.id);

    let token = issue_session(&user.id, &user.username, admin, &state.config.session)
        .map_err(|err| AppError::InternalError(format!("session signing failed: {err}")))?;

    tracing::info!(user_id = %user.id, username = %user.username, admin, "Session issued");

    Ok((
        AppendHeaders([(SET_COOKIE, session_cookie(&token, &state.config.session))]),
        Redirect::to(&state.config.base_url),
    ))
}

/// GET /auth/me -- the current session user, or `null` without one.
pub async fn me(MaybeUser(user): MaybeUser) -> Json<Option<MeResponse>> {
    Json(user.map(|u| MeResponse {
        id: u.id,
        username: u.username,
        admin: u.admin,
    }))
}

/// POST /auth/logout -- clear the session cookie.
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    (
        AppendHeaders([(SET_COOKIE, clear_session_cookie(&state.config.session))]),
        Json(serde_json::json!({ "ok": true })),
    )
}
