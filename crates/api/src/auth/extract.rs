//! Session extractors for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;

use celltrack_core::CoreError;

use crate::auth::session::verify_session;
use crate::error::AppError;
use crate::state::AppState;

/// A verified session identity.
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub id: String,
    pub username: String,
    pub admin: bool,
}

/// Optional session: `None` when there is no cookie or it fails to verify.
///
/// Used by `/auth/me`, which reports `null` rather than 401.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<SessionUser>);

/// Required editor session. Rejects with 401 when there is no valid session
/// and 403 when the session user is not an editor.
#[derive(Debug, Clone)]
pub struct EditorUser(pub SessionUser);

fn session_from_parts(parts: &Parts, state: &AppState) -> Option<SessionUser> {
    let header = parts.headers.get(COOKIE)?.to_str().ok()?;
    let token = header.split(';').map(str::trim).find_map(|pair| {
        pair.strip_prefix(state.config.session.cookie_name.as_str())?
            .strip_prefix('=')
    })?;
    let claims = verify_session(token, &state.config.session).ok()?;
    Some(SessionUser {
        id: claims.sub,
        username: claims.username,
        admin: claims.admin,
    })
}

impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeUser(session_from_parts(parts, state)))
    }
}

impl FromRequestParts<AppState> for EditorUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = session_from_parts(parts, state).ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Sign in required".into()))
        })?;
        if !user.admin {
            return Err(AppError::Core(CoreError::Forbidden(
                "Editor access required".into(),
            )));
        }
        Ok(EditorUser(user))
    }
}
