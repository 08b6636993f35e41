pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /records                      GET list, POST create (?overwrite=)
/// /records/{id}                 GET, PUT, DELETE
/// /staff                        GET roster
/// /reports/summary              GET KPI summary + report text
/// /reports/leaderboard          GET performance table + role distribution
/// /analyze                      POST OCR form fill
/// /auth/login                   GET redirect to Discord
/// /auth/callback                GET code exchange, sets session cookie
/// /auth/me                      GET session user or null
/// /auth/logout                  POST clears session cookie
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/records",
            get(handlers::records::list_records).post(handlers::records::create_record),
        )
        .route(
            "/records/{id}",
            get(handlers::records::get_record)
                .put(handlers::records::update_record)
                .delete(handlers::records::delete_record),
        )
        .route("/staff", get(handlers::staff::list_staff))
        .route("/reports/summary", get(handlers::reports::summary))
        .route("/reports/leaderboard", get(handlers::reports::performance))
        .route("/analyze", post(handlers::analyze::analyze))
        .route("/auth/login", get(handlers::auth::login))
        .route("/auth/callback", get(handlers::auth::callback))
        .route("/auth/me", get(handlers::auth::me))
        .route("/auth/logout", post(handlers::auth::logout))
}
