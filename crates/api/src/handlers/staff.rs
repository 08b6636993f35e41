//! Staff roster handler.

use axum::extract::State;
use axum::Json;

use celltrack_core::staff::Staff;

use crate::state::AppState;

/// GET /staff
///
/// The read-only reference roster. Load failures already degraded to an
/// empty roster at startup, so this endpoint never fails.
pub async fn list_staff(State(state): State<AppState>) -> Json<Vec<Staff>> {
    Json(state.staff.members().to_vec())
}
