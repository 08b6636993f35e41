//! Handlers for the records resource.
//!
//! Reads are public and degrade to empty results on store failure so the
//! dashboard keeps rendering; writes require an editor session and surface
//! their failures distinctly.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::json;

use celltrack_core::query::RecordFilter;
use celltrack_core::record::{CreateRecord, Record, UpdateRecord};
use celltrack_core::CoreError;

use crate::auth::extract::EditorUser;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Query parameters for listing and report endpoints.
///
/// Everything arrives as an optional string; empty strings and values that
/// fail to parse act as "no filter", matching the historical clients that
/// send `staffId=`/`verdict=` for "All".
#[derive(Debug, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub from: Option<String>,
    pub to: Option<String>,
    pub staff_id: Option<String>,
    pub cell_call_type: Option<String>,
    pub verdict: Option<String>,
    pub limit: Option<String>,
}

impl ListParams {
    pub fn into_filter(self) -> RecordFilter {
        RecordFilter {
            from: self.from.as_deref().and_then(|s| parse_date_bound(s, false)),
            to: self.to.as_deref().and_then(|s| parse_date_bound(s, true)),
            staff_id: parse_opt(self.staff_id),
            cell_call_type: parse_opt(self.cell_call_type),
            verdict: parse_opt(self.verdict),
            limit: parse_opt(self.limit),
        }
    }
}

fn parse_opt<T: std::str::FromStr>(value: Option<String>) -> Option<T> {
    value.and_then(|s| {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }
        match s.parse() {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(value = s, "Unrecognized filter value; treating as no filter");
                None
            }
        }
    })
}

/// Parse a date bound: RFC 3339, or a bare `YYYY-MM-DD` expanded to the
/// start (for `from`) or end (for `to`) of that day so bounds stay inclusive.
fn parse_date_bound(value: &str, end_of_day: bool) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(date) = value.parse::<NaiveDate>() {
        let time = if end_of_day {
            date.and_hms_opt(23, 59, 59)?
        } else {
            date.and_hms_opt(0, 0, 0)?
        };
        return Some(time.and_utc());
    }
    tracing::warn!(value, "Unparseable date bound; treating as no filter");
    None
}

/// Query parameters for record creation.
#[derive(Debug, Default, serde::Deserialize)]
pub struct CreateParams {
    /// Replace an existing record with the same DOJ report number instead
    /// of conflicting.
    #[serde(default)]
    pub overwrite: bool,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /records?from&to&staffId&cellCallType&verdict&limit
///
/// List records newest-first. Degrades to an empty array on store failure.
pub async fn list_records(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<Vec<Record>> {
    let filter = params.into_filter();
    match state.repo.list(&filter).await {
        Ok(rows) => Json(rows),
        Err(err) => {
            tracing::error!(error = %err, "Record listing failed; returning empty result");
            Json(Vec::new())
        }
    }
}

/// POST /records?overwrite=
///
/// Create a record. Requires an editor session.
pub async fn create_record(
    EditorUser(user): EditorUser,
    State(state): State<AppState>,
    Query(params): Query<CreateParams>,
    Json(mut input): Json<CreateRecord>,
) -> AppResult<impl IntoResponse> {
    // The session identity is the submitter of record unless the form
    // supplied one explicitly.
    if input.by.is_none() {
        input.by = Some(user.username.clone());
    }

    let record = state.repo.create(input, params.overwrite).await?;

    tracing::info!(
        user = %user.username,
        id = %record.id,
        doj = %record.doj_report_number,
        overwrite = params.overwrite,
        "Record created"
    );

    Ok(Json(record))
}

/// GET /records/{id}
pub async fn get_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let record = state
        .repo
        .get_by_id(&id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Record",
                id,
            })
        })?;
    Ok(Json(record))
}

/// PUT /records/{id}
///
/// Merge a partial update onto an existing record. Requires an editor
/// session.
pub async fn update_record(
    EditorUser(user): EditorUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateRecord>,
) -> AppResult<impl IntoResponse> {
    let record = state.repo.update(&id, input).await?;

    tracing::info!(user = %user.username, id = %record.id, "Record updated");

    Ok(Json(record))
}

/// DELETE /records/{id}
///
/// Idempotent delete. Requires an editor session.
pub async fn delete_record(
    EditorUser(user): EditorUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    state.repo.delete(&id).await?;

    tracing::info!(user = %user.username, id, "Record deleted");

    Ok(Json(json!({ "ok": true })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use celltrack_core::record::Verdict;
    use chrono::Timelike;

    #[test]
    fn into_filter_treats_empty_and_unknown_as_no_filter() {
        let params = ListParams {
            staff_id: Some("".into()),
            verdict: Some("MAYBE".into()),
            cell_call_type: Some("".into()),
            ..Default::default()
        };
        assert_eq!(params.into_filter(), RecordFilter::default());
    }

    #[test]
    fn into_filter_parses_values() {
        let params = ListParams {
            from: Some("2024-01-01".into()),
            to: Some("2024-01-31".into()),
            staff_id: Some("3".into()),
            verdict: Some("NOT_GUILTY".into()),
            limit: Some("25".into()),
            ..Default::default()
        };
        let filter = params.into_filter();
        assert_eq!(filter.staff_id, Some(3));
        assert_eq!(filter.verdict, Some(Verdict::NotGuilty));
        assert_eq!(filter.limit, Some(25));
        // `to` covers the whole day.
        assert_eq!(filter.to.unwrap().hour(), 23);
        assert_eq!(filter.from.unwrap().hour(), 0);
    }

    #[test]
    fn parse_date_bound_accepts_rfc3339() {
        let parsed = parse_date_bound("2024-01-15T08:30:00Z", false).unwrap();
        assert_eq!(parsed.hour(), 8);
        assert_eq!(parse_date_bound("yesterday-ish", false), None);
    }
}
