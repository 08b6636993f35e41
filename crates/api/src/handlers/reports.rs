//! Server-side rendering of the analytics KPI summary and the performance
//! leaderboard, built on the pure aggregation functions in `celltrack_core`.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use std::collections::BTreeMap;

use celltrack_core::report::{
    kpi_summary, leaderboard, render_report, role_distribution, KpiSummary, LeaderboardRow,
};

use crate::error::AppResult;
use crate::handlers::records::ListParams;
use crate::state::AppState;

/// KPI summary plus its deterministic textual rendering.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub kpi: KpiSummary,
    pub report: String,
}

/// GET /reports/summary?from&to&staffId&cellCallType&verdict
///
/// Observer KPIs need the staff-unfiltered dataset for the same date range,
/// so a second listing runs when a staff filter is active.
pub async fn summary(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let filter = params.into_filter();
    let rows = state.repo.list(&filter).await?;

    let observer_rows = if filter.staff_id.is_some() {
        state.repo.list(&filter.date_only()).await?
    } else {
        rows.clone()
    };

    let kpi = kpi_summary(&rows, &observer_rows, filter.staff_id);
    let report = render_report(&kpi, &rows, &state.staff, filter.staff_id);

    Ok(Json(SummaryResponse { kpi, report }))
}

/// The per-staff table plus activity totals bucketed by role category,
/// which feeds the distribution chart.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceResponse {
    pub table: Vec<LeaderboardRow>,
    pub by_role: BTreeMap<&'static str, u64>,
}

/// GET /reports/leaderboard?from&to
pub async fn performance(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<PerformanceResponse>> {
    let filter = params.into_filter().date_only();
    let rows = state.repo.list(&filter).await?;

    let table = leaderboard(&rows, &state.staff);
    let by_role = role_distribution(&table);

    Ok(Json(PerformanceResponse { table, by_role }))
}
