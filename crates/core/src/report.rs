//! KPI summary, performance leaderboard, and report text rendering.
//!
//! Pure functions over already-fetched record sets; no I/O. The KPI summary
//! takes two inputs by design: the fully filtered rows drive the lead-based
//! counters, while observer counters come from the staff-unfiltered
//! (date-filtered-only) rows, since a staff member can observe a record they
//! do not lead.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::Serialize;

use crate::record::{Record, Verdict};
use crate::staff::{canonical_role, RoleCategory, StaffDirectory};
use crate::types::StaffId;

// ---------------------------------------------------------------------------
// KPI summary
// ---------------------------------------------------------------------------

/// Aggregate counters for the analytics dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSummary {
    pub total: u64,
    pub charges_removed: u64,
    pub charges_replaced: u64,
    pub bench_requests: u64,
    pub not_guilty: u64,
    pub supervision_count: u64,
    pub observed_count: u64,
    pub total_fine: f64,
    pub total_sentence_months: i64,
    /// Count per cell call type, keyed by wire name.
    pub by_type: BTreeMap<String, u64>,
}

/// Compute the KPI summary.
///
/// `rows` is the filtered result set; `observer_rows` is the same date range
/// without the staff filter (pass `rows` again when no staff filter is
/// active); `staff_id` is the active staff filter, if any.
pub fn kpi_summary(rows: &[Record], observer_rows: &[Record], staff_id: Option<StaffId>) -> KpiSummary {
    let mut by_type = BTreeMap::new();
    for r in rows {
        if let Some(kind) = r.cell_call_type {
            *by_type.entry(kind.as_str().to_string()).or_insert(0) += 1;
        }
    }

    let supervision_count = match staff_id {
        Some(id) => rows.iter().filter(|r| r.supervised_by(id)).count() as u64,
        None => rows.iter().map(|r| r.supervising.len() as u64).sum(),
    };

    let observed_count = match staff_id {
        Some(id) => observer_rows.iter().filter(|r| r.observed_by(id)).count() as u64,
        None => observer_rows.iter().filter(|r| r.has_observers()).count() as u64,
    };

    KpiSummary {
        total: rows.len() as u64,
        charges_removed: rows.iter().filter(|r| r.charges_removed).count() as u64,
        charges_replaced: rows
            .iter()
            .filter(|r| r.charges_removed && r.charges_replaced)
            .count() as u64,
        bench_requests: rows
            .iter()
            .filter(|r| r.verdict == Some(Verdict::BenchRequest))
            .count() as u64,
        not_guilty: rows
            .iter()
            .filter(|r| r.verdict == Some(Verdict::NotGuilty))
            .count() as u64,
        supervision_count,
        observed_count,
        total_fine: rows.iter().filter_map(|r| r.fine).sum(),
        total_sentence_months: rows.iter().filter_map(|r| r.sentence_months).sum(),
        by_type,
    }
}

// ---------------------------------------------------------------------------
// Leaderboard
// ---------------------------------------------------------------------------

/// Per-staff counters for the performance view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardRow {
    pub id: StaffId,
    pub name: String,
    pub role: String,
    pub lead: u64,
    pub supervised: u64,
    pub charges_removed: u64,
    pub total: u64,
}

/// Build the leaderboard over a date-bounded record set.
///
/// Roster members with zero activity still appear. Staff ids present in
/// records but missing from the roster get a row with the id as its name.
/// The `"judiciary"` supervising sentinel is oversight, not a staff member,
/// and contributes to no row. Sort: `lead + supervised` desc, then
/// `chargesRemoved` desc, then name asc.
pub fn leaderboard(rows: &[Record], roster: &StaffDirectory) -> Vec<LeaderboardRow> {
    let mut map: BTreeMap<StaffId, LeaderboardRow> = BTreeMap::new();

    fn ensure<'a>(
        map: &'a mut BTreeMap<StaffId, LeaderboardRow>,
        roster: &StaffDirectory,
        id: StaffId,
    ) -> &'a mut LeaderboardRow {
        map.entry(id).or_insert_with(|| {
            let (name, role) = roster
                .get(id)
                .map(|s| (s.name.clone(), s.role.clone()))
                .unwrap_or_else(|| (id.to_string(), String::new()));
            LeaderboardRow {
                id,
                name,
                role,
                lead: 0,
                supervised: 0,
                charges_removed: 0,
                total: 0,
            }
        })
    }

    for staff in roster.members() {
        ensure(&mut map, roster, staff.id);
    }

    for r in rows {
        ensure(&mut map, roster, r.leading_id).lead += 1;
        if r.charges_removed {
            ensure(&mut map, roster, r.leading_id).charges_removed += 1;
        }
        for supervisor in &r.supervising {
            if let Some(id) = supervisor.staff_id() {
                ensure(&mut map, roster, id).supervised += 1;
            }
        }
    }

    let mut table: Vec<LeaderboardRow> = map
        .into_values()
        .map(|mut row| {
            row.total = row.lead + row.supervised;
            row
        })
        .collect();

    table.sort_by(|a, b| {
        b.total
            .cmp(&a.total)
            .then(b.charges_removed.cmp(&a.charges_removed))
            .then(a.name.cmp(&b.name))
    });
    table
}

/// Total activity (`lead + supervised`) per canonical role category,
/// aggregated over leaderboard rows.
///
/// Every category appears in the output, zeroed when idle, so chart clients
/// get a stable key set. Rows whose role text matches no pattern (including
/// staff ids missing from the roster) land in `Other`.
pub fn role_distribution(table: &[LeaderboardRow]) -> BTreeMap<&'static str, u64> {
    let mut buckets: BTreeMap<&'static str, u64> = RoleCategory::ALL
        .iter()
        .map(|category| (category.as_str(), 0))
        .collect();
    for row in table {
        *buckets
            .entry(canonical_role(&row.role).as_str())
            .or_insert(0) += row.total;
    }
    buckets
}

// ---------------------------------------------------------------------------
// Report rendering
// ---------------------------------------------------------------------------

/// Render the analytics report as deterministic markdown text: the KPI
/// summary followed by one table row per record.
pub fn render_report(
    summary: &KpiSummary,
    rows: &[Record],
    roster: &StaffDirectory,
    staff_id: Option<StaffId>,
) -> String {
    let mut out = String::new();

    out.push_str("## DOJ Analytics Report\n");
    if let Some(id) = staff_id {
        let _ = writeln!(out, "**Lead Attorney:** {}", roster.name_of(id));
    }
    let total_label = if staff_id.is_some() {
        "Cell Calls Lead"
    } else {
        "Total Records"
    };
    let _ = writeln!(out, "**{}:** {}", total_label, summary.total);
    let _ = writeln!(out, "**Cell Calls Supervised:** {}", summary.supervision_count);
    let _ = writeln!(out, "**Cell Calls Observed:** {}", summary.observed_count);
    let _ = writeln!(out, "**Charges Removed:** {}", summary.charges_removed);
    let _ = writeln!(out, "**Charges Replaced:** {}", summary.charges_replaced);
    let _ = writeln!(out, "**Bench Requests:** {}", summary.bench_requests);
    let _ = writeln!(out, "**Total Fine:** ${}", summary.total_fine);
    let _ = writeln!(out, "**Total Sentence Months:** {}", summary.total_sentence_months);

    out.push_str("\n### Breakdown\n");
    out.push_str("| Date | Incident | DOJ# | Lead | Verdict | Fine | Sentence | Type |\n");
    out.push_str("|------|-----------|------|------|----------|------|-----------|------|\n");
    for r in rows {
        let _ = writeln!(
            out,
            "| {} | {} | {} | {} | {} | {} | {} | {} |",
            r.date.format("%m/%d/%Y"),
            r.incident_id.as_deref().unwrap_or("-"),
            r.doj_report_number,
            roster.name_of(r.leading_id),
            r.verdict.map(|v| v.as_str()).unwrap_or("-"),
            r.fine.map(|f| f.to_string()).unwrap_or_else(|| "-".into()),
            r.sentence_months
                .map(|m| m.to_string())
                .unwrap_or_else(|| "-".into()),
            r.cell_call_type.map(|t| t.as_str()).unwrap_or("-"),
        );
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
