//! Filter criteria applied to a newest-first record listing.
//!
//! Date bounds are inclusive and compare against the record's `date` (the
//! event date); `createdAt` is reserved for ordering and audit display. The
//! historical handlers disagreed on which field to filter by -- the event
//! date is the user-facing semantic, so that is the canonical choice.

use chrono::{DateTime, Utc};

use crate::record::{CellCallType, Record, Verdict};
use crate::types::StaffId;

/// Optional filter criteria for `list`. `None` means "no filter" for every
/// field; empty-string query values are mapped to `None` at the HTTP layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordFilter {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    /// Matches `leadingId` exactly; never matches supervisor/observer fields.
    pub staff_id: Option<StaffId>,
    pub cell_call_type: Option<CellCallType>,
    pub verdict: Option<Verdict>,
    /// Applied after filtering, newest-first.
    pub limit: Option<usize>,
}

impl RecordFilter {
    pub fn matches(&self, record: &Record) -> bool {
        if let Some(from) = self.from {
            if record.date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if record.date > to {
                return false;
            }
        }
        if let Some(staff_id) = self.staff_id {
            if record.leading_id != staff_id {
                return false;
            }
        }
        if let Some(kind) = self.cell_call_type {
            if record.cell_call_type != Some(kind) {
                return false;
            }
        }
        if let Some(verdict) = self.verdict {
            if record.verdict != Some(verdict) {
                return false;
            }
        }
        true
    }

    /// The same filter with only the date bounds kept.
    ///
    /// Observer KPIs must be computed over the staff-unfiltered dataset,
    /// because the staff member may observe a record led by someone else.
    pub fn date_only(&self) -> Self {
        Self {
            from: self.from,
            to: self.to,
            ..Self::default()
        }
    }
}
