//! Record model, wire-shape inputs, and normalization rules.
//!
//! The canonical schema replaces the historical drift between handler
//! variants: one record shape, camelCase wire names, RFC 3339 timestamps.
//! Two invariants are enforced on every write:
//!
//! - `chargesReplaced` is false whenever `chargesRemoved` is false.
//! - `benchVerdictNumber` is present only when the verdict is `BENCH_REQUEST`.

use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CoreError;
use crate::types::StaffId;

/// Fallback submitter name when the session identity is unknown.
pub const UNKNOWN_SUBMITTER: &str = "unknown";

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

/// Outcome of a cell call proceeding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Guilty,
    NotGuilty,
    NoContest,
    BenchRequest,
}

impl Verdict {
    /// Wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Guilty => "GUILTY",
            Self::NotGuilty => "NOT_GUILTY",
            Self::NoContest => "NO_CONTEST",
            Self::BenchRequest => "BENCH_REQUEST",
        }
    }
}

impl std::str::FromStr for Verdict {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GUILTY" => Ok(Self::Guilty),
            "NOT_GUILTY" => Ok(Self::NotGuilty),
            "NO_CONTEST" => Ok(Self::NoContest),
            "BENCH_REQUEST" => Ok(Self::BenchRequest),
            _ => Err(()),
        }
    }
}

/// Kind of proceeding being logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CellCallType {
    CellCall,
    WarrantArrest,
    SentencingHearing,
}

impl CellCallType {
    /// Wire name, used as a grouping key in KPI output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CellCall => "CELL_CALL",
            Self::WarrantArrest => "WARRANT_ARREST",
            Self::SentencingHearing => "SENTENCING_HEARING",
        }
    }
}

impl std::str::FromStr for CellCallType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CELL_CALL" => Ok(Self::CellCall),
            "WARRANT_ARREST" => Ok(Self::WarrantArrest),
            "SENTENCING_HEARING" => Ok(Self::SentencingHearing),
            _ => Err(()),
        }
    }
}

// ---------------------------------------------------------------------------
// Supervisor
// ---------------------------------------------------------------------------

/// One entry in a record's `supervising` set: either a staff member or the
/// `"judiciary"` sentinel (oversight by the bench, not a roster member).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Supervisor {
    Staff(StaffId),
    Judiciary,
}

impl Supervisor {
    pub fn staff_id(self) -> Option<StaffId> {
        match self {
            Self::Staff(id) => Some(id),
            Self::Judiciary => None,
        }
    }
}

impl Serialize for Supervisor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Staff(id) => serializer.serialize_i64(*id),
            Self::Judiciary => serializer.serialize_str("judiciary"),
        }
    }
}

impl<'de> Deserialize<'de> for Supervisor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Id(i64),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Id(id) => Ok(Self::Staff(id)),
            Repr::Text(s) if s == "judiciary" => Ok(Self::Judiciary),
            // Historical payloads carry numeric ids as strings.
            Repr::Text(s) => s
                .trim()
                .parse()
                .map(Self::Staff)
                .map_err(|_| D::Error::custom(format!("invalid supervisor entry: {s:?}"))),
        }
    }
}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// One logged cell call event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: String,
    pub doj_report_number: String,
    #[serde(default)]
    pub incident_id: Option<String>,
    /// Real-world event date (user-supplied, defaults to submission time).
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub leading_id: StaffId,
    #[serde(default)]
    pub supervising: Vec<Supervisor>,
    #[serde(default)]
    pub attorney_observers: Vec<StaffId>,
    #[serde(default)]
    pub paralegal_observers: Vec<StaffId>,
    #[serde(default)]
    pub verdict: Option<Verdict>,
    #[serde(default)]
    pub bench_verdict_number: Option<String>,
    #[serde(default)]
    pub charges_removed: bool,
    #[serde(default)]
    pub charges_replaced: bool,
    #[serde(default)]
    pub fine: Option<f64>,
    #[serde(default)]
    pub sentence_months: Option<i64>,
    #[serde(default)]
    pub cell_call_type: Option<CellCallType>,
    #[serde(default)]
    pub notes: String,
    /// Display name of whoever submitted the record.
    #[serde(default)]
    pub by: String,
}

impl Record {
    /// Whether the given staff member appears in the `supervising` set.
    pub fn supervised_by(&self, staff_id: StaffId) -> bool {
        self.supervising
            .iter()
            .any(|s| s.staff_id() == Some(staff_id))
    }

    /// Whether the given staff member appears in either observer list.
    pub fn observed_by(&self, staff_id: StaffId) -> bool {
        self.attorney_observers.contains(&staff_id)
            || self.paralegal_observers.contains(&staff_id)
    }

    /// Whether any observer (attorney or paralegal) was present at all.
    pub fn has_observers(&self) -> bool {
        !self.attorney_observers.is_empty() || !self.paralegal_observers.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Lenient field coercion
// ---------------------------------------------------------------------------

/// Accept a string or a number for string-typed identifiers
/// (`dojReportNumber`, `incidentId` arrive as bare numbers in old payloads).
fn de_lenient_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Text(String),
        Int(i64),
        Num(f64),
    }

    Ok(match Option::<Repr>::deserialize(deserializer)? {
        None => None,
        Some(Repr::Text(s)) => {
            let s = s.trim().to_string();
            (!s.is_empty()).then_some(s)
        }
        Some(Repr::Int(n)) => Some(n.to_string()),
        Some(Repr::Num(n)) => Some(n.to_string()),
    })
}

/// Accept a number or a numeric string; empty string and null mean "not set".
fn de_lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Num(f64),
        Text(String),
    }

    match Option::<Repr>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Repr::Num(n)) => Ok(Some(n)),
        Some(Repr::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Repr::Text(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid number: {s:?}"))),
    }
}

/// As [`de_lenient_f64`], for integer fields.
fn de_lenient_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    match de_lenient_f64(deserializer)? {
        None => Ok(None),
        Some(n) => Ok(Some(n as i64)),
    }
}

/// Tri-state numeric field for updates: absent = keep, null/"" = clear.
fn de_lenient_f64_patch<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Option<f64>>, D::Error> {
    de_lenient_f64(deserializer).map(Some)
}

fn de_lenient_i64_patch<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Option<i64>>, D::Error> {
    de_lenient_i64(deserializer).map(Some)
}

fn de_lenient_string_patch<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Option<String>>, D::Error> {
    de_lenient_string(deserializer).map(Some)
}

/// Deduplicate while preserving first-seen order (set semantics on the wire).
fn dedup_in_order<T: PartialEq + Copy>(items: Vec<T>) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Create input
// ---------------------------------------------------------------------------

/// Wire payload for `POST /api/records`. All fields optional at the type
/// level; [`Record::from_create`] enforces the required ones.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecord {
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub doj_report_number: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub incident_id: Option<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "de_lenient_i64")]
    pub leading_id: Option<StaffId>,
    #[serde(default)]
    pub supervising: Vec<Supervisor>,
    #[serde(default)]
    pub attorney_observers: Vec<StaffId>,
    #[serde(default)]
    pub paralegal_observers: Vec<StaffId>,
    #[serde(default)]
    pub verdict: Option<Verdict>,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub bench_verdict_number: Option<String>,
    #[serde(default)]
    pub charges_removed: bool,
    #[serde(default)]
    pub charges_replaced: bool,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub fine: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_i64")]
    pub sentence_months: Option<i64>,
    #[serde(default)]
    pub cell_call_type: Option<CellCallType>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub by: Option<String>,
}

impl Record {
    /// Build a normalized record from a create payload.
    ///
    /// `id` and `now` are supplied by the repository so this stays pure and
    /// deterministic under test.
    pub fn from_create(input: CreateRecord, id: String, now: DateTime<Utc>) -> Result<Self, CoreError> {
        let doj_report_number = input
            .doj_report_number
            .ok_or_else(|| CoreError::Validation("dojReportNumber required".into()))?;
        let leading_id = input
            .leading_id
            .ok_or_else(|| CoreError::Validation("leadingId required".into()))?;

        validate_non_negative("fine", input.fine)?;
        validate_non_negative("sentenceMonths", input.sentence_months.map(|n| n as f64))?;

        let charges_removed = input.charges_removed;
        let charges_replaced = charges_removed && input.charges_replaced;
        let bench_verdict_number = match input.verdict {
            Some(Verdict::BenchRequest) => input.bench_verdict_number,
            _ => None,
        };

        Ok(Self {
            id,
            doj_report_number,
            incident_id: input.incident_id,
            date: input.date.unwrap_or(now),
            created_at: now,
            updated_at: now,
            leading_id,
            supervising: dedup_in_order(input.supervising),
            attorney_observers: dedup_in_order(input.attorney_observers),
            paralegal_observers: dedup_in_order(input.paralegal_observers),
            verdict: input.verdict,
            bench_verdict_number,
            charges_removed,
            charges_replaced,
            fine: input.fine,
            sentence_months: input.sentence_months,
            cell_call_type: input.cell_call_type,
            notes: input.notes.unwrap_or_default(),
            by: input.by.unwrap_or_else(|| UNKNOWN_SUBMITTER.to_string()),
        })
    }
}

// ---------------------------------------------------------------------------
// Update input
// ---------------------------------------------------------------------------

/// Wire payload for `PUT /api/records/{id}`: a partial record merged onto the
/// existing one. Absent fields keep their stored value; `fine` and
/// `sentenceMonths` distinguish "absent" from an explicit null/"" clear.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecord {
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub doj_report_number: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_string_patch")]
    pub incident_id: Option<Option<String>>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "de_lenient_i64")]
    pub leading_id: Option<StaffId>,
    #[serde(default)]
    pub supervising: Option<Vec<Supervisor>>,
    #[serde(default)]
    pub attorney_observers: Option<Vec<StaffId>>,
    #[serde(default)]
    pub paralegal_observers: Option<Vec<StaffId>>,
    #[serde(default)]
    pub verdict: Option<Verdict>,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub bench_verdict_number: Option<String>,
    #[serde(default)]
    pub charges_removed: Option<bool>,
    #[serde(default)]
    pub charges_replaced: Option<bool>,
    #[serde(default, deserialize_with = "de_lenient_f64_patch")]
    pub fine: Option<Option<f64>>,
    #[serde(default, deserialize_with = "de_lenient_i64_patch")]
    pub sentence_months: Option<Option<i64>>,
    #[serde(default)]
    pub cell_call_type: Option<CellCallType>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub by: Option<String>,
}

impl Record {
    /// Merge a partial update onto this record.
    ///
    /// Preserves `id` and `createdAt`, stamps `updatedAt`, and re-derives the
    /// dependent fields so the model invariants hold after every write.
    pub fn apply_update(&self, input: UpdateRecord, now: DateTime<Utc>) -> Result<Self, CoreError> {
        let mut next = self.clone();

        if let Some(doj) = input.doj_report_number {
            next.doj_report_number = doj;
        }
        if let Some(incident) = input.incident_id {
            next.incident_id = incident;
        }
        if let Some(date) = input.date {
            next.date = date;
        }
        if let Some(leading) = input.leading_id {
            next.leading_id = leading;
        }
        if let Some(supervising) = input.supervising {
            next.supervising = dedup_in_order(supervising);
        }
        if let Some(observers) = input.attorney_observers {
            next.attorney_observers = dedup_in_order(observers);
        }
        if let Some(observers) = input.paralegal_observers {
            next.paralegal_observers = dedup_in_order(observers);
        }
        if let Some(verdict) = input.verdict {
            next.verdict = Some(verdict);
        }
        if let Some(bench) = input.bench_verdict_number {
            next.bench_verdict_number = Some(bench);
        }
        if let Some(removed) = input.charges_removed {
            next.charges_removed = removed;
        }
        if let Some(replaced) = input.charges_replaced {
            next.charges_replaced = replaced;
        }
        if let Some(fine) = input.fine {
            next.fine = fine;
        }
        if let Some(months) = input.sentence_months {
            next.sentence_months = months;
        }
        if let Some(kind) = input.cell_call_type {
            next.cell_call_type = Some(kind);
        }
        if let Some(notes) = input.notes {
            next.notes = notes;
        }
        if let Some(by) = input.by {
            next.by = by;
        }

        validate_non_negative("fine", next.fine)?;
        validate_non_negative("sentenceMonths", next.sentence_months.map(|n| n as f64))?;

        // Re-derive dependent fields.
        next.charges_replaced = next.charges_removed && next.charges_replaced;
        if next.verdict != Some(Verdict::BenchRequest) {
            next.bench_verdict_number = None;
        }

        next.updated_at = now;
        Ok(next)
    }
}

fn validate_non_negative(field: &str, value: Option<f64>) -> Result<(), CoreError> {
    match value {
        Some(n) if n < 0.0 => Err(CoreError::Validation(format!(
            "{field} must be non-negative"
        ))),
        _ => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
    }

    fn minimal_create() -> CreateRecord {
        CreateRecord {
            doj_report_number: Some("123456".into()),
            leading_id: Some(3),
            verdict: Some(Verdict::Guilty),
            ..Default::default()
        }
    }

    // -- create normalization --

    #[test]
    fn create_assigns_timestamps_and_defaults() {
        let rec = Record::from_create(minimal_create(), "r1".into(), now()).unwrap();
        assert_eq!(rec.id, "r1");
        assert_eq!(rec.created_at, now());
        assert_eq!(rec.updated_at, now());
        assert_eq!(rec.date, now());
        assert_eq!(rec.by, UNKNOWN_SUBMITTER);
        assert!(!rec.charges_replaced);
        assert_eq!(rec.bench_verdict_number, None);
    }

    #[test]
    fn create_requires_doj_report_number() {
        let input = CreateRecord {
            doj_report_number: None,
            ..minimal_create()
        };
        let err = Record::from_create(input, "r1".into(), now()).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("dojReportNumber"));
    }

    #[test]
    fn create_requires_leading_id() {
        let input = CreateRecord {
            leading_id: None,
            ..minimal_create()
        };
        let err = Record::from_create(input, "r1".into(), now()).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("leadingId"));
    }

    #[test]
    fn charges_replaced_forced_false_without_removal() {
        let input = CreateRecord {
            charges_removed: false,
            charges_replaced: true,
            ..minimal_create()
        };
        let rec = Record::from_create(input, "r1".into(), now()).unwrap();
        assert!(!rec.charges_replaced);
    }

    #[test]
    fn bench_verdict_number_cleared_unless_bench_request() {
        let input = CreateRecord {
            verdict: Some(Verdict::Guilty),
            bench_verdict_number: Some("B-99".into()),
            ..minimal_create()
        };
        let rec = Record::from_create(input, "r1".into(), now()).unwrap();
        assert_eq!(rec.bench_verdict_number, None);
    }

    #[test]
    fn bench_verdict_number_retained_for_bench_request() {
        let input = CreateRecord {
            verdict: Some(Verdict::BenchRequest),
            bench_verdict_number: Some("B-99".into()),
            ..minimal_create()
        };
        let rec = Record::from_create(input, "r1".into(), now()).unwrap();
        assert_eq!(rec.bench_verdict_number.as_deref(), Some("B-99"));
    }

    #[test]
    fn create_rejects_negative_fine() {
        let input = CreateRecord {
            fine: Some(-50.0),
            ..minimal_create()
        };
        let err = Record::from_create(input, "r1".into(), now()).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("fine"));
    }

    #[test]
    fn create_dedupes_participant_sets() {
        let input = CreateRecord {
            supervising: vec![
                Supervisor::Staff(2),
                Supervisor::Judiciary,
                Supervisor::Staff(2),
            ],
            attorney_observers: vec![5, 5, 6],
            ..minimal_create()
        };
        let rec = Record::from_create(input, "r1".into(), now()).unwrap();
        assert_eq!(
            rec.supervising,
            vec![Supervisor::Staff(2), Supervisor::Judiciary]
        );
        assert_eq!(rec.attorney_observers, vec![5, 6]);
    }

    // -- update merging --

    #[test]
    fn update_preserves_created_at_and_stamps_updated_at() {
        let rec = Record::from_create(minimal_create(), "r1".into(), now()).unwrap();
        let later = now() + chrono::Duration::hours(2);
        let next = rec
            .apply_update(
                UpdateRecord {
                    notes: Some("updated".into()),
                    ..Default::default()
                },
                later,
            )
            .unwrap();
        assert_eq!(next.created_at, now());
        assert_eq!(next.updated_at, later);
        assert_eq!(next.notes, "updated");
        assert_eq!(next.doj_report_number, "123456");
    }

    #[test]
    fn update_clearing_charges_removed_clears_replaced() {
        let input = CreateRecord {
            charges_removed: true,
            charges_replaced: true,
            ..minimal_create()
        };
        let rec = Record::from_create(input, "r1".into(), now()).unwrap();
        assert!(rec.charges_replaced);

        let next = rec
            .apply_update(
                UpdateRecord {
                    charges_removed: Some(false),
                    ..Default::default()
                },
                now(),
            )
            .unwrap();
        assert!(!next.charges_removed);
        assert!(!next.charges_replaced);
    }

    #[test]
    fn update_away_from_bench_request_clears_bench_number() {
        let input = CreateRecord {
            verdict: Some(Verdict::BenchRequest),
            bench_verdict_number: Some("B-7".into()),
            ..minimal_create()
        };
        let rec = Record::from_create(input, "r1".into(), now()).unwrap();

        let next = rec
            .apply_update(
                UpdateRecord {
                    verdict: Some(Verdict::NotGuilty),
                    ..Default::default()
                },
                now(),
            )
            .unwrap();
        assert_eq!(next.verdict, Some(Verdict::NotGuilty));
        assert_eq!(next.bench_verdict_number, None);
    }

    #[test]
    fn update_explicit_null_clears_fine_but_absent_keeps_it() {
        let input = CreateRecord {
            fine: Some(500.0),
            ..minimal_create()
        };
        let rec = Record::from_create(input, "r1".into(), now()).unwrap();

        let keep: UpdateRecord = serde_json::from_str(r#"{"notes":"x"}"#).unwrap();
        let kept = rec.apply_update(keep, now()).unwrap();
        assert_eq!(kept.fine, Some(500.0));

        let clear: UpdateRecord = serde_json::from_str(r#"{"fine":""}"#).unwrap();
        let cleared = rec.apply_update(clear, now()).unwrap();
        assert_eq!(cleared.fine, None);
    }

    // -- wire coercion --

    #[test]
    fn create_payload_coerces_legacy_field_types() {
        let input: CreateRecord = serde_json::from_str(
            r#"{
                "dojReportNumber": 123456,
                "leadingId": "3",
                "fine": "250",
                "sentenceMonths": "",
                "supervising": [2, "judiciary", "4"]
            }"#,
        )
        .unwrap();
        assert_eq!(input.doj_report_number.as_deref(), Some("123456"));
        assert_eq!(input.leading_id, Some(3));
        assert_eq!(input.fine, Some(250.0));
        assert_eq!(input.sentence_months, None);
        assert_eq!(
            input.supervising,
            vec![
                Supervisor::Staff(2),
                Supervisor::Judiciary,
                Supervisor::Staff(4)
            ]
        );
    }

    #[test]
    fn supervisor_round_trips_sentinel_and_ids() {
        let json = serde_json::to_string(&vec![Supervisor::Staff(7), Supervisor::Judiciary])
            .unwrap();
        assert_eq!(json, r#"[7,"judiciary"]"#);
        let back: Vec<Supervisor> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vec![Supervisor::Staff(7), Supervisor::Judiciary]);
    }

    #[test]
    fn record_serializes_camel_case() {
        let rec = Record::from_create(minimal_create(), "r1".into(), now()).unwrap();
        let value = serde_json::to_value(&rec).unwrap();
        assert_eq!(value["dojReportNumber"], "123456");
        assert_eq!(value["leadingId"], 3);
        assert_eq!(value["verdict"], "GUILTY");
        assert!(value["benchVerdictNumber"].is_null());
    }
}
