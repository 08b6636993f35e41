//! Heuristic field extraction from OCR text.
//!
//! Best effort only: every field is optional and the output feeds a form the
//! user corrects before submission. Nothing here is treated as authoritative.

use chrono::NaiveDate;
use serde::Serialize;

use crate::staff::StaffDirectory;
use crate::types::StaffId;

/// Maximum length of OCR-derived notes.
pub const MAX_NOTES_LEN: usize = 2000;

/// Partial form-fill values extracted from recognized text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrFields {
    pub doj_report_number: Option<String>,
    pub incident_id: Option<String>,
    pub date: Option<NaiveDate>,
    pub leading_id: Option<StaffId>,
    pub notes: Option<String>,
}

/// Run the extraction heuristics over recognized text.
///
/// - DOJ report number: first standalone 6-digit token.
/// - Incident id: first standalone 6-character alphanumeric token.
/// - Date: first `YYYY-MM-DD`, else first `M/D/YYYY`.
/// - Leading attorney: first roster member whose first name appears in the
///   text.
/// - Notes: the raw text, truncated to [`MAX_NOTES_LEN`] characters.
pub fn extract_fields(text: &str, roster: &StaffDirectory) -> OcrFields {
    let tokens: Vec<&str> = text
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect();

    let doj_report_number = tokens
        .iter()
        .find(|t| t.len() == 6 && t.chars().all(|c| c.is_ascii_digit()))
        .map(|t| t.to_string());

    let incident_id = tokens
        .iter()
        .find(|t| t.len() == 6)
        .map(|t| t.to_uppercase());

    let date = find_iso_date(text).or_else(|| find_us_date(text));

    let leading_id = roster.match_first_name(text).map(|s| s.id);

    let notes = if text.is_empty() {
        None
    } else {
        Some(text.chars().take(MAX_NOTES_LEN).collect())
    };

    OcrFields {
        doj_report_number,
        incident_id,
        date,
        leading_id,
        notes,
    }
}

/// First `YYYY-MM-DD` occurrence that parses as a real date.
fn find_iso_date(text: &str) -> Option<NaiveDate> {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_ascii_digit() && c != '-'))
        .find_map(|w| NaiveDate::parse_from_str(w, "%Y-%m-%d").ok())
}

/// First `M/D/YYYY` occurrence that parses as a real date.
fn find_us_date(text: &str) -> Option<NaiveDate> {
    for window in text.split_whitespace() {
        let cleaned: &str =
            window.trim_matches(|c: char| !c.is_ascii_digit() && c != '/');
        if cleaned.matches('/').count() == 2 {
            if let Ok(date) = NaiveDate::parse_from_str(cleaned, "%m/%d/%Y") {
                return Some(date);
            }
        }
    }
    None
}
