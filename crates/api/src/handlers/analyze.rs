//! OCR-assisted form fill: proxy an uploaded image to OCR.space and run the
//! extraction heuristics over the recognized text.
//!
//! The result is best effort and feeds a form the user corrects before
//! submission; nothing here writes to the store.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use celltrack_core::ocr::extract_fields;
use celltrack_core::CoreError;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

const OCR_SPACE_URL: &str = "https://api.ocr.space/parse/image";

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// `data:image/<fmt>;base64,<payload>` URL of the captured form.
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Deserialize)]
struct OcrSpaceResponse {
    #[serde(rename = "ParsedResults", default)]
    parsed_results: Option<Vec<OcrSpaceResult>>,
}

#[derive(Debug, Deserialize)]
struct OcrSpaceResult {
    #[serde(rename = "ParsedText", default)]
    parsed_text: String,
}

/// POST /analyze
pub async fn analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> AppResult<impl IntoResponse> {
    if req.image.is_empty() {
        return Err(AppError::BadRequest("image required".into()));
    }
    if !is_image_data_url(&req.image) {
        return Err(AppError::BadRequest("invalid image data".into()));
    }

    let Some(api_key) = state.config.ocr_api_key.as_deref() else {
        return Err(AppError::InternalError(
            "OCR_SPACE_API_KEY not configured".into(),
        ));
    };

    let params = [
        ("apikey", api_key),
        ("base64Image", req.image.as_str()),
        ("language", "eng"),
        ("isOverlayRequired", "false"),
    ];

    let resp = state
        .http
        .post(OCR_SPACE_URL)
        .form(&params)
        .send()
        .await
        .map_err(|err| CoreError::Upstream(format!("ocr.space fetch error: {err}")))?;
    if !resp.status().is_success() {
        return Err(CoreError::Upstream(format!(
            "ocr.space returned error: {}",
            resp.status()
        ))
        .into());
    }

    let parsed: OcrSpaceResponse = resp
        .json()
        .await
        .map_err(|err| CoreError::Upstream(format!("ocr.space returned non-json: {err}")))?;
    let results = parsed
        .parsed_results
        .filter(|r| !r.is_empty())
        .ok_or_else(|| CoreError::Upstream("ocr.space parse failed".into()))?;

    let text = results
        .iter()
        .map(|r| r.parsed_text.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    let mut fields = extract_fields(&text, &state.staff);
    // The form expects a date; fall back to today when none was recognized.
    fields.date.get_or_insert_with(|| Utc::now().date_naive());

    Ok(Json(fields))
}

/// Accepts only base64 image data URLs.
fn is_image_data_url(value: &str) -> bool {
    let Some(rest) = value.strip_prefix("data:image/") else {
        return false;
    };
    match rest.split_once(";base64,") {
        Some((format, payload)) => {
            !format.is_empty()
                && format.chars().all(|c| c.is_ascii_alphanumeric() || c == '+')
                && !payload.is_empty()
        }
        None => false,
    }
}
