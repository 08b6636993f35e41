//! Domain logic for the cell call tracker.
//!
//! Everything in this crate is pure: record modelling and normalization,
//! staff roster handling, filter predicates, KPI/leaderboard aggregation,
//! report rendering, and OCR text heuristics. Storage and HTTP live in
//! `celltrack-store` and `celltrack-api`.

pub mod error;
pub mod ocr;
pub mod query;
pub mod record;
pub mod report;
pub mod staff;
pub mod types;

pub use error::CoreError;
