pub mod analyze;
pub mod auth;
pub mod records;
pub mod reports;
pub mod staff;
