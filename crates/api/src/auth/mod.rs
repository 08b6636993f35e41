//! Session auth: signed cookie sessions, the editor authorization policy,
//! extractors, and the Discord OAuth collaborator.

pub mod discord;
pub mod extract;
pub mod session;
