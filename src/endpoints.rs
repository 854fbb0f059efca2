//! The API endpoints URIs.

/// The root route which serves generated transactions as CSV.
pub const ROOT: &str = "/";
