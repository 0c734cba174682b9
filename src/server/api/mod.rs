//! This module contains the API endpoints for the server.
use crate::server::errors::SipsError;

pub mod auth;
pub mod cafes;
pub mod profile;
pub mod reviews;
pub mod routes;
pub mod saved;
pub mod state;

/// Parse a numeric id out of a path segment.
///
/// A malformed id cannot name a stored record, so it gets the same
/// not-found answer as an id that is absent from the table.
fn parse_id(raw: &str, missing: &str) -> Result<i64, SipsError> {
    raw.parse()
        .map_err(|_: std::num::ParseIntError| SipsError::NotFound(missing.into()))
}
