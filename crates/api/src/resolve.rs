//! Path-segment resolution for the parameterized gallery routes.
//!
//! Fixed endpoint names win over captures at the router level already;
//! these checks run again inside the parameterized handlers so a removed
//! or reordered fixed route can never turn `"thumbnails"` into an item
//! lookup. Reserved collisions are 404s (the segment names an endpoint,
//! not a record); malformed ids and terms are 400s.

use uuid::Uuid;

use mosaic_core::error::CoreError;
use mosaic_core::routing::is_reserved;
use mosaic_core::term::{parse_term, Term};

use crate::error::AppError;

/// Resolve an `{id}` path segment into an item id.
pub fn item_id(segment: &str) -> Result<Uuid, AppError> {
    if is_reserved(segment) {
        return Err(AppError::Core(CoreError::ReservedSegment {
            segment: segment.to_string(),
        }));
    }
    Uuid::parse_str(segment).map_err(|_| {
        AppError::Core(CoreError::Validation(format!(
            "'{segment}' is not a valid item id"
        )))
    })
}

/// Resolve a `{term}` path segment into a term value.
pub fn term_segment(segment: &str) -> Result<Term, AppError> {
    if is_reserved(segment) {
        return Err(AppError::Core(CoreError::ReservedSegment {
            segment: segment.to_string(),
        }));
    }
    let term = parse_term(segment)
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;
    Ok(term)
}
