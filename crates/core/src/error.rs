//! Domain-level error taxonomy.
//!
//! `CoreError` carries enough structure for the API layer to map each
//! variant onto an HTTP status and a recovery payload (e.g. the valid-term
//! list on cohort-related 404s). Thumbnail refresh failures are deliberately
//! not represented here: a derived-cache refresh is fire-and-forget and its
//! failure must never surface through a catalog mutation.

use crate::term::Term;

/// Domain errors shared by the server and client crates.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An entity lookup by id came up empty.
    #[error("{entity} with id {id} not found")]
    NotFound {
        entity: &'static str,
        id: String,
    },

    /// A requested term has no gallery items. Carries the current valid
    /// set so the caller can self-correct.
    #[error("term {term} has no gallery items")]
    UnknownTerm {
        term: Term,
        valid_terms: Vec<Term>,
    },

    /// A path segment collided with a fixed-route name and was refused as
    /// an identifier.
    #[error("'{segment}' is a reserved gallery endpoint, not an identifier")]
    ReservedSegment { segment: String },

    /// Malformed input (bad identifier format, non-numeric term, invalid
    /// payload field).
    #[error("{0}")]
    Validation(String),

    /// Unexpected internal failure.
    #[error("{0}")]
    Internal(String),
}
