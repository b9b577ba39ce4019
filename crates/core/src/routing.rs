//! Reserved route segments for the gallery collection prefix.
//!
//! The gallery route space mixes fixed-name endpoints (`/thumbnails`,
//! `/valid-terms`, `/health`) with parameterized item endpoints (`/{id}`)
//! under the same prefix. Fixed routes always win, and the parameterized
//! handlers additionally refuse these segments as identifiers so that a
//! removed or reordered fixed route can never silently turn a reserved
//! word into an item lookup.
//!
//! This is the single source of truth for the blocklist; handlers must not
//! re-declare it.

/// Path segments that must never be accepted as an item id or term value.
pub const RESERVED_SEGMENTS: &[&str] = &["thumbnails", "valid-terms", "health"];

/// Fixed gallery endpoints, listed in 404 diagnostics so callers can
/// self-correct.
pub const FIXED_ENDPOINTS: &[&str] = &[
    "GET /thumbnails",
    "GET /valid-terms",
    "GET /health",
    "POST /thumbnails/generate",
    "POST /thumbnails/generate/{term}",
];

/// Whether `segment` collides with a fixed-route name.
pub fn is_reserved(segment: &str) -> bool {
    RESERVED_SEGMENTS.contains(&segment)
}
