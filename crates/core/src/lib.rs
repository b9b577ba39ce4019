//! `mosaic-core` -- domain types shared across the Mosaic gallery platform.
//!
//! Pure types and logic only: no I/O, no database, no HTTP. The db, api,
//! and client crates all depend on this crate for the term (cohort) model,
//! the reserved route segments, and the error taxonomy.

pub mod error;
pub mod gallery;
pub mod routing;
pub mod term;
pub mod types;

pub use error::CoreError;
pub use term::{parse_term, Term, TermIndex, TermParseError};
