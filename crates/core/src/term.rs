//! The term (cohort) model.
//!
//! A term is a small positive integer identifying the cohort a gallery item
//! belongs to. Terms have no independent lifecycle: the set of valid terms
//! is always derived from the items currently in the catalog, never stored
//! on its own, so it cannot drift from the catalog.
//!
//! Terms are canonically `i32` everywhere (store, wire, client); they are
//! rendered as strings only at the presentation edge.

/// A cohort identifier. Maps to an `INTEGER NOT NULL` column.
pub type Term = i32;

/// Error returned when a path or query segment is not a numeric term.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a numeric term")]
pub struct TermParseError(pub String);

/// Parse a path or query segment into a [`Term`].
///
/// Accepts surrounding whitespace; anything that is not a base-10 integer
/// is a [`TermParseError`] (a client error, not "not found").
pub fn parse_term(segment: &str) -> Result<Term, TermParseError> {
    segment
        .trim()
        .parse::<Term>()
        .map_err(|_| TermParseError(segment.to_string()))
}

/// The derived set of terms that currently have at least one gallery item.
///
/// Always sorted ascending by numeric value and de-duplicated. Built from a
/// catalog query (`GalleryItemRepo::distinct_terms`) or, on the client, from
/// a fetched item set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermIndex {
    terms: Vec<Term>,
}

impl TermIndex {
    /// Build an index from an arbitrary collection of term values,
    /// de-duplicating and sorting numerically.
    pub fn from_values<I: IntoIterator<Item = Term>>(values: I) -> Self {
        let mut terms: Vec<Term> = values.into_iter().collect();
        terms.sort_unstable();
        terms.dedup();
        Self { terms }
    }

    /// The sorted terms.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Whether `term` currently has items.
    pub fn contains(&self, term: Term) -> bool {
        self.terms.binary_search(&term).is_ok()
    }

    /// The most recent term with data, used as the client's default
    /// selection.
    pub fn latest(&self) -> Option<Term> {
        self.terms.last().copied()
    }

    /// Stringified terms for presentation payloads (`{"terms": ["1", ...]}`).
    pub fn as_strings(&self) -> Vec<String> {
        self.terms.iter().map(|t| t.to_string()).collect()
    }
}
