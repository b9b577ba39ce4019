//! Gallery catalog constants and input validators.

use crate::error::CoreError;
use crate::term::Term;

/// Upper bound on title length, matching the `VARCHAR(200)` column.
pub const MAX_TITLE_LEN: usize = 200;

/// Validate an item title: non-blank, within the column limit.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Title must not be blank".into()));
    }
    if trimmed.len() > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "Title exceeds {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate a media reference: non-blank and an http(s) URL or a
/// server-relative path.
pub fn validate_media_url(url: &str) -> Result<(), CoreError> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Media URL must not be blank".into()));
    }
    let ok = trimmed.starts_with("http://")
        || trimmed.starts_with("https://")
        || trimmed.starts_with('/');
    if !ok {
        return Err(CoreError::Validation(format!(
            "Invalid media URL '{trimmed}'. Must be an http(s) URL or a server-relative path"
        )));
    }
    Ok(())
}

/// Validate a term value: terms are small positive integers.
pub fn validate_term(term: Term) -> Result<(), CoreError> {
    if term <= 0 {
        return Err(CoreError::Validation(format!(
            "Invalid term {term}. Terms are positive integers"
        )));
    }
    Ok(())
}
