//! Input validation rules.
//!
//! These are the hard limits the API enforces before anything touches the
//! database: minimum title length and the listing page-size cap.

use thiserror::Error;

/// Minimum item title length in characters.
pub const MIN_TITLE_LEN: usize = 5;

/// Default page size for item listings when the caller does not provide one.
pub const DEFAULT_PAGE_LIMIT: i64 = 20;

/// Maximum page size for item listings. Larger requests are rejected,
/// not clamped.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// A request carried a value that violates an input rule.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Item title shorter than [`MIN_TITLE_LEN`] characters.
    #[error("title must be at least {MIN_TITLE_LEN} characters")]
    TitleTooShort,

    /// Listing limit above [`MAX_PAGE_LIMIT`].
    #[error("limit must not exceed {MAX_PAGE_LIMIT}")]
    LimitTooLarge,

    /// Negative listing offset.
    #[error("offset must not be negative")]
    NegativeOffset,
}

/// Validate an item title. Length is counted in characters, not bytes.
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.chars().count() < MIN_TITLE_LEN {
        return Err(ValidationError::TitleTooShort);
    }
    Ok(())
}

/// Validate listing pagination parameters.
pub fn validate_page(offset: i64, limit: i64) -> Result<(), ValidationError> {
    if offset < 0 {
        return Err(ValidationError::NegativeOffset);
    }
    if limit > MAX_PAGE_LIMIT {
        return Err(ValidationError::LimitTooLarge);
    }
    Ok(())
}
