//! Constants and validation for the curation actions (rate, tag,
//! mark-finetuned) exposed by the dashboard.
//!
//! Validation runs before any store call; a rejected input must never
//! reach the mutation layer.

use crate::error::CoreError;

/* --------------------------------------------------------------------------
Constants
-------------------------------------------------------------------------- */

/// Lowest accepted rating.
pub const RATING_MIN: i16 = 1;

/// Highest accepted rating.
pub const RATING_MAX: i16 = 5;

/// Maximum length for a free-text tag.
pub const MAX_TAG_LENGTH: usize = 100;

/// Page size for completion listings within one pipeline.
pub const COMPLETION_PAGE_SIZE: i64 = 100;

/// How long the pipeline listing may be served from cache, in seconds.
pub const PIPELINE_CACHE_TTL_SECS: u64 = 30;

/* --------------------------------------------------------------------------
Validation functions
-------------------------------------------------------------------------- */

/// Validate a rating value. Accepted values are the integers 1 through 5.
pub fn validate_rating(rating: i16) -> Result<(), CoreError> {
    if (RATING_MIN..=RATING_MAX).contains(&rating) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Rating must be between {RATING_MIN} and {RATING_MAX}, got {rating}"
        )))
    }
}

/// Validate a tag before appending it to a completion.
///
/// Tags must be non-blank and at most [`MAX_TAG_LENGTH`] characters.
pub fn validate_tag(tag: &str) -> Result<(), CoreError> {
    if tag.trim().is_empty() {
        return Err(CoreError::Validation("Tag cannot be empty".to_string()));
    }

    if tag.len() > MAX_TAG_LENGTH {
        return Err(CoreError::Validation(format!(
            "Tag must be at most {MAX_TAG_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Validate a marketplace price update.
pub fn validate_price(price: f64) -> Result<(), CoreError> {
    if !price.is_finite() || price < 0.0 {
        return Err(CoreError::Validation(
            "Price must be a non-negative number".to_string(),
        ));
    }
    Ok(())
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
