//! # Domain Model
//!
//! Article and Category records plus the validation rules applied to
//! incoming payloads before anything reaches the store.

mod article;
mod category;

pub use article::{Article, ArticleChanges, ArticleWithCategory, NewArticle};
pub use category::{Category, NewCategory};

use thiserror::Error;

/// Maximum length of a `name` column, in characters
pub const NAME_MAX_CHARS: usize = 100;

/// Maximum length of a `description` column, in characters
pub const DESCRIPTION_MAX_CHARS: usize = 200;

/// Payload validation failures.
///
/// Field names are the wire names so the message can be returned as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Field '{field}' exceeds {max} characters")]
    TooLong { field: &'static str, max: usize },
}

pub(crate) fn check_length(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}
