//! Category records

use super::{check_length, ValidationError, DESCRIPTION_MAX_CHARS, NAME_MAX_CHARS};

/// A named grouping of articles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub description: String,
}

impl NewCategory {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_length("name", &self.name, NAME_MAX_CHARS)?;
        check_length("description", &self.description, DESCRIPTION_MAX_CHARS)?;
        Ok(())
    }
}
