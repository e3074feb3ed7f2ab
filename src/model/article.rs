//! Article records

use super::{check_length, ValidationError, DESCRIPTION_MAX_CHARS, NAME_MAX_CHARS};

/// A stored inventory line item
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i64,
    pub category_id: i64,
}

/// Article with its owning category resolved by name
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleWithCategory {
    pub article: Article,
    pub category_name: String,
}

/// Insert payload; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewArticle {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i64,
    pub category_id: i64,
}

impl NewArticle {
    /// Check column limits. Sign of `price`/`quantity` is not constrained.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_length("name", &self.name, NAME_MAX_CHARS)?;
        check_length("description", &self.description, DESCRIPTION_MAX_CHARS)?;
        Ok(())
    }
}

/// Partial update. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
    pub category_id: Option<i64>,
}

impl ArticleChanges {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            check_length("name", name, NAME_MAX_CHARS)?;
        }
        if let Some(description) = &self.description {
            check_length("description", description, DESCRIPTION_MAX_CHARS)?;
        }
        Ok(())
    }

    /// Merge the supplied fields over `current`.
    pub fn apply(&self, current: &Article) -> Article {
        Article {
            id: current.id,
            name: self.name.clone().unwrap_or_else(|| current.name.clone()),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| current.description.clone()),
            price: self.price.unwrap_or(current.price),
            quantity: self.quantity.unwrap_or(current.quantity),
            category_id: self.category_id.unwrap_or(current.category_id),
        }
    }
}
