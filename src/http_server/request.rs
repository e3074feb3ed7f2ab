//! # Request Payloads
//!
//! Wire shapes for create/update bodies. Every field is optional at the
//! serde level so absence can be reported per field instead of as a generic
//! deserialization failure.

use serde::Deserialize;

use crate::model::{ArticleChanges, NewArticle, NewCategory, ValidationError};

/// Body of `POST /articles` and `PUT /articles/:id`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
    pub category_id: Option<i64>,
}

impl ArticlePayload {
    /// All five fields are required on create.
    pub fn into_new_article(self) -> Result<NewArticle, ValidationError> {
        let article = NewArticle {
            name: self.name.ok_or(ValidationError::MissingField("name"))?,
            description: self
                .description
                .ok_or(ValidationError::MissingField("description"))?,
            price: self.price.ok_or(ValidationError::MissingField("price"))?,
            quantity: self
                .quantity
                .ok_or(ValidationError::MissingField("quantity"))?,
            category_id: self
                .category_id
                .ok_or(ValidationError::MissingField("categoryId"))?,
        };
        article.validate()?;
        Ok(article)
    }

    pub fn into_changes(self) -> Result<ArticleChanges, ValidationError> {
        let changes = ArticleChanges {
            name: self.name,
            description: self.description,
            price: self.price,
            quantity: self.quantity,
            category_id: self.category_id,
        };
        changes.validate()?;
        Ok(changes)
    }
}

/// Body of `POST /categories`
#[derive(Debug, Default, Deserialize)]
pub struct CategoryPayload {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl CategoryPayload {
    pub fn into_new_category(self) -> Result<NewCategory, ValidationError> {
        let category = NewCategory {
            name: self.name.ok_or(ValidationError::MissingField("name"))?,
            description: self
                .description
                .ok_or(ValidationError::MissingField("description"))?,
        };
        category.validate()?;
        Ok(category)
    }
}

/// Query string of both search endpoints
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> ArticlePayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_complete_payload() {
        let article = payload(json!({
            "name": "Widget",
            "description": "A widget",
            "price": 9.99,
            "quantity": 10,
            "categoryId": 1
        }))
        .into_new_article()
        .unwrap();

        assert_eq!(article.name, "Widget");
        assert_eq!(article.category_id, 1);
    }

    #[test]
    fn test_missing_field_named_in_wire_form() {
        let err = payload(json!({
            "name": "Widget",
            "description": "A widget",
            "price": 9.99,
            "quantity": 10
        }))
        .into_new_article()
        .unwrap_err();

        assert_eq!(err, ValidationError::MissingField("categoryId"));
    }

    #[test]
    fn test_integer_price_accepted() {
        let article = payload(json!({
            "name": "Widget",
            "description": "A widget",
            "price": 10,
            "quantity": 10,
            "categoryId": 1
        }))
        .into_new_article()
        .unwrap();

        assert_eq!(article.price, 10.0);
    }

    #[test]
    fn test_partial_changes() {
        let changes = payload(json!({ "price": 1.5 })).into_changes().unwrap();
        assert_eq!(changes.price, Some(1.5));
        assert!(changes.name.is_none());
    }

    #[test]
    fn test_fractional_quantity_rejected_by_serde() {
        let result: Result<ArticlePayload, _> = serde_json::from_value(json!({ "quantity": 1.5 }));
        assert!(result.is_err());
    }
}
