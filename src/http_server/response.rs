//! # Response Formatting
//!
//! Hand-written projections, one per response shape.

use serde::Serialize;

use crate::model::{Article, ArticleWithCategory, Category};

/// Article as returned by list, get and name search
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleView {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i64,
    pub category_id: i64,
}

impl From<Article> for ArticleView {
    fn from(article: Article) -> Self {
        Self {
            id: article.id,
            name: article.name,
            description: article.description,
            price: article.price,
            quantity: article.quantity,
            category_id: article.category_id,
        }
    }
}

/// Article with the category name in place of the foreign key
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleWithCategoryView {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i64,
    pub category_name: String,
}

impl From<ArticleWithCategory> for ArticleWithCategoryView {
    fn from(row: ArticleWithCategory) -> Self {
        let ArticleWithCategory {
            article,
            category_name,
        } = row;
        Self {
            id: article.id,
            name: article.name,
            description: article.description,
            price: article.price,
            quantity: article.quantity,
            category_name,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryView {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl From<Category> for CategoryView {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            description: category.description,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
