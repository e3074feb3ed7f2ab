use std::path::Path;

use rusqlite::{params, OptionalExtension, Row};
use tokio_rusqlite::Connection;

use crate::model::{
    Article, ArticleChanges, ArticleWithCategory, Category, NewArticle, NewCategory,
};

use super::errors::StoreResult;
use super::schema::SCHEMA;

/// Handle to the inventory database.
///
/// Cloning is cheap: every clone talks to the same connection, whose worker
/// thread runs one statement batch at a time.
#[derive(Clone)]
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open (or create) the database file and make sure the schema exists.
    pub async fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();
        tracing::debug!(path = %path.display(), "opening database");
        let conn = Connection::open(path).await?;
        Self::init(conn).await
    }

    pub async fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory().await?;
        Self::init(conn).await
    }

    async fn init(conn: Connection) -> StoreResult<Self> {
        conn.call(|conn| {
            // Off by default in SQLite, and per-connection.
            conn.pragma_update(None, "foreign_keys", "ON")?;
            conn.execute_batch(SCHEMA)?;
            Ok(())
        })
        .await?;

        tracing::info!("database schema ready");
        Ok(Self { conn })
    }

    // Category operations

    pub async fn insert_category(&self, category: NewCategory) -> StoreResult<Category> {
        let category = self
            .conn
            .call(move |conn| {
                conn.execute(
                    "INSERT INTO categorie (name, description) VALUES (?1, ?2)",
                    params![category.name, category.description],
                )?;
                Ok(Category {
                    id: conn.last_insert_rowid(),
                    name: category.name,
                    description: category.description,
                })
            })
            .await?;
        Ok(category)
    }

    pub async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        let categories = self
            .conn
            .call(|conn| {
                let mut stmt =
                    conn.prepare("SELECT id, name, description FROM categorie ORDER BY id")?;
                let categories = stmt
                    .query_map([], category_from_row)?
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                Ok(categories)
            })
            .await?;
        Ok(categories)
    }

    // Article operations

    pub async fn insert_article(&self, article: NewArticle) -> StoreResult<Article> {
        let article = self
            .conn
            .call(move |conn| {
                conn.execute(
                    "INSERT INTO article (name, description, price, quantity, categorie_id)
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                    params![
                        article.name,
                        article.description,
                        article.price,
                        article.quantity,
                        article.category_id,
                    ],
                )?;
                Ok(Article {
                    id: conn.last_insert_rowid(),
                    name: article.name,
                    description: article.description,
                    price: article.price,
                    quantity: article.quantity,
                    category_id: article.category_id,
                })
            })
            .await?;
        Ok(article)
    }

    pub async fn get_article(&self, id: i64) -> StoreResult<Option<Article>> {
        let article = self
            .conn
            .call(move |conn| {
                let article = conn
                    .query_row(
                        "SELECT id, name, description, price, quantity, categorie_id
                         FROM article WHERE id = ?1",
                        params![id],
                        article_from_row,
                    )
                    .optional()?;
                Ok(article)
            })
            .await?;
        Ok(article)
    }

    pub async fn list_articles(&self) -> StoreResult<Vec<Article>> {
        let articles = self
            .conn
            .call(|conn| {
                let mut stmt = conn.prepare(
                    "SELECT id, name, description, price, quantity, categorie_id
                     FROM article ORDER BY id",
                )?;
                let articles = stmt
                    .query_map([], article_from_row)?
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                Ok(articles)
            })
            .await?;
        Ok(articles)
    }

    /// Apply `changes` to the article with `id`.
    ///
    /// Returns `None` without touching the database when the id is unknown.
    /// Read and write share one transaction; a constraint failure rolls the
    /// whole update back.
    pub async fn update_article(
        &self,
        id: i64,
        changes: ArticleChanges,
    ) -> StoreResult<Option<Article>> {
        let updated = self
            .conn
            .call(move |conn| {
                let tx = conn.transaction()?;

                let current = tx
                    .query_row(
                        "SELECT id, name, description, price, quantity, categorie_id
                         FROM article WHERE id = ?1",
                        params![id],
                        article_from_row,
                    )
                    .optional()?;
                let Some(current) = current else {
                    return Ok(None);
                };

                let updated = changes.apply(&current);
                tx.execute(
                    "UPDATE article
                     SET name = ?1, description = ?2, price = ?3, quantity = ?4, categorie_id = ?5
                     WHERE id = ?6",
                    params![
                        updated.name,
                        updated.description,
                        updated.price,
                        updated.quantity,
                        updated.category_id,
                        id,
                    ],
                )?;
                tx.commit()?;

                Ok(Some(updated))
            })
            .await?;
        Ok(updated)
    }

    /// Returns whether a row was removed.
    pub async fn delete_article(&self, id: i64) -> StoreResult<bool> {
        let removed = self
            .conn
            .call(move |conn| {
                let removed = conn.execute("DELETE FROM article WHERE id = ?1", params![id])?;
                Ok(removed > 0)
            })
            .await?;
        Ok(removed)
    }

    /// Case-sensitive substring match on name or description, with the
    /// owning category's name resolved.
    pub async fn search_articles_with_category(
        &self,
        keyword: &str,
    ) -> StoreResult<Vec<ArticleWithCategory>> {
        let keyword = keyword.to_owned();
        let articles = self
            .conn
            .call(move |conn| {
                let mut stmt = conn.prepare(
                    "SELECT a.id, a.name, a.description, a.price, a.quantity, a.categorie_id,
                            c.name AS category_name
                     FROM article a
                     JOIN categorie c ON c.id = a.categorie_id
                     WHERE instr(a.name, ?1) > 0 OR instr(a.description, ?1) > 0
                     ORDER BY a.id",
                )?;
                let articles = stmt
                    .query_map(params![keyword], |row| {
                        Ok(ArticleWithCategory {
                            article: article_from_row(row)?,
                            category_name: row.get(6)?,
                        })
                    })?
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                Ok(articles)
            })
            .await?;
        Ok(articles)
    }

    /// Case-insensitive substring match on name. Wildcard characters in
    /// `keyword` are matched literally.
    pub async fn search_articles_by_name(&self, keyword: &str) -> StoreResult<Vec<Article>> {
        let keyword = keyword.to_owned();
        let articles = self
            .conn
            .call(move |conn| {
                // SQLite's lower() folds ASCII only.
                let mut stmt = conn.prepare(
                    "SELECT id, name, description, price, quantity, categorie_id
                     FROM article
                     WHERE instr(lower(name), lower(?1)) > 0
                     ORDER BY id",
                )?;
                let articles = stmt
                    .query_map(params![keyword], article_from_row)?
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                Ok(articles)
            })
            .await?;
        Ok(articles)
    }
}

fn article_from_row(row: &Row) -> rusqlite::Result<Article> {
    Ok(Article {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        price: row.get(3)?,
        quantity: row.get(4)?,
        category_id: row.get(5)?,
    })
}

fn category_from_row(row: &Row) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
    })
}
