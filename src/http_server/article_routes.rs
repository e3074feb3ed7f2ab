//! Article HTTP Routes
//!
//! CRUD and keyword search over articles.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::store::Store;

use super::errors::{RestError, RestResult};
use super::extract::{ArticleId, JsonBody};
use super::request::{ArticlePayload, SearchQuery};
use super::response::{ArticleView, ArticleWithCategoryView, MessageResponse};

// ==================
// Shared State
// ==================

/// Article state shared across handlers
pub struct ArticleState {
    pub store: Store,
}

impl ArticleState {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

// ==================
// Article Routes
// ==================

/// Create article routes
pub fn article_routes(state: Arc<ArticleState>) -> Router {
    Router::new()
        .route("/articles", get(list_articles_handler).post(create_article_handler))
        // Static segments take priority over `:id`
        .route("/articles/recherche", get(search_with_category_handler))
        .route("/articles/search", get(search_by_name_handler))
        .route(
            "/articles/:id",
            get(get_article_handler)
                .put(update_article_handler)
                .delete(delete_article_handler),
        )
        .with_state(state)
}

// ==================
// CRUD Handlers
// ==================

async fn list_articles_handler(
    State(state): State<Arc<ArticleState>>,
) -> RestResult<Json<Vec<ArticleView>>> {
    let articles = state.store.list_articles().await?;
    Ok(Json(articles.into_iter().map(ArticleView::from).collect()))
}

async fn get_article_handler(
    State(state): State<Arc<ArticleState>>,
    ArticleId(id): ArticleId,
) -> RestResult<Json<ArticleView>> {
    let article = state
        .store
        .get_article(id)
        .await?
        .ok_or(RestError::NotFound)?;
    Ok(Json(article.into()))
}

async fn create_article_handler(
    State(state): State<Arc<ArticleState>>,
    JsonBody(payload): JsonBody<ArticlePayload>,
) -> RestResult<(StatusCode, Json<MessageResponse>)> {
    let article = payload.into_new_article()?;
    let created = state.store.insert_article(article).await?;
    tracing::info!(id = created.id, name = %created.name, "article created");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Article added successfully.")),
    ))
}

async fn update_article_handler(
    State(state): State<Arc<ArticleState>>,
    ArticleId(id): ArticleId,
    JsonBody(payload): JsonBody<ArticlePayload>,
) -> RestResult<Json<MessageResponse>> {
    let changes = payload.into_changes()?;
    state
        .store
        .update_article(id, changes)
        .await?
        .ok_or(RestError::NotFound)?;
    tracing::info!(id, "article updated");

    Ok(Json(MessageResponse::new("Article updated successfully.")))
}

async fn delete_article_handler(
    State(state): State<Arc<ArticleState>>,
    ArticleId(id): ArticleId,
) -> RestResult<Json<MessageResponse>> {
    if !state.store.delete_article(id).await? {
        return Err(RestError::NotFound);
    }
    tracing::info!(id, "article deleted");

    Ok(Json(MessageResponse::new("Article deleted successfully.")))
}

// ==================
// Search Handlers
// ==================

/// Case-sensitive match on name or description; `q` is required.
async fn search_with_category_handler(
    State(state): State<Arc<ArticleState>>,
    Query(query): Query<SearchQuery>,
) -> RestResult<Json<Vec<ArticleWithCategoryView>>> {
    let keyword = query.q.ok_or(RestError::MissingParam("q"))?;

    let articles = state.store.search_articles_with_category(&keyword).await?;
    if articles.is_empty() {
        return Err(RestError::NoResults);
    }

    Ok(Json(
        articles
            .into_iter()
            .map(ArticleWithCategoryView::from)
            .collect(),
    ))
}

/// Case-insensitive match on name; `q` defaults to empty.
async fn search_by_name_handler(
    State(state): State<Arc<ArticleState>>,
    Query(query): Query<SearchQuery>,
) -> RestResult<Json<Vec<ArticleView>>> {
    let keyword = query.q.unwrap_or_default();

    let articles = state.store.search_articles_by_name(&keyword).await?;
    if articles.is_empty() {
        return Err(RestError::NoResults);
    }

    Ok(Json(articles.into_iter().map(ArticleView::from).collect()))
}
