//! Category HTTP Routes
//!
//! Categories can be created and listed. There is no update or delete.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use crate::store::Store;

use super::errors::RestResult;
use super::extract::JsonBody;
use super::request::CategoryPayload;
use super::response::{CategoryView, MessageResponse};

/// Category state shared across handlers
pub struct CategoryState {
    pub store: Store,
}

impl CategoryState {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

/// Create category routes
pub fn category_routes(state: Arc<CategoryState>) -> Router {
    Router::new()
        .route(
            "/categories",
            get(list_categories_handler).post(create_category_handler),
        )
        .with_state(state)
}

async fn list_categories_handler(
    State(state): State<Arc<CategoryState>>,
) -> RestResult<Json<Vec<CategoryView>>> {
    let categories = state.store.list_categories().await?;
    Ok(Json(categories.into_iter().map(CategoryView::from).collect()))
}

async fn create_category_handler(
    State(state): State<Arc<CategoryState>>,
    JsonBody(payload): JsonBody<CategoryPayload>,
) -> RestResult<(StatusCode, Json<MessageResponse>)> {
    let category = payload.into_new_category()?;
    let created = state.store.insert_category(category).await?;
    tracing::info!(id = created.id, name = %created.name, "category created");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Category added successfully.")),
    ))
}
