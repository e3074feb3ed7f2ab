//! Extractors that reject with [`RestError`] so failures keep the JSON
//! error shape.

use axum::async_trait;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::errors::RestError;

/// JSON body whose rejection is a 400 `{"message": ...}`
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| RestError::InvalidBody(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Integer article id from the path. Anything else cannot name an
/// article, so it is a 404.
pub struct ArticleId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for ArticleId
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|_| RestError::NotFound)?;
        Ok(Self(id))
    }
}
