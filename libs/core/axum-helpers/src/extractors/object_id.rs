//! ObjectId path parameter extractor with automatic validation.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use mongodb::bson::oid::ObjectId;

/// Extractor for ObjectId path parameters.
///
/// Parses the 24-hex-char identifier from the path and rejects malformed ones
/// with a 400 before the handler (and therefore the store) is ever reached.
///
/// # Example
/// ```ignore
/// use axum::{routing::get, Router};
/// use axum_helpers::extractors::ObjectIdPath;
///
/// async fn get_task(ObjectIdPath(id): ObjectIdPath) -> String {
///     format!("Task ID: {}", id)
/// }
///
/// let app = Router::new().route("/tasks/{id}", get(get_task));
/// ```
pub struct ObjectIdPath(pub ObjectId);

impl<S> FromRequestParts<S> for ObjectIdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        match ObjectId::parse_str(&id) {
            Ok(oid) => Ok(ObjectIdPath(oid)),
            Err(_) => Err(AppError::BadRequest(format!("Invalid task id: {}", id)).into_response()),
        }
    }
}
