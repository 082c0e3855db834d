//! Integer id path parameter extractor with automatic validation.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};

/// Extractor for integer id path parameters.
///
/// Parses the `{id}` path segment as an `i32`, rejecting malformed input
/// with a structured 400 response instead of axum's default rejection.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::IdPath;
///
/// async fn get_record(IdPath(id): IdPath) -> String {
///     format!("record {}", id)
/// }
/// ```
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        match raw.parse::<i32>() {
            Ok(id) => Ok(IdPath(id)),
            Err(_) => Err(AppError::BadRequest(format!("Invalid id: {}", raw)).into_response()),
        }
    }
}
