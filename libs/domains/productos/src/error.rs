use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductoError {
    #[error("Producto not found: {0}")]
    NotFound(i32),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type ProductoResult<T> = Result<T, ProductoError>;

/// Convert ProductoError to AppError for standardized error responses.
///
/// Database errors keep their concrete DbErr so the shared mapping decides
/// between 503 (backend unreachable) and 500.
impl From<ProductoError> for AppError {
    fn from(err: ProductoError) -> Self {
        match err {
            ProductoError::NotFound(id) => {
                AppError::NotFound(format!("Producto {} not found", id))
            }
            ProductoError::Validation(msg) => AppError::BadRequest(msg),
            ProductoError::Database(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for ProductoError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
