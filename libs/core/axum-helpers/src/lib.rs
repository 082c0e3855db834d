//! # Axum Helpers
//!
//! Utilities, middleware, and helpers shared by the workspace's Axum services.
//!
//! ## Modules
//!
//! - **[`server`]**: server setup, health checks, graceful shutdown
//! - **[`http`]**: HTTP middleware (CORS, security headers)
//! - **[`errors`]**: structured error responses with error codes
//! - **[`extractors`]**: custom extractors (integer id path, validated JSON)

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export server types
pub use server::{
    HealthCheckFuture, HealthResponse, create_app, create_router, health_router,
    run_health_checks, shutdown_signal,
};

// Re-export HTTP middleware
pub use http::{create_permissive_cors_layer, security_headers};

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorResponse};

// Re-export extractors
pub use extractors::{IdPath, ValidatedJson};
