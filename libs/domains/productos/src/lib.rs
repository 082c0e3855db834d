//! Productos Domain
//!
//! Domain implementation for the product catalog: a single `Producto`
//! entity (an iPhone configuration) with CRUD and attribute searches.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation, not-found translation
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + implementations)
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_productos::{
//!     handlers,
//!     repository::InMemoryProductoRepository,
//!     service::ProductoService,
//! };
//!
//! let repository = InMemoryProductoRepository::new();
//! let service = ProductoService::new(repository);
//!
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ProductoError, ProductoResult};
pub use models::{CreateProducto, Producto, UpdateProducto};
pub use postgres::PgProductoRepository;
pub use repository::{InMemoryProductoRepository, ProductoRepository};
pub use service::ProductoService;
