use axum::Router;
use domain_productos::{PgProductoRepository, ProductoService, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgProductoRepository::new(state.db.clone());
    let service = ProductoService::new(repository);
    handlers::router(service)
}
