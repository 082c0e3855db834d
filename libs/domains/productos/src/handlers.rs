use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{ErrorResponse, IdPath, ValidatedJson};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductoResult;
use crate::models::{CreateProducto, Producto, UpdateProducto};
use crate::repository::ProductoRepository;
use crate::service::ProductoService;

pub const TAG: &str = "productos";

/// OpenAPI documentation for the Productos API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_productos,
        create_producto,
        get_producto,
        update_producto,
        delete_producto,
        search_by_modelo,
        search_by_color,
        search_by_almacenamiento,
        list_disponibles,
    ),
    components(schemas(Producto, CreateProducto, UpdateProducto, ErrorResponse)),
    tags(
        (name = TAG, description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the productos router with all HTTP endpoints
pub fn router<R: ProductoRepository + 'static>(service: ProductoService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_productos).post(create_producto))
        .route("/disponibles", get(list_disponibles))
        .route("/buscar/modelo/{modelo}", get(search_by_modelo))
        .route("/buscar/color/{color}", get(search_by_color))
        .route(
            "/buscar/almacenamiento/{almacenamiento}",
            get(search_by_almacenamiento),
        )
        .route(
            "/{id}",
            get(get_producto).put(update_producto).delete(delete_producto),
        )
        .with_state(shared_service)
}

/// List all productos
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "List of productos", body = Vec<Producto>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn list_productos<R: ProductoRepository>(
    State(service): State<Arc<ProductoService<R>>>,
) -> ProductoResult<Json<Vec<Producto>>> {
    let productos = service.list_productos().await?;
    Ok(Json(productos))
}

/// Create a new producto
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateProducto,
    responses(
        (status = 201, description = "Producto created successfully", body = Producto),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn create_producto<R: ProductoRepository>(
    State(service): State<Arc<ProductoService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProducto>,
) -> ProductoResult<impl IntoResponse> {
    let producto = service.create_producto(input).await?;
    Ok((StatusCode::CREATED, Json(producto)))
}

/// Get a producto by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Producto id")
    ),
    responses(
        (status = 200, description = "Producto found", body = Producto),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Producto not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn get_producto<R: ProductoRepository>(
    State(service): State<Arc<ProductoService<R>>>,
    IdPath(id): IdPath,
) -> ProductoResult<Json<Producto>> {
    let producto = service.get_producto(id).await?;
    Ok(Json(producto))
}

/// Update a producto
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Producto id")
    ),
    request_body = UpdateProducto,
    responses(
        (status = 200, description = "Producto updated successfully", body = Producto),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Producto not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn update_producto<R: ProductoRepository>(
    State(service): State<Arc<ProductoService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateProducto>,
) -> ProductoResult<Json<Producto>> {
    let producto = service.update_producto(id, input).await?;
    Ok(Json(producto))
}

/// Delete a producto
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Producto id")
    ),
    responses(
        (status = 204, description = "Producto deleted successfully"),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Producto not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn delete_producto<R: ProductoRepository>(
    State(service): State<Arc<ProductoService<R>>>,
    IdPath(id): IdPath,
) -> ProductoResult<impl IntoResponse> {
    service.delete_producto(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Search productos by modelo substring, case-insensitive
#[utoipa::path(
    get,
    path = "/buscar/modelo/{modelo}",
    tag = TAG,
    params(
        ("modelo" = String, Path, description = "Substring of the modelo")
    ),
    responses(
        (status = 200, description = "Matching productos", body = Vec<Producto>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn search_by_modelo<R: ProductoRepository>(
    State(service): State<Arc<ProductoService<R>>>,
    Path(modelo): Path<String>,
) -> ProductoResult<Json<Vec<Producto>>> {
    let productos = service.search_by_modelo(&modelo).await?;
    Ok(Json(productos))
}

/// Search productos by exact color, case-insensitive
#[utoipa::path(
    get,
    path = "/buscar/color/{color}",
    tag = TAG,
    params(
        ("color" = String, Path, description = "Color name")
    ),
    responses(
        (status = 200, description = "Matching productos", body = Vec<Producto>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn search_by_color<R: ProductoRepository>(
    State(service): State<Arc<ProductoService<R>>>,
    Path(color): Path<String>,
) -> ProductoResult<Json<Vec<Producto>>> {
    let productos = service.search_by_color(&color).await?;
    Ok(Json(productos))
}

/// Search productos by exact almacenamiento, case-sensitive
#[utoipa::path(
    get,
    path = "/buscar/almacenamiento/{almacenamiento}",
    tag = TAG,
    params(
        ("almacenamiento" = String, Path, description = "Storage capacity descriptor")
    ),
    responses(
        (status = 200, description = "Matching productos", body = Vec<Producto>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn search_by_almacenamiento<R: ProductoRepository>(
    State(service): State<Arc<ProductoService<R>>>,
    Path(almacenamiento): Path<String>,
) -> ProductoResult<Json<Vec<Producto>>> {
    let productos = service.search_by_almacenamiento(&almacenamiento).await?;
    Ok(Json(productos))
}

/// List productos with stock available
#[utoipa::path(
    get,
    path = "/disponibles",
    tag = TAG,
    responses(
        (status = 200, description = "Productos with stock > 0", body = Vec<Producto>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn list_disponibles<R: ProductoRepository>(
    State(service): State<Arc<ProductoService<R>>>,
) -> ProductoResult<Json<Vec<Producto>>> {
    let productos = service.list_disponibles().await?;
    Ok(Json(productos))
}
