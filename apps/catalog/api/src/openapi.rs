use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "REST API for the iPhone product catalog"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/productos", api = domain_productos::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
