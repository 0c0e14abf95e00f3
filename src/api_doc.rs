use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::{HealthResponse, Product, ProductInput};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "product-catalog API",
        version = "1.0.0",
        description = "A minimal product catalog backed by PostgreSQL"
    ),
    paths(
        handlers::health::health_handler,
        handlers::list::list_handler,
        handlers::create::create_handler,
        handlers::get::get_handler,
        handlers::update::update_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(
            Product,
            ProductInput,
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "products", description = "Product catalog operations")
    )
)]
pub struct ApiDoc;
