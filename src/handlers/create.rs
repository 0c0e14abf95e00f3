use crate::error::{ApiError, ErrorResponse};
use crate::models::{Product, ProductInput};
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    Json,
};

/// POST /api/products handler - Create a product
///
/// The store assigns the id; any `id` in the body is ignored.
#[utoipa::path(
    post,
    path = routes::PRODUCTS,
    request_body = ProductInput,
    responses(
        (status = 201, description = "Product created", body = Product,
            headers(("Location" = String, description = "Path of the new product"))),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "products"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    payload: Result<Json<ProductInput>, JsonRejection>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<Product>), ApiError> {
    let Json(input) = payload?;

    let product = state.db.create_product(&input).await?;

    tracing::info!("Created product with id: {}", product.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, routes::product_location(product.id))],
        Json(product),
    ))
}
