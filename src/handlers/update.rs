use crate::error::{parse_product_id, ApiError, ErrorResponse};
use crate::models::ProductInput;
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

/// PUT /api/products/{id} handler - Overwrite a product
///
/// Every mutable field is replaced; fields missing from the body fall back
/// to the entity defaults rather than keeping their stored values.
#[utoipa::path(
    put,
    path = routes::PRODUCT_ITEM,
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    request_body = ProductInput,
    responses(
        (status = 204, description = "Product updated"),
        (status = 400, description = "Invalid id or request body", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "products"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    payload: Result<Json<ProductInput>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let id = parse_product_id(&id_str)?;
    let Json(input) = payload?;

    match state.db.update_product(id, &input).await? {
        Some(_) => {
            tracing::info!("Successfully updated product with id: {}", id);
            Ok(StatusCode::NO_CONTENT)
        }
        None => {
            tracing::info!("Product not found with id: {}", id);
            Err(ApiError::ProductNotFound(id))
        }
    }
}
