use crate::error::{parse_product_id, ApiError, ErrorResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode};

/// DELETE /api/products/{id} handler - Remove a product
#[utoipa::path(
    delete,
    path = routes::PRODUCT_ITEM,
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 400, description = "Id is not an integer", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "products"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_product_id(&id_str)?;

    match state.db.delete_product(id).await? {
        Some(_) => {
            tracing::info!("Successfully deleted product with id: {}", id);
            Ok(StatusCode::NO_CONTENT)
        }
        None => {
            tracing::info!("Product not found with id: {}", id);
            Err(ApiError::ProductNotFound(id))
        }
    }
}
