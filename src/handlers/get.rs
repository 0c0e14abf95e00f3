use crate::error::{parse_product_id, ApiError, ErrorResponse};
use crate::models::Product;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// GET /api/products/{id} handler - Retrieve one product
///
/// This is the resource named by the `Location` header of a create.
#[utoipa::path(
    get,
    path = routes::PRODUCT_ITEM,
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, description = "Id is not an integer", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "products"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let id = parse_product_id(&id_str)?;

    match state.db.get_product(id).await? {
        Some(product) => {
            tracing::info!("Successfully retrieved product with id: {}", id);
            Ok((StatusCode::OK, Json(product)))
        }
        None => {
            tracing::info!("Product not found with id: {}", id);
            Err(ApiError::ProductNotFound(id))
        }
    }
}
