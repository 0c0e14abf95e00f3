use crate::error::{ApiError, ErrorResponse};
use crate::models::Product;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /api/products handler - List every product
#[utoipa::path(
    get,
    path = routes::PRODUCTS,
    responses(
        (status = 200, description = "All products", body = [Product]),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "products"
)]
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<Product>>), ApiError> {
    let products = state.db.list_products().await?;

    tracing::info!("Listed {} products", products.len());
    Ok((StatusCode::OK, Json(products)))
}
