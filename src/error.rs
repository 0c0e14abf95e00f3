use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Maps each failure to an HTTP status code and a JSON `{"error": ...}` body.
#[derive(Debug)]
pub enum ApiError {
    /// Path segment that is not an integer product id
    InvalidProductId(String),
    /// No product with this id
    ProductNotFound(i32),
    /// Request body that could not be read as a product
    InvalidBody(String),
    /// Database operation error
    DatabaseError(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::InvalidProductId(id) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid product id: expected an integer, got '{}'", id),
            ),
            ApiError::ProductNotFound(id) => (
                StatusCode::NOT_FOUND,
                format!("Product not found: {}", id),
            ),
            ApiError::InvalidBody(msg) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid request body: {}", msg),
            ),
            ApiError::DatabaseError(err) => {
                tracing::error!("Database error: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Database error: {}", err),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::DatabaseError(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

/// Parses a `{id}` path segment into a product id.
pub fn parse_product_id(raw: &str) -> Result<i32, ApiError> {
    raw.parse::<i32>()
        .map_err(|_| ApiError::InvalidProductId(raw.to_string()))
}
