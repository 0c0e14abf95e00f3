// Route path constants - single source of truth for all paths

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::state::AppState;
use crate::ui;

pub const INDEX: &str = "/";
pub const HEALTH: &str = "/healthz";
pub const PRODUCTS: &str = "/api/products";
pub const PRODUCT_ITEM: &str = "/api/products/{id}";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
pub const SWAGGER_UI: &str = "/swagger-ui";

/// Path of a single product, as sent in `Location` headers
pub fn product_location(id: i32) -> String {
    format!("{}/{}", PRODUCTS, id)
}

/// The JSON API routes, without state
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route(HEALTH, get(handlers::health_handler))
        .route(
            PRODUCTS,
            get(handlers::list_handler).post(handlers::create_handler),
        )
        .route(
            PRODUCT_ITEM,
            get(handlers::get_handler)
                .put(handlers::update_handler)
                .delete(handlers::delete_handler),
        )
}

/// The full application: API, catalog page and API documentation
pub fn app(state: AppState) -> Router {
    let mut router = Router::new()
        .route(
            INDEX,
            get(handlers::index_handler).post(handlers::submit_handler),
        )
        .merge(api_router());

    if let Some(prefix) = ui::api_mount_path(ui::API_BASE) {
        tracing::debug!("Mounting API under {} for the catalog page", prefix);
        router = router.nest(&prefix, api_router());
    }

    router
        .merge(SwaggerUi::new(SWAGGER_UI).url(OPENAPI_JSON, ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
