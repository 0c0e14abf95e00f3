use crate::error::ApiError;
use crate::routes;
use crate::state::AppState;
use crate::ui::{self, ViewState};
use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;

/// GET / handler - The catalog page, with the current list already rendered
pub async fn index_handler(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let view = ViewState::default().begin_load();
    let view = view.set_list(state.db.list_products().await?);

    tracing::debug!("Rendering catalog page with {} products", view.items.len());
    Ok(Html(ui::render_page(&view, ui::API_BASE)))
}

/// Fields posted by the catalog form when scripts are disabled
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FormSubmission {
    pub name: String,
    pub price: String,
}

/// POST / handler - Create from a plain form post, then reload the page
///
/// A price that does not parse creates nothing, like the scripted form
/// whose request the API rejects; the page is reloaded either way.
pub async fn submit_handler(
    State(state): State<AppState>,
    Form(form): Form<FormSubmission>,
) -> Result<Redirect, ApiError> {
    let view = ViewState::default()
        .set_name(form.name)
        .set_price(form.price);

    match view.draft().into_input() {
        Some(input) => {
            let product = state.db.create_product(&input).await?;
            tracing::info!("Created product with id {} from form post", product.id);
        }
        None => {
            tracing::info!("Ignoring form post with non-numeric price: {:?}", view.price);
        }
    }

    Ok(Redirect::to(routes::INDEX))
}
