use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::models::{Product, ProductInput};

/// Progress of the list fetch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
}

/// Everything the catalog page holds between renders.
///
/// Transitions consume the state and hand back the next one; nothing else
/// mutates it. The page script keeps the same shape under the same names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub items: Vec<Product>,
    pub name: String,
    pub price: String,
    pub status: LoadStatus,
}

impl ViewState {
    pub fn begin_load(self) -> Self {
        Self {
            status: LoadStatus::Loading,
            ..self
        }
    }

    /// Replace the whole list with a fresh fetch.
    pub fn set_list(self, items: Vec<Product>) -> Self {
        Self {
            items,
            status: LoadStatus::Loaded,
            ..self
        }
    }

    pub fn set_name(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }

    pub fn set_price(self, price: impl Into<String>) -> Self {
        Self {
            price: price.into(),
            ..self
        }
    }

    pub fn clear_inputs(self) -> Self {
        Self {
            name: String::new(),
            price: String::new(),
            ..self
        }
    }

    /// The create request for the pending inputs; always in stock.
    pub fn draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            price: Decimal::from_str(self.price.trim()).ok(),
            in_stock: true,
        }
    }
}

/// Create body built from the form.
///
/// Serializes to the same JSON the page script posts, so a price that does
/// not parse is sent as `null`, which the API rejects. The form fallback
/// goes through `into_input` instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    pub in_stock: bool,
}

impl ProductDraft {
    pub fn into_input(self) -> Option<ProductInput> {
        let price = self.price?;
        Some(ProductInput {
            name: self.name,
            price,
            in_stock: self.in_stock,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn product(id: i32, name: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            price: dec!(1.50),
            in_stock: true,
        }
    }

    #[test]
    fn test_load_cycle() {
        let state = ViewState::default();
        assert_eq!(state.status, LoadStatus::Idle);

        let state = state.begin_load();
        assert_eq!(state.status, LoadStatus::Loading);
        assert!(state.items.is_empty());

        let state = state.set_list(vec![product(1, "a"), product(2, "b")]);
        assert_eq!(state.status, LoadStatus::Loaded);
        assert_eq!(state.items.len(), 2);
    }

    #[test]
    fn test_set_list_replaces_rather_than_patches() {
        let state = ViewState::default()
            .set_list(vec![product(1, "a"), product(2, "b")])
            .begin_load()
            .set_list(vec![product(3, "c")]);

        assert_eq!(state.items, vec![product(3, "c")]);
    }

    #[test]
    fn test_inputs_survive_reload_until_cleared() {
        let state = ViewState::default()
            .set_name("Widget")
            .set_price("9.99")
            .begin_load()
            .set_list(vec![product(1, "a")]);

        assert_eq!(state.name, "Widget");
        assert_eq!(state.price, "9.99");

        let state = state.clear_inputs();
        assert_eq!(state.name, "");
        assert_eq!(state.price, "");
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn test_draft_is_always_in_stock() {
        let draft = ViewState::default()
            .set_name("Widget")
            .set_price(" 9.99 ")
            .draft();

        assert_eq!(
            draft,
            ProductDraft {
                name: "Widget".to_string(),
                price: Some(dec!(9.99)),
                in_stock: true,
            }
        );
        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            serde_json::json!({"name": "Widget", "price": 9.99, "inStock": true})
        );
    }

    #[test]
    fn test_draft_with_unparseable_price_sends_null() {
        let draft = ViewState::default().set_name("Gadget").set_price("").draft();

        assert_eq!(draft.price, None);
        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            serde_json::json!({"name": "Gadget", "price": null, "inStock": true})
        );
        assert!(draft.into_input().is_none());
    }

    #[test]
    fn test_state_serializes_with_lowercase_status() {
        let value = serde_json::to_value(ViewState::default().begin_load()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"items": [], "name": "", "price": "", "status": "loading"})
        );
    }
}
