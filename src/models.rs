use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize};

/// A catalog entry as stored in the `products` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i32,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 9.99)]
    pub price: Decimal,
    pub in_stock: bool,
}

/// Request body for creating or overwriting a product.
///
/// Only a JSON object is accepted. `id` and unknown fields are ignored;
/// missing fields take the entity defaults.
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductInput {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 9.99)]
    pub price: Decimal,
    pub in_stock: bool,
}

impl Default for ProductInput {
    fn default() -> Self {
        Self {
            name: String::new(),
            price: Decimal::ZERO,
            in_stock: true,
        }
    }
}

/// Named fields of a `ProductInput`, read once the body is known to be an object
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ProductFields {
    name: String,
    #[serde(with = "rust_decimal::serde::float")]
    price: Decimal,
    in_stock: bool,
}

impl Default for ProductFields {
    fn default() -> Self {
        let ProductInput {
            name,
            price,
            in_stock,
        } = ProductInput::default();
        Self {
            name,
            price,
            in_stock,
        }
    }
}

impl<'de> Deserialize<'de> for ProductInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Going through a map rejects arrays, which serde would otherwise
        // read into the fields by position
        let object = serde_json::Map::<String, serde_json::Value>::deserialize(deserializer)?;
        let fields = ProductFields::deserialize(serde_json::Value::Object(object))
            .map_err(de::Error::custom)?;

        Ok(ProductInput {
            name: fields.name,
            price: fields.price,
            in_stock: fields.in_stock,
        })
    }
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}
