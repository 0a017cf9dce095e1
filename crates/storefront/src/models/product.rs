//! Product catalog models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use lumenparts_core::ProductId;

/// A product in the catalog.
///
/// `compatible_vehicles` holds free-text descriptions like
/// `"Toyota Corolla 2018-2022"`; vehicle filtering is a substring match
/// against these strings, not a structured lookup against the vehicle tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Price in dollars. Live value; cart totals are never snapshotted.
    pub price: Decimal,
    pub brand: String,
    pub image_url: String,
    /// Category label, matched against `categories.name`.
    pub category: String,
    pub compatible_vehicles: Vec<String>,
    pub featured: bool,
    pub stock_quantity: i32,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a product.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub brand: String,
    pub image_url: String,
    pub category: String,
    pub compatible_vehicles: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    pub stock_quantity: i32,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Partial update for a product; absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub brand: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub compatible_vehicles: Option<Vec<String>>,
    pub featured: Option<bool>,
    pub stock_quantity: Option<i32>,
    pub tags: Option<Vec<String>>,
}

/// Catalog listing filters, ANDed together.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub featured: Option<bool>,
    pub category: Option<String>,
    /// Substring matched inside any compatible-vehicle string.
    pub make: Option<String>,
    /// Substring matched inside any compatible-vehicle string. When combined
    /// with `make`, both must hit the same string.
    pub model: Option<String>,
}

impl ProductFilter {
    /// True when no filter is set and the whole catalog should be returned.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.featured.is_none()
            && self.category.is_none()
            && self.make.is_none()
            && self.model.is_none()
    }
}
