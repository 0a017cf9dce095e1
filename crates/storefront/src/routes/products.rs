//! Product catalog handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use lumenparts_core::ProductId;

use crate::db::CatalogRepository;
use crate::error::{AppError, Result};
use crate::models::{NewProduct, Product, ProductFilter, ProductPatch};
use crate::state::AppState;

/// Raw query string parameters for the product listing.
///
/// The client sends empty strings for unused filters, so everything arrives
/// as an optional string and is normalized here.
#[derive(Debug, Default, Deserialize)]
pub struct ProductListQuery {
    pub featured: Option<String>,
    pub category: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
}

impl ProductListQuery {
    /// Normalize raw query parameters into a catalog filter.
    ///
    /// Empty strings mean "no filter"; anything but `true`/`false` for
    /// `featured` is rejected.
    fn into_filter(self) -> Result<ProductFilter> {
        let featured = match self.featured.as_deref() {
            None | Some("") => None,
            Some("true") => Some(true),
            Some("false") => Some(false),
            Some(other) => {
                return Err(AppError::Validation {
                    field: "featured",
                    message: format!("expected true or false, got '{other}'"),
                });
            }
        };

        Ok(ProductFilter {
            featured,
            category: none_if_empty(self.category),
            make: none_if_empty(self.make),
            model: none_if_empty(self.model),
        })
    }
}

fn none_if_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// `GET /api/products` - list products matching the supplied filters.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ProductListQuery>,
) -> Result<Json<Vec<Product>>> {
    let filter = query.into_filter()?;
    let products = CatalogRepository::new(state.pool())
        .list_products(&filter)
        .await?;
    Ok(Json(products))
}

/// `GET /api/products/{id}` - single product or 404.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Product>> {
    let product = CatalogRepository::new(state.pool())
        .get_product(ProductId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;
    Ok(Json(product))
}

/// `POST /api/products` - create a product (inventory management).
pub async fn create(
    State(state): State<AppState>,
    Json(new): Json<NewProduct>,
) -> Result<(StatusCode, Json<Product>)> {
    let product = CatalogRepository::new(state.pool())
        .create_product(&new)
        .await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// `PUT /api/products/{id}` - partial update; absent fields are untouched.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<ProductPatch>,
) -> Result<Json<Product>> {
    let product = CatalogRepository::new(state.pool())
        .update_product(ProductId::new(id), &patch)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;
    Ok(Json(product))
}

/// `DELETE /api/products/{id}` - unconditional delete.
///
/// Existing cart rows referencing the product are left behind; cart reads
/// omit them.
pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Result<StatusCode> {
    let deleted = CatalogRepository::new(state.pool())
        .delete_product(ProductId::new(id))
        .await?;
    if !deleted {
        return Err(AppError::NotFound("Product not found".to_string()));
    }
    Ok(StatusCode::NO_CONTENT)
}
