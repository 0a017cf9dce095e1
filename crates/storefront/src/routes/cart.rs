//! Cart handlers.
//!
//! The session id in these routes is the client-generated bearer key for the
//! cart; it is trusted as-is, there is no account layer behind it.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use lumenparts_core::{CartItemId, ProductId, SessionId};

use crate::db::CartRepository;
use crate::error::{AppError, Result};
use crate::models::{CartItem, CartLine};
use crate::state::AppState;

/// Body for `POST /api/cart`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub session_id: SessionId,
    pub product_id: ProductId,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

const fn default_quantity() -> i32 {
    1
}

/// Quantities start at 1; zero means "remove the item", which is its own
/// endpoint.
fn validate_quantity(quantity: i32) -> Result<()> {
    if quantity < 1 {
        return Err(AppError::Validation {
            field: "quantity",
            message: "quantity must be a positive number".to_string(),
        });
    }
    Ok(())
}

/// Body for `PUT /api/cart/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateQuantityRequest {
    pub quantity: i32,
}

/// Body for clear-cart responses.
#[derive(Debug, Serialize)]
pub struct ClearCartResponse {
    pub message: String,
    pub removed: u64,
}

/// `GET /api/cart/{sessionId}` - cart lines joined with live product data.
pub async fn items(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<Vec<CartLine>>> {
    let lines = CartRepository::new(state.pool())
        .items(&SessionId::new(session_id))
        .await?;
    Ok(Json(lines))
}

/// `POST /api/cart` - add a product to the cart.
///
/// Adding a product already in the cart folds into the existing row: the
/// quantities accumulate, a second row is never created.
pub async fn add(
    State(state): State<AppState>,
    Json(body): Json<AddToCartRequest>,
) -> Result<(StatusCode, Json<CartLine>)> {
    validate_quantity(body.quantity)?;

    let line = CartRepository::new(state.pool())
        .add(&body.session_id, body.product_id, body.quantity)
        .await
        .map_err(|e| match e {
            crate::db::RepositoryError::NotFound => {
                AppError::NotFound("Product not found".to_string())
            }
            other => other.into(),
        })?;
    Ok((StatusCode::CREATED, Json(line)))
}

/// `PUT /api/cart/{id}` - set an item's quantity.
///
/// Quantities below 1 are rejected without touching the stored row; remove
/// the item instead of zeroing it.
pub async fn update_quantity(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<UpdateQuantityRequest>,
) -> Result<Json<CartItem>> {
    validate_quantity(body.quantity)?;

    let item = CartRepository::new(state.pool())
        .update_quantity(CartItemId::new(id), body.quantity)
        .await?
        .ok_or_else(|| AppError::NotFound("Cart item not found".to_string()))?;
    Ok(Json(item))
}

/// `DELETE /api/cart/{id}` - remove an item; deleting an absent id succeeds.
pub async fn remove(State(state): State<AppState>, Path(id): Path<i32>) -> Result<StatusCode> {
    CartRepository::new(state.pool())
        .remove(CartItemId::new(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /api/cart/{sessionId}/clear` - drop every item for the session.
///
/// Meant to run after a successful payment. Nothing invokes it
/// automatically; the client calls it from its payment-success page.
pub async fn clear(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<ClearCartResponse>> {
    let removed = CartRepository::new(state.pool())
        .clear(&SessionId::new(session_id))
        .await?;
    Ok(Json(ClearCartResponse {
        message: "Cart cleared successfully".to_string(),
        removed,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_request_defaults_quantity_to_one() {
        let body: AddToCartRequest = serde_json::from_value(serde_json::json!({
            "sessionId": "sess-1",
            "productId": 3
        }))
        .expect("deserialize");
        assert_eq!(body.quantity, 1);
        assert_eq!(body.session_id.as_str(), "sess-1");
        assert_eq!(body.product_id, ProductId::new(3));
    }

    #[test]
    fn zero_and_negative_quantities_are_rejected() {
        for quantity in [0, -3] {
            let err = validate_quantity(quantity).expect_err("must reject");
            assert!(matches!(
                err,
                AppError::Validation {
                    field: "quantity",
                    ..
                }
            ));
        }
        assert!(validate_quantity(1).is_ok());
    }

    #[test]
    fn add_request_accepts_explicit_quantity() {
        let body: AddToCartRequest = serde_json::from_value(serde_json::json!({
            "sessionId": "sess-1",
            "productId": 3,
            "quantity": 4
        }))
        .expect("deserialize");
        assert_eq!(body.quantity, 4);
    }
}
