//! HTTP route handlers for the storefront API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                        - Health check
//!
//! # Catalog
//! GET    /api/products                  - Product listing (featured/category/make/model filters)
//! GET    /api/products/{id}             - Product detail
//! POST   /api/products                  - Create product (inventory management)
//! PUT    /api/products/{id}             - Partial product update
//! DELETE /api/products/{id}             - Delete product
//! GET    /api/categories                - Categories with derived product counts
//! GET    /api/vehicle-makes             - Vehicle makes
//! GET    /api/vehicle-models?makeId=    - Vehicle models, optionally by make
//!
//! # Cart
//! GET    /api/cart/{sessionId}          - Cart lines joined with live product data
//! POST   /api/cart                      - Add to cart (quantity-merge upsert)
//! PUT    /api/cart/{id}                 - Update quantity (>= 1)
//! DELETE /api/cart/{id}                 - Remove item (idempotent)
//! POST   /api/cart/{sessionId}/clear    - Clear cart after successful payment
//!
//! # Checkout
//! POST   /api/checkout/{sessionId}      - Total the cart and create a payment intent
//! POST   /api/create-payment-intent     - Raw payment-intent creation (client-supplied amount)
//! ```

pub mod cart;
pub mod categories;
pub mod checkout;
pub mod products;
pub mod vehicles;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::list).post(products::create))
        .route(
            "/{id}",
            get(products::show)
                .put(products::update)
                .delete(products::delete),
        )
}

/// Create the cart routes router.
///
/// `GET /{id}` takes a session id while `PUT`/`DELETE /{id}` take a cart
/// item id; the handlers extract the parameter they need.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(cart::add))
        .route(
            "/{id}",
            get(cart::items).put(cart::update_quantity).delete(cart::remove),
        )
        .route("/{id}/clear", post(cart::clear))
}

/// Create the checkout routes router (mounted at the API root).
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/api/checkout/{session_id}", post(checkout::begin))
        .route(
            "/api/create-payment-intent",
            post(checkout::create_payment_intent),
        )
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .nest("/api/products", product_routes())
        .route("/api/categories", get(categories::list))
        .route("/api/vehicle-makes", get(vehicles::makes))
        .route("/api/vehicle-models", get(vehicles::models))
        .nest("/api/cart", cart_routes())
        .merge(checkout_routes())
}

/// Health check endpoint.
async fn health() -> &'static str {
    "OK"
}
