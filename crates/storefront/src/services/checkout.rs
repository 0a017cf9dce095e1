//! Checkout orchestration.
//!
//! Totals the cart from live product prices, converts to minor units, and
//! asks Stripe for a payment intent. The orchestrator only owns the first
//! transition of a checkout attempt (initiated -> authorization obtained);
//! everything after that belongs to Stripe and is observed by the client.
//!
//! There is no idempotency control: calling checkout twice for the same
//! session creates two independent payment intents. Stripe's hosted flow is
//! the system of record, so the duplicate is harmless but real.

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::PgPool;
use thiserror::Error;

use lumenparts_core::{SessionId, to_minor_units};

use super::stripe::{StripeClient, StripeError};
use crate::db::{CartRepository, RepositoryError};
use crate::models::CartLine;

/// Errors from the checkout flow.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The session has no cart items; Stripe is never contacted.
    #[error("cart is empty")]
    EmptyCart,

    /// The computed total cannot be expressed in minor currency units.
    #[error("order total out of range")]
    AmountOutOfRange,

    /// Cart could not be loaded.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Payment intent creation failed.
    #[error(transparent)]
    Stripe(#[from] StripeError),
}

/// The order as priced at checkout time.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub lines: Vec<CartLine>,
    /// Σ(live price × quantity) in dollars.
    pub total: Decimal,
}

/// Result of a successful checkout initiation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Checkout {
    pub client_secret: String,
    pub payment_intent_id: String,
    #[serde(flatten)]
    pub summary: OrderSummary,
}

/// Price the cart. Fails on an empty cart before any external call is made.
///
/// # Errors
///
/// Returns `CheckoutError::EmptyCart` if there are no lines.
pub fn order_summary(lines: Vec<CartLine>) -> Result<OrderSummary, CheckoutError> {
    if lines.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    let total = lines.iter().map(CartLine::line_total).sum();
    Ok(OrderSummary { lines, total })
}

/// Begin a checkout attempt for a session.
///
/// Loads the cart, totals it at current prices, and creates a Stripe payment
/// intent for the exact amount in cents. Returns the client secret the
/// browser needs to complete payment.
///
/// # Errors
///
/// Returns `CheckoutError::EmptyCart` without contacting Stripe when the
/// cart has no items; repository and Stripe failures propagate unretried.
pub async fn begin_checkout(
    pool: &PgPool,
    stripe: &StripeClient,
    session_id: &SessionId,
) -> Result<Checkout, CheckoutError> {
    let lines = CartRepository::new(pool).items(session_id).await?;
    let summary = order_summary(lines)?;

    let amount_minor =
        to_minor_units(summary.total).ok_or(CheckoutError::AmountOutOfRange)?;

    tracing::info!(
        session_id = %session_id,
        total = %summary.total,
        amount_minor,
        "Creating payment intent"
    );

    let intent = stripe
        .create_payment_intent(amount_minor, "usd", session_id)
        .await?;

    Ok(Checkout {
        client_secret: intent.client_secret,
        payment_intent_id: intent.id,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use lumenparts_core::{CartItemId, ProductId};

    use super::*;
    use crate::models::Product;

    fn line(id: i32, price: &str, quantity: i32) -> CartLine {
        CartLine {
            id: CartItemId::new(id),
            session_id: SessionId::new("sess-1"),
            product_id: ProductId::new(id),
            quantity,
            created_at: Utc::now(),
            product: Product {
                id: ProductId::new(id),
                name: format!("Product {id}"),
                description: String::new(),
                price: price.parse().expect("decimal"),
                brand: "TYC".into(),
                image_url: String::new(),
                category: "Headlights".into(),
                compatible_vehicles: vec![],
                featured: false,
                stock_quantity: 10,
                tags: vec![],
                created_at: Utc::now(),
            },
        }
    }

    #[test]
    fn empty_cart_fails_before_any_processor_call() {
        // order_summary runs before the Stripe client is touched in
        // begin_checkout, so this failure guarantees no external call.
        let err = order_summary(vec![]).expect_err("empty cart must fail");
        assert!(matches!(err, CheckoutError::EmptyCart));
    }

    #[test]
    fn reference_cart_totals_to_6998_minor_units() {
        // Product A: 29.99 x 2, Product B: 10.00 x 1 => 69.98
        let summary =
            order_summary(vec![line(1, "29.99", 2), line(2, "10.00", 1)]).expect("summary");
        assert_eq!(summary.total, "69.98".parse::<Decimal>().expect("decimal"));
        assert_eq!(to_minor_units(summary.total), Some(6998));
    }

    #[test]
    fn total_follows_live_prices() {
        let mut lines = vec![line(1, "100.00", 1)];
        let before = order_summary(lines.clone()).expect("summary").total;

        // A price edit between add and checkout changes the charged total.
        if let Some(l) = lines.first_mut() {
            l.product.price = "80.00".parse().expect("decimal");
        }
        let after = order_summary(lines).expect("summary").total;

        assert_eq!(before, "100.00".parse::<Decimal>().expect("decimal"));
        assert_eq!(after, "80.00".parse::<Decimal>().expect("decimal"));
    }

    #[test]
    fn checkout_serializes_flat() {
        let summary = order_summary(vec![line(1, "10.00", 1)]).expect("summary");
        let checkout = Checkout {
            client_secret: "pi_1_secret_a".into(),
            payment_intent_id: "pi_1".into(),
            summary,
        };
        let json = serde_json::to_value(&checkout).expect("serialize");
        assert_eq!(json["clientSecret"], "pi_1_secret_a");
        assert_eq!(json["paymentIntentId"], "pi_1");
        assert_eq!(json["total"], "10.00");
        assert!(json["lines"].is_array());
    }
}
