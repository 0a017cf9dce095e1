//! Cart models.
//!
//! A cart is the set of `cart_items` rows sharing a session id. Reads join
//! each row with its product so prices and names are always live; rows whose
//! product has been deleted are omitted by the join rather than surfaced as
//! errors.

use chrono::{DateTime, Utc};
use serde::Serialize;

use lumenparts_core::{CartItemId, ProductId, SessionId};

use super::Product;

/// A single stored cart row, without product data.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: CartItemId,
    pub session_id: SessionId,
    pub product_id: ProductId,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
}

/// A cart row joined with the current product record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: CartItemId,
    pub session_id: SessionId,
    pub product_id: ProductId,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
    pub product: Product,
}

impl CartLine {
    /// Line total at the product's current price.
    #[must_use]
    pub fn line_total(&self) -> rust_decimal::Decimal {
        self.product.price * rust_decimal::Decimal::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product(price: &str) -> Product {
        Product {
            id: ProductId::new(1),
            name: "LED Headlight Assembly".into(),
            description: "test".into(),
            price: price.parse().expect("decimal"),
            brand: "DEPO".into(),
            image_url: "https://example.com/p.jpg".into(),
            category: "Headlights".into(),
            compatible_vehicles: vec![],
            featured: false,
            stock_quantity: 5,
            tags: vec![],
            created_at: Utc::now(),
        }
    }

    #[test]
    fn line_total_uses_live_price() {
        let mut line = CartLine {
            id: CartItemId::new(1),
            session_id: SessionId::new("s1"),
            product_id: ProductId::new(1),
            quantity: 2,
            created_at: Utc::now(),
            product: sample_product("29.99"),
        };
        assert_eq!(line.line_total(), "59.98".parse().expect("decimal"));

        // A price edit changes the total on the next read; nothing is frozen
        // at add time.
        line.product.price = "31.00".parse().expect("decimal");
        assert_eq!(line.line_total(), "62.00".parse().expect("decimal"));
    }

    #[test]
    fn cart_line_wire_format() {
        let line = CartLine {
            id: CartItemId::new(9),
            session_id: SessionId::new("sess-1"),
            product_id: ProductId::new(1),
            quantity: 1,
            created_at: Utc::now(),
            product: sample_product("10.00"),
        };
        let json = serde_json::to_value(&line).expect("serialize");
        assert_eq!(json["sessionId"], "sess-1");
        assert_eq!(json["productId"], 1);
        assert_eq!(json["product"]["price"], "10.00");
    }
}
