//! Checkout and payment-intent handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use lumenparts_core::{SessionId, dollars_to_minor_units};

use crate::error::{AppError, Result};
use crate::services::checkout::{self, Checkout};
use crate::state::AppState;

/// `POST /api/checkout/{sessionId}` - total the cart and obtain a payment
/// authorization from Stripe.
///
/// The amount is computed server-side from live prices; an empty cart fails
/// with a validation error before Stripe is contacted.
pub async fn begin(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<Checkout>> {
    let session_id = SessionId::new(session_id);
    let checkout = checkout::begin_checkout(state.pool(), state.stripe(), &session_id).await?;
    Ok(Json(checkout))
}

/// Body for `POST /api/create-payment-intent`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentIntentRequest {
    /// Charge amount in dollars.
    pub amount: f64,
    pub cart_session_id: SessionId,
}

/// Response for `POST /api/create-payment-intent`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentIntentResponse {
    pub client_secret: String,
    pub payment_intent_id: String,
}

/// `POST /api/create-payment-intent` - create a payment intent for a
/// client-supplied amount.
///
/// Kept for the existing client flow, which totals the cart itself. The
/// amount is converted to cents here; Stripe validates it again.
pub async fn create_payment_intent(
    State(state): State<AppState>,
    Json(body): Json<CreatePaymentIntentRequest>,
) -> Result<Json<CreatePaymentIntentResponse>> {
    if body.amount <= 0.0 {
        return Err(AppError::Validation {
            field: "amount",
            message: "Invalid amount".to_string(),
        });
    }

    let amount_minor = dollars_to_minor_units(body.amount).ok_or(AppError::Validation {
        field: "amount",
        message: "Invalid amount".to_string(),
    })?;

    let intent = state
        .stripe()
        .create_payment_intent(amount_minor, "usd", &body.cart_session_id)
        .await?;

    Ok(Json(CreatePaymentIntentResponse {
        client_secret: intent.client_secret,
        payment_intent_id: intent.id,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_intent_request_wire_format() {
        let body: CreatePaymentIntentRequest = serde_json::from_value(serde_json::json!({
            "amount": 69.98,
            "cartSessionId": "sess-42"
        }))
        .expect("deserialize");
        assert!((body.amount - 69.98).abs() < f64::EPSILON);
        assert_eq!(body.cart_session_id.as_str(), "sess-42");
        assert_eq!(dollars_to_minor_units(body.amount), Some(6998));
    }

    #[test]
    fn payment_intent_response_wire_format() {
        let response = CreatePaymentIntentResponse {
            client_secret: "pi_1_secret".into(),
            payment_intent_id: "pi_1".into(),
        };
        let json = serde_json::to_value(&response).expect("serialize");
        assert_eq!(json["clientSecret"], "pi_1_secret");
        assert_eq!(json["paymentIntentId"], "pi_1");
    }
}
