//! Stripe API client for payment-intent creation.
//!
//! Stripe's REST API takes form-encoded requests and answers with JSON. Only
//! the fields checkout needs are modelled; Stripe itself is the system of
//! record for payment state, and nothing is persisted locally.

use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::Deserialize;
use thiserror::Error;

use lumenparts_core::SessionId;

use crate::config::StripeConfig;

/// Errors that can occur when talking to Stripe.
#[derive(Debug, Error)]
pub enum StripeError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Stripe returned an error response.
    #[error("Stripe API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Failed to build the client or parse a response.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// A payment intent returned by Stripe.
///
/// The `client_secret` is handed to the browser, which completes payment
/// through Stripe's own hosted UI.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
    #[serde(default)]
    pub status: String,
}

/// Error envelope Stripe wraps failures in.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: String,
}

/// Client for the Stripe payment API.
#[derive(Clone)]
pub struct StripeClient {
    client: reqwest::Client,
    api_base: String,
}

impl StripeClient {
    /// Create a new Stripe client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &StripeConfig) -> Result<Self, StripeError> {
        let mut headers = HeaderMap::new();

        let auth_value = format!("Bearer {}", config.secret_key.expose_secret());
        let mut auth_header = HeaderValue::from_str(&auth_value)
            .map_err(|e| StripeError::Parse(format!("Invalid secret key format: {e}")))?;
        auth_header.set_sensitive(true);
        headers.insert("Authorization", auth_header);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            api_base: config.api_base.clone(),
        })
    }

    /// Create a payment intent for `amount_minor` units of `currency`.
    ///
    /// The cart session id travels along as metadata so the charge can be
    /// correlated with the cart that produced it. No idempotency key is
    /// sent: two calls create two independent intents.
    ///
    /// # Errors
    ///
    /// Returns `StripeError::Api` for rejected requests (including
    /// non-positive amounts) and `StripeError::Http` for transport failures.
    /// Nothing is retried.
    pub async fn create_payment_intent(
        &self,
        amount_minor: i64,
        currency: &str,
        cart_session_id: &SessionId,
    ) -> Result<PaymentIntent, StripeError> {
        let url = format!("{}/v1/payment_intents", self.api_base);
        let params = payment_intent_params(amount_minor, currency, cart_session_id);

        let response = self.client.post(&url).form(&params).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(parse_api_error(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(error = %e, "Failed to parse Stripe payment intent response");
            StripeError::Parse(e.to_string())
        })
    }
}

/// Form parameters for a payment-intent create call.
fn payment_intent_params(
    amount_minor: i64,
    currency: &str,
    cart_session_id: &SessionId,
) -> Vec<(&'static str, String)> {
    vec![
        ("amount", amount_minor.to_string()),
        ("currency", currency.to_owned()),
        // camelCase key; this is what shows up in the Stripe dashboard
        ("metadata[cartSessionId]", cart_session_id.to_string()),
        ("automatic_payment_methods[enabled]", "true".to_owned()),
    ]
}

/// Map a non-success Stripe response to an error, passing the message
/// through to the caller.
fn parse_api_error(status: u16, body: &str) -> StripeError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .map_or_else(|_| body.chars().take(200).collect(), |b| b.error.message);
    StripeError::Api { status, message }
}
