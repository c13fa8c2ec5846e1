//! Stripe payment-gateway client.
//!
//! Talks to the Stripe REST API directly with `reqwest` (form-encoded, like
//! the API expects). Every charge is a payment intent created with
//! `confirm=true`, so the gateway's verdict comes back in a single call.
//!
//! A card decline on confirm is NOT a gateway fault: the call completed and
//! produced an intent with a non-succeeded status, which checkout records
//! like any other outcome. Only transport failures and plain API errors
//! surface as [`PaymentError`].

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;
use tracing::instrument;

const STRIPE_API_BASE: &str = "https://api.stripe.com/v1";

/// Sandbox payment-method token that confirms successfully.
pub const PAYMENT_METHOD_SUCCESS: &str = "pm_card_visa";
/// Sandbox payment-method token that is declined on confirm.
pub const PAYMENT_METHOD_DECLINE: &str = "pm_card_chargeDeclined";

/// Errors that can occur when charging a payment.
#[derive(Debug, Error)]
pub enum PaymentError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The gateway rejected the request outright (no intent produced).
    #[error("Payment gateway error: {0}")]
    Gateway(String),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The slice of a payment intent this core stores and returns.
///
/// `amount` and `currency` are authoritative: they are persisted verbatim
/// rather than echoed from our own request.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub status: String,
    pub amount: i64,
    pub currency: String,
}

#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    error: StripeErrorDetail,
}

#[derive(Debug, Deserialize)]
struct StripeErrorDetail {
    message: Option<String>,
    code: Option<String>,
    payment_intent: Option<PaymentIntent>,
}

/// A charge to submit, amounts in minor units (cents).
#[derive(Debug)]
pub struct ChargeRequest<'a> {
    pub amount: i64,
    pub currency: &'a str,
    pub payment_method: &'a str,
    pub description: &'a str,
    /// JSON snapshot of the submitted cart, stored as intent metadata.
    pub metadata_items: &'a str,
}

/// Client for the Stripe payment-intents API.
#[derive(Clone)]
pub struct StripeGateway {
    inner: Arc<StripeGatewayInner>,
}

struct StripeGatewayInner {
    client: reqwest::Client,
    secret_key: SecretString,
    endpoint: String,
}

impl StripeGateway {
    /// Create a new gateway client.
    #[must_use]
    pub fn new(secret_key: SecretString) -> Self {
        Self::with_endpoint(secret_key, STRIPE_API_BASE)
    }

    /// Create a client against a non-default endpoint (sandbox proxies, tests).
    #[must_use]
    pub fn with_endpoint(secret_key: SecretString, endpoint: &str) -> Self {
        Self {
            inner: Arc::new(StripeGatewayInner {
                client: reqwest::Client::new(),
                secret_key,
                endpoint: endpoint.trim_end_matches('/').to_string(),
            }),
        }
    }

    /// Create and immediately confirm a payment intent.
    ///
    /// No retry, timeout wrapper, or compensation: a failure propagates as a
    /// single synchronous error to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentError::Http`] on transport failure,
    /// [`PaymentError::Gateway`] when the API rejects the request, and
    /// [`PaymentError::Parse`] on an unreadable response.
    #[instrument(skip(self, charge), fields(amount = charge.amount, currency = charge.currency))]
    pub async fn create_payment_intent(
        &self,
        charge: &ChargeRequest<'_>,
    ) -> Result<PaymentIntent, PaymentError> {
        let params = [
            ("amount", charge.amount.to_string()),
            ("currency", charge.currency.to_string()),
            ("confirm", "true".to_string()),
            ("payment_method", charge.payment_method.to_string()),
            ("automatic_payment_methods[enabled]", "true".to_string()),
            (
                "automatic_payment_methods[allow_redirects]",
                "never".to_string(),
            ),
            ("description", charge.description.to_string()),
            ("metadata[items]", charge.metadata_items.to_string()),
        ];

        let response = self
            .inner
            .client
            .post(format!("{}/payment_intents", self.inner.endpoint))
            .bearer_auth(self.inner.secret_key.expose_secret())
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        if status.is_success() {
            return Ok(serde_json::from_str(&response_text)?);
        }

        let body: StripeErrorBody = match serde_json::from_str(&response_text) {
            Ok(body) => body,
            Err(e) => {
                tracing::error!(
                    status = %status,
                    body = %response_text.chars().take(500).collect::<String>(),
                    "Unreadable error response from payment gateway"
                );
                return Err(PaymentError::Parse(e));
            }
        };

        // A declined confirm still carries the intent; surface it as the
        // outcome rather than an error.
        if let Some(intent) = body.error.payment_intent {
            tracing::warn!(
                intent_id = %intent.id,
                intent_status = %intent.status,
                code = body.error.code.as_deref().unwrap_or("unknown"),
                "Payment declined by gateway"
            );
            return Ok(intent);
        }

        Err(PaymentError::Gateway(
            body.error
                .message
                .unwrap_or_else(|| format!("HTTP {status} from payment gateway")),
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_intent_parses_success_response() {
        let json = r#"{
            "id": "pi_3Abc",
            "object": "payment_intent",
            "status": "succeeded",
            "amount": 49800,
            "currency": "php"
        }"#;
        let intent: PaymentIntent = serde_json::from_str(json).unwrap();
        assert_eq!(intent.id, "pi_3Abc");
        assert_eq!(intent.status, "succeeded");
        assert_eq!(intent.amount, 49800);
    }

    #[test]
    fn test_decline_error_body_carries_intent() {
        let json = r#"{
            "error": {
                "code": "card_declined",
                "message": "Your card was declined.",
                "payment_intent": {
                    "id": "pi_3Declined",
                    "status": "requires_payment_method",
                    "amount": 49800,
                    "currency": "php"
                }
            }
        }"#;
        let body: StripeErrorBody = serde_json::from_str(json).unwrap();
        let intent = body.error.payment_intent.unwrap();
        assert_eq!(intent.id, "pi_3Declined");
        assert_eq!(intent.status, "requires_payment_method");
    }

    #[test]
    fn test_plain_error_body_has_no_intent() {
        let json = r#"{"error": {"message": "Invalid API Key provided", "type": "invalid_request_error"}}"#;
        let body: StripeErrorBody = serde_json::from_str(json).unwrap();
        assert!(body.error.payment_intent.is_none());
        assert_eq!(body.error.message.unwrap(), "Invalid API Key provided");
    }

    #[test]
    fn test_endpoint_trailing_slash_is_trimmed() {
        let gateway =
            StripeGateway::with_endpoint(SecretString::from("sk_test_x"), "http://localhost:12111/");
        assert_eq!(gateway.inner.endpoint, "http://localhost:12111");
    }
}
