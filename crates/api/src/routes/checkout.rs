//! Checkout endpoint: quote, charge, persist.
//!
//! The cart is re-priced server-side immediately before charging, so the
//! charged amount is always derived from current catalog prices rather than
//! anything the client claims. The order is persisted for every completed
//! gateway call, including declines; the payment status on the order tells
//! the two apart.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use customkeeps_core::{OrderId, minor_units};

use crate::db::OrderRepository;
use crate::error::{ApiError, Result};
use crate::models::{CartLineInput, CustomerAddress, NewOrder, PaymentOutcome};
use crate::services::pricing::quote_cart;
use crate::services::stripe::{
    ChargeRequest, PAYMENT_METHOD_DECLINE, PAYMENT_METHOD_SUCCESS,
};
use crate::state::AppState;

/// Which sandbox payment method to confirm with.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestScenario {
    #[default]
    Success,
    Decline,
}

impl TestScenario {
    const fn payment_method(self) -> &'static str {
        match self {
            Self::Success => PAYMENT_METHOD_SUCCESS,
            Self::Decline => PAYMENT_METHOD_DECLINE,
        }
    }
}

/// Request body for POST /api/checkout/pay.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    #[serde(default)]
    pub items: Vec<CartLineInput>,
    #[serde(default)]
    pub customer: CustomerAddress,
    #[serde(default)]
    pub test_scenario: TestScenario,
}

/// Response body: the gateway verdict plus the persisted order id.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub status: String,
    pub id: String,
    pub amount: i64,
    pub currency: String,
    pub order_id: OrderId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// POST /api/checkout/pay - charge a cart and record the order.
#[instrument(skip(state, request), fields(line_count = request.items.len()))]
pub async fn pay(
    State(state): State<AppState>,
    Json(request): Json<CheckoutRequest>,
) -> Result<Json<CheckoutResponse>> {
    let gateway = state.payments().ok_or(ApiError::PaymentNotConfigured)?;

    let quote = quote_cart(state.catalog(), &request.items).await?;
    let amount = minor_units(quote.summary.total)
        .ok_or_else(|| ApiError::Internal("order total out of range".to_string()))?;

    let metadata_items = serde_json::to_string(&request.items)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    let intent = gateway
        .create_payment_intent(&ChargeRequest {
            amount,
            currency: &state.config().currency,
            payment_method: request.test_scenario.payment_method(),
            description: "CustomKeeps order (test mode)",
            metadata_items: &metadata_items,
        })
        .await?;

    // The gateway call completed, so the order is recorded whatever the
    // verdict was. amount and currency come from the intent, not our request.
    let order = OrderRepository::new(state.pool())
        .insert(NewOrder {
            lines: quote.lines,
            summary: quote.summary,
            payment: PaymentOutcome {
                provider: "stripe".to_string(),
                intent_id: intent.id.clone(),
                status: intent.status.clone(),
                amount: intent.amount,
                currency: intent.currency.clone(),
            },
            customer: request.customer,
        })
        .await?;

    let error = (intent.status != "succeeded").then(|| "Payment was not completed".to_string());

    Ok(Json(CheckoutResponse {
        status: intent.status,
        id: intent.id,
        amount: intent.amount,
        currency: intent.currency,
        order_id: order.id,
        error,
    }))
}
