//! Order records: priced-line snapshot, totals, payment outcome, and the
//! customer shipping address.
//!
//! An order is written exactly once per successful checkout call and never
//! updated or deleted afterwards. Checkout is not idempotent: identical carts
//! submitted twice produce two independent orders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use customkeeps_core::{OrderId, PricedLine, QuoteSummary};

/// Customer shipping-address snapshot. Missing fields persist as empty
/// strings, matching the wire contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerAddress {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub country: String,
}

/// The payment gateway's verdict, stored verbatim.
///
/// `amount` is in minor units (cents) and, together with `currency`, comes
/// from the gateway response rather than our own arithmetic - it is the
/// authoritative record of what was charged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOutcome {
    pub provider: String,
    pub intent_id: String,
    pub status: String,
    pub amount: i64,
    pub currency: String,
}

/// An order about to be persisted (no id or timestamp yet).
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub lines: Vec<PricedLine>,
    pub summary: QuoteSummary,
    pub payment: PaymentOutcome,
    pub customer: CustomerAddress,
}

/// A persisted order as returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub lines: Vec<PricedLine>,
    pub summary: QuoteSummary,
    pub payment: PaymentOutcome,
    pub customer: CustomerAddress,
    pub created_at: DateTime<Utc>,
}
