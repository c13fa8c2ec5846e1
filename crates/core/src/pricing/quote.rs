//! Line pricing, shipping, and quote assembly.
//!
//! A [`QuoteBuilder`] prices cart lines in input order and keeps a running
//! subtotal that is re-rounded to 2 dp after every line. That running-sum
//! policy is part of the wire contract: quoting the same cart twice must
//! produce byte-identical output, and checkout recomputes the quote rather
//! than trusting anything the client sent.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Product, ProductId};

use super::discount::discount_for;
use super::money::round2;

/// Subtotal at or above this ships at the extended rate.
const SHIPPING_THRESHOLD: Decimal = Decimal::from_parts(500, 0, 0, false, 0);
/// Flat fee for subtotals under the threshold.
const SHIPPING_STANDARD: Decimal = Decimal::from_parts(99, 0, 0, false, 0);
/// Flat fee for subtotals at or above the threshold.
const SHIPPING_EXTENDED: Decimal = Decimal::from_parts(149, 0, 0, false, 0);

/// A single priced cart line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedLine {
    pub product_id: ProductId,
    pub name: String,
    pub qty: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub line_total: Decimal,
}

/// Aggregate totals for a quote, all rounded to 2 dp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummary {
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub shipping: Decimal,
    /// Always zero. Tax-jurisdiction logic is out of scope.
    #[serde(with = "rust_decimal::serde::float")]
    pub tax: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

/// A fully assembled quote: priced lines plus totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub lines: Vec<PricedLine>,
    pub summary: QuoteSummary,
}

/// Flat two-tier shipping fee as a pure function of subtotal.
///
/// Zero for empty-priced carts, 99 under 500, 149 at 500 and above.
#[must_use]
pub fn shipping_fee(subtotal: Decimal) -> Decimal {
    if subtotal <= Decimal::ZERO {
        Decimal::ZERO
    } else if subtotal < SHIPPING_THRESHOLD {
        SHIPPING_STANDARD
    } else {
        SHIPPING_EXTENDED
    }
}

/// Incremental quote construction, one cart line at a time.
#[derive(Debug, Default)]
pub struct QuoteBuilder {
    lines: Vec<PricedLine>,
    subtotal: Decimal,
}

impl QuoteBuilder {
    /// Create an empty builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines: Vec::new(),
            subtotal: Decimal::ZERO,
        }
    }

    /// Price one cart line and fold it into the running subtotal.
    ///
    /// The quantity is clamped to a minimum of 1. Lines keep their push
    /// order, so callers may rely on positional correspondence to the cart.
    pub fn push_line(&mut self, product: &Product, quantity: u32) {
        let quantity = quantity.max(1);
        let discount = discount_for(quantity);
        let unit_price = round2(product.base_price * (Decimal::ONE - discount));
        let line_total = round2(unit_price * Decimal::from(quantity));

        // Running subtotal is re-rounded after each addition.
        self.subtotal = round2(self.subtotal + line_total);

        self.lines.push(PricedLine {
            product_id: product.id,
            name: product.name.clone(),
            qty: quantity,
            unit_price,
            line_total,
        });
    }

    /// The running subtotal so far.
    #[must_use]
    pub const fn subtotal(&self) -> Decimal {
        self.subtotal
    }

    /// Whether any lines have been priced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Assemble the final quote: shipping, tax (always zero), and total.
    #[must_use]
    pub fn finish(self) -> Quote {
        let shipping = shipping_fee(self.subtotal);
        let tax = Decimal::ZERO;
        let total = round2(self.subtotal + shipping + tax);

        Quote {
            lines: self.lines,
            summary: QuoteSummary {
                subtotal: self.subtotal,
                shipping,
                tax,
                total,
            },
        }
    }
}
