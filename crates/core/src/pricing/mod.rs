//! The order-pricing pipeline.
//!
//! Everything in this module is pure arithmetic over `rust_decimal::Decimal`.
//! The pipeline runs identically for a quote preview and for checkout, which
//! is what guarantees a customer is charged exactly what they were shown.
//!
//! - [`discount`] - quantity-tiered discount resolution
//! - [`money`] - cent-boundary rounding and minor-unit conversion
//! - [`quote`] - line pricing, shipping, and quote assembly

pub mod discount;
pub mod money;
pub mod quote;

pub use discount::discount_for;
pub use money::{minor_units, round2};
pub use quote::{PricedLine, Quote, QuoteBuilder, QuoteSummary, shipping_fee};
