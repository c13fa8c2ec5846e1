//! Catalog product model.
//!
//! Products are read-only to the pricing pipeline: the catalog (database or
//! stub) is the source of truth, and `base_price` is the only field the
//! pricing arithmetic consumes. Client-submitted prices are never trusted.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Product {
    pub id: ProductId,
    /// Stock keeping unit, unique per product.
    pub sku: String,
    pub name: String,
    /// Non-negative amount in natural currency units (e.g. 399 means 399.00).
    #[serde(with = "rust_decimal::serde::float")]
    pub base_price: Decimal,
    pub description: String,
    pub image_url: String,
    /// Which customization inputs the product supports, e.g. `{"text": true, "image": true}`.
    pub customization: serde_json::Value,
    pub created_at: DateTime<Utc>,
}
