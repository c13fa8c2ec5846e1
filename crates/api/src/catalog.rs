//! Product catalog sources.
//!
//! The pricing pipeline resolves products through a [`Catalog`], selected by
//! configuration:
//!
//! - [`PgCatalog`] reads from `PostgreSQL`, fronted by a `moka` cache
//!   (5-minute TTL) so hot products skip the database.
//! - [`StubCatalog`] serves a fixed in-memory catalog for local development
//!   and tests. This replaces the old implicit mock-data fallback with an
//!   explicit data source: no database required, no silent substitution.

use std::time::Duration;

use chrono::{TimeDelta, Utc};
use moka::future::Cache;
use sqlx::PgPool;
use tracing::{debug, instrument};
use uuid::Uuid;

use customkeeps_core::{Product, ProductId};

use crate::config::{ApiConfig, CatalogSource};
use crate::db::{ProductRepository, RepositoryError};

/// Stable IDs for the stub catalog, so saved carts survive restarts.
pub const STUB_TEE_ID: ProductId =
    ProductId::new(Uuid::from_u128(0x0be5_1f6a_9c41_4d2e_8a37_2f5b_1c88_9e01));
pub const STUB_MUG_ID: ProductId =
    ProductId::new(Uuid::from_u128(0x0be5_1f6a_9c41_4d2e_8a37_2f5b_1c88_9e02));
pub const STUB_TOTE_ID: ProductId =
    ProductId::new(Uuid::from_u128(0x0be5_1f6a_9c41_4d2e_8a37_2f5b_1c88_9e03));

/// A product-lookup collaborator.
#[derive(Clone)]
pub enum Catalog {
    Postgres(PgCatalog),
    Stub(StubCatalog),
}

impl Catalog {
    /// Build the catalog named by `CATALOG_SOURCE`.
    #[must_use]
    pub fn from_config(config: &ApiConfig, pool: PgPool) -> Self {
        match config.catalog_source {
            CatalogSource::Database => Self::Postgres(PgCatalog::new(pool)),
            CatalogSource::Stub => Self::Stub(StubCatalog::new()),
        }
    }

    /// Look up a product by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the database read fails.
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        match self {
            Self::Postgres(catalog) => catalog.get(id).await,
            Self::Stub(catalog) => Ok(catalog.get(id)),
        }
    }

    /// List the full catalog, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the database read fails.
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        match self {
            Self::Postgres(catalog) => catalog.list().await,
            Self::Stub(catalog) => Ok(catalog.list()),
        }
    }
}

/// Database-backed catalog with a read-through cache for lookups.
#[derive(Clone)]
pub struct PgCatalog {
    pool: PgPool,
    cache: Cache<ProductId, Product>,
}

impl PgCatalog {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();

        Self { pool, cache }
    }

    #[instrument(skip(self), fields(product_id = %id))]
    async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        if let Some(product) = self.cache.get(&id).await {
            debug!("Cache hit for product");
            return Ok(Some(product));
        }

        let product = ProductRepository::new(&self.pool).get(id).await?;
        if let Some(ref product) = product {
            self.cache.insert(id, product.clone()).await;
        }

        Ok(product)
    }

    async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        ProductRepository::new(&self.pool).list().await
    }
}

/// Fixed in-memory catalog for local development and tests.
#[derive(Clone)]
pub struct StubCatalog {
    products: Vec<Product>,
}

impl Default for StubCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl StubCatalog {
    #[must_use]
    pub fn new() -> Self {
        let now = Utc::now();
        let stub = |id: ProductId, sku: &str, name: &str, price: i64, description: &str, age_minutes: i64| Product {
            id,
            sku: sku.to_string(),
            name: name.to_string(),
            base_price: rust_decimal::Decimal::new(price, 0),
            description: description.to_string(),
            image_url: format!("https://cdn.customkeeps.test/{sku}.png"),
            customization: serde_json::json!({"text": true, "image": true}),
            created_at: now - TimeDelta::minutes(age_minutes),
        };

        // Newest first, matching the database ordering.
        Self {
            products: vec![
                stub(
                    STUB_TEE_ID,
                    "TEE-BASIC-001",
                    "CustomKeeps Basic Tee",
                    399,
                    "Soft cotton tee ready for your text or image.",
                    1,
                ),
                stub(
                    STUB_MUG_ID,
                    "MUG-WHITE-001",
                    "Personalized Mug",
                    299,
                    "Classic white mug for meaningful keepsakes.",
                    2,
                ),
                stub(
                    STUB_TOTE_ID,
                    "TOTE-CANVAS-001",
                    "Custom Canvas Tote",
                    399,
                    "Eco-friendly tote for everyday carry.",
                    3,
                ),
            ],
        }
    }

    fn get(&self, id: ProductId) -> Option<Product> {
        self.products.iter().find(|p| p.id == id).cloned()
    }

    fn list(&self) -> Vec<Product> {
        self.products.clone()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_catalog_lookup() {
        let catalog = StubCatalog::new();
        let tee = catalog.get(STUB_TEE_ID).unwrap();
        assert_eq!(tee.sku, "TEE-BASIC-001");
        assert_eq!(tee.base_price, rust_decimal::Decimal::new(399, 0));
    }

    #[test]
    fn test_stub_catalog_unknown_id() {
        let catalog = StubCatalog::new();
        assert!(catalog.get(ProductId::generate()).is_none());
    }

    #[test]
    fn test_stub_catalog_lists_newest_first() {
        let catalog = StubCatalog::new();
        let products = catalog.list();
        assert_eq!(products.len(), 3);
        assert!(products[0].created_at > products[1].created_at);
        assert!(products[1].created_at > products[2].created_at);
    }
}
