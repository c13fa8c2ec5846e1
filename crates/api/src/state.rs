//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::catalog::Catalog;
use crate::config::ApiConfig;
use crate::services::stripe::StripeGateway;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like database connections and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    pool: PgPool,
    catalog: Catalog,
    payments: Option<StripeGateway>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// The catalog source is selected by configuration, and the payment
    /// gateway is only constructed when a Stripe key is configured.
    #[must_use]
    pub fn new(config: ApiConfig, pool: PgPool) -> Self {
        let catalog = Catalog::from_config(&config, pool.clone());
        let payments = config
            .stripe_secret_key
            .as_ref()
            .map(|key| StripeGateway::new(key.clone()));

        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                catalog,
                payments,
            }),
        }
    }

    /// Get a reference to the API configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get the payment gateway, if one is configured.
    #[must_use]
    pub fn payments(&self) -> Option<&StripeGateway> {
        self.inner.payments.as_ref()
    }
}
