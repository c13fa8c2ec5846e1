//! HTTP route handlers.

pub mod checkout;
pub mod orders;
pub mod pricing;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Build the `/api` router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::list))
        .route("/products/{id}", get(products::show))
        .route("/pricing/quote", post(pricing::quote))
        .route("/checkout/pay", post(checkout::pay))
        .route("/orders", get(orders::recent))
}
