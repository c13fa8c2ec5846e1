//! Product catalog endpoints.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use customkeeps_core::{Product, ProductId};

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// GET /api/products - the full catalog, newest first.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = state.catalog().list().await.map_err(ApiError::Database)?;
    Ok(Json(products))
}

/// GET /api/products/{id} - a single product.
#[instrument(skip(state), fields(product_id = %id))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>> {
    let product = state
        .catalog()
        .get(id)
        .await
        .map_err(ApiError::Database)?
        .ok_or_else(|| ApiError::NotFound(format!("product {id}")))?;

    Ok(Json(product))
}
