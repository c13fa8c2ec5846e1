//! Recent-orders endpoint.

use axum::{Json, extract::State};
use tracing::instrument;

use crate::db::OrderRepository;
use crate::error::{ApiError, Result};
use crate::models::Order;
use crate::state::AppState;

/// How many orders the listing returns. There is no pagination.
const RECENT_ORDER_LIMIT: i64 = 20;

/// GET /api/orders - the most recent orders, newest first.
#[instrument(skip(state))]
pub async fn recent(State(state): State<AppState>) -> Result<Json<Vec<Order>>> {
    let orders = OrderRepository::new(state.pool())
        .list_recent(RECENT_ORDER_LIMIT)
        .await
        .map_err(ApiError::Database)?;

    Ok(Json(orders))
}
