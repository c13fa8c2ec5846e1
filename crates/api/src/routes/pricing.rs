//! Quote preview endpoint.

use axum::{Json, extract::State};
use serde::Deserialize;
use tracing::instrument;

use customkeeps_core::Quote;

use crate::error::Result;
use crate::models::CartLineInput;
use crate::services::pricing::quote_cart;
use crate::state::AppState;

/// Request body for POST /api/pricing/quote.
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    #[serde(default)]
    pub items: Vec<CartLineInput>,
}

/// POST /api/pricing/quote - price a cart without charging it.
#[instrument(skip(state, request), fields(line_count = request.items.len()))]
pub async fn quote(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<Quote>> {
    let quote = quote_cart(state.catalog(), &request.items).await?;
    Ok(Json(quote))
}
