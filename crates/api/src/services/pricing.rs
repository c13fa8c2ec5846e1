//! The quote builder: cart lines in, priced quote out.
//!
//! This is the single pricing routine in the system. The quote endpoint calls
//! it for previews and checkout calls it again immediately before charging,
//! so the charged amount always matches a quote computed from the same cart
//! contents.

use thiserror::Error;
use tracing::instrument;

use customkeeps_core::{ProductId, Quote, QuoteBuilder};

use crate::catalog::Catalog;
use crate::db::RepositoryError;
use crate::models::CartLineInput;

/// Errors from building a quote.
#[derive(Debug, Error)]
pub enum PricingError {
    /// The submitted cart had no lines.
    #[error("No items")]
    EmptyCart,

    /// A line referenced a product that does not exist. The whole quote is
    /// aborted; the cart must be corrected before retrying.
    #[error("Invalid product in cart: {0}")]
    InvalidProduct(ProductId),

    /// Product lookup failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Price a cart.
///
/// Lines are priced in input order and output order matches input order, so
/// callers may rely on positional correspondence to their cart. No partial
/// result is ever produced: the first invalid product aborts the quote.
///
/// # Errors
///
/// Returns [`PricingError::EmptyCart`] for empty carts,
/// [`PricingError::InvalidProduct`] for unknown product references, and
/// [`PricingError::Repository`] if a lookup fails.
#[instrument(skip(catalog, items), fields(line_count = items.len()))]
pub async fn quote_cart(catalog: &Catalog, items: &[CartLineInput]) -> Result<Quote, PricingError> {
    if items.is_empty() {
        return Err(PricingError::EmptyCart);
    }

    let mut builder = QuoteBuilder::new();
    for line in items {
        let product = catalog
            .get(line.product_id)
            .await?
            .ok_or(PricingError::InvalidProduct(line.product_id))?;
        builder.push_line(&product, line.quantity);
    }

    Ok(builder.finish())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use crate::catalog::{STUB_MUG_ID, STUB_TEE_ID, StubCatalog};

    use super::*;

    fn stub_catalog() -> Catalog {
        Catalog::Stub(StubCatalog::new())
    }

    fn line(product_id: ProductId, quantity: u32) -> CartLineInput {
        CartLineInput {
            product_id,
            quantity,
        }
    }

    fn dec(units: i64, scale: u32) -> Decimal {
        Decimal::new(units, scale)
    }

    #[tokio::test]
    async fn test_single_tee_quote() {
        let catalog = stub_catalog();
        let quote = quote_cart(&catalog, &[line(STUB_TEE_ID, 1)]).await.unwrap();

        assert_eq!(quote.lines[0].unit_price, dec(39900, 2));
        assert_eq!(quote.summary.subtotal, dec(39900, 2));
        assert_eq!(quote.summary.shipping, dec(99, 0));
        assert_eq!(quote.summary.total, dec(49800, 2));
    }

    #[tokio::test]
    async fn test_bulk_tee_quote_hits_discount_tier() {
        let catalog = stub_catalog();
        let quote = quote_cart(&catalog, &[line(STUB_TEE_ID, 10)]).await.unwrap();

        assert_eq!(quote.lines[0].unit_price, dec(35910, 2));
        assert_eq!(quote.lines[0].line_total, dec(359_100, 2));
        assert_eq!(quote.summary.shipping, dec(149, 0));
        assert_eq!(quote.summary.total, dec(374_000, 2));
    }

    #[tokio::test]
    async fn test_empty_cart_is_rejected() {
        let catalog = stub_catalog();
        let err = quote_cart(&catalog, &[]).await.unwrap_err();
        assert!(matches!(err, PricingError::EmptyCart));
    }

    #[tokio::test]
    async fn test_unknown_product_aborts_whole_quote() {
        let catalog = stub_catalog();
        let ghost = ProductId::generate();
        let err = quote_cart(&catalog, &[line(STUB_TEE_ID, 1), line(ghost, 2)])
            .await
            .unwrap_err();
        assert!(matches!(err, PricingError::InvalidProduct(id) if id == ghost));
    }

    #[tokio::test]
    async fn test_line_order_matches_input_order() {
        let catalog = stub_catalog();
        let quote = quote_cart(&catalog, &[line(STUB_MUG_ID, 2), line(STUB_TEE_ID, 1)])
            .await
            .unwrap();

        assert_eq!(quote.lines[0].product_id, STUB_MUG_ID);
        assert_eq!(quote.lines[1].product_id, STUB_TEE_ID);
    }

    #[tokio::test]
    async fn test_quote_is_deterministic() {
        let catalog = stub_catalog();
        let cart = [line(STUB_TEE_ID, 7), line(STUB_MUG_ID, 26)];

        let first = serde_json::to_string(&quote_cart(&catalog, &cart).await.unwrap()).unwrap();
        let second = serde_json::to_string(&quote_cart(&catalog, &cart).await.unwrap()).unwrap();
        assert_eq!(first, second);
    }
}
