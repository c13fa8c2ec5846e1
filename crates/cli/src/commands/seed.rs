//! Catalog seed command.
//!
//! Replaces the entire `products` table with the three starter products.
//! Intended for fresh environments; existing catalog rows are removed.

use rust_decimal::Decimal;
use sqlx::types::Json;

use super::{CommandError, connect};

struct SeedProduct {
    sku: &'static str,
    name: &'static str,
    base_price: Decimal,
    description: &'static str,
}

const SEED_PRODUCTS: [SeedProduct; 3] = [
    SeedProduct {
        sku: "TEE-BASIC-001",
        name: "CustomKeeps Basic Tee",
        base_price: Decimal::from_parts(399, 0, 0, false, 0),
        description: "Soft cotton tee ready for your text or image.",
    },
    SeedProduct {
        sku: "MUG-WHITE-001",
        name: "Personalized Mug",
        base_price: Decimal::from_parts(299, 0, 0, false, 0),
        description: "Classic white mug for meaningful keepsakes.",
    },
    SeedProduct {
        sku: "TOTE-CANVAS-001",
        name: "Custom Canvas Tote",
        base_price: Decimal::from_parts(399, 0, 0, false, 0),
        description: "Eco-friendly tote for everyday carry.",
    },
];

/// Reset the catalog to the starter products.
pub async fn run() -> Result<(), CommandError> {
    let pool = connect().await?;

    let mut tx = pool.begin().await?;

    tracing::info!("Clearing existing catalog...");
    sqlx::query("DELETE FROM products").execute(&mut *tx).await?;

    for product in &SEED_PRODUCTS {
        sqlx::query(
            "INSERT INTO products (sku, name, base_price, description, image_url, customization)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(product.sku)
        .bind(product.name)
        .bind(product.base_price)
        .bind(product.description)
        .bind(format!("https://cdn.customkeeps.test/{}.png", product.sku))
        .bind(Json(serde_json::json!({"text": true, "image": true})))
        .execute(&mut *tx)
        .await?;

        tracing::info!(sku = product.sku, "Seeded product");
    }

    tx.commit().await?;

    tracing::info!("Seed complete: {} products", SEED_PRODUCTS.len());
    Ok(())
}
