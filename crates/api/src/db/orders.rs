//! Order repository.
//!
//! Orders are insert-only. The line snapshot, summary, payment outcome, and
//! customer address are stored as JSONB documents; nothing in this core ever
//! updates or deletes a row.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::types::Json;

use customkeeps_core::{OrderId, PricedLine, QuoteSummary};

use super::RepositoryError;
use crate::models::order::{CustomerAddress, NewOrder, Order, PaymentOutcome};

const SELECT_COLUMNS: &str = "id, lines, summary, payment, customer, created_at";

/// Row shape for the `orders` table.
#[derive(sqlx::FromRow)]
struct OrderRow {
    id: OrderId,
    lines: Json<Vec<PricedLine>>,
    summary: Json<QuoteSummary>,
    payment: Json<PaymentOutcome>,
    customer: Json<CustomerAddress>,
    created_at: DateTime<Utc>,
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        Self {
            id: row.id,
            lines: row.lines.0,
            summary: row.summary.0,
            payment: row.payment.0,
            customer: row.customer.0,
            created_at: row.created_at,
        }
    }
}

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Persist a new order and return it with its generated id and timestamp.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn insert(&self, order: NewOrder) -> Result<Order, RepositoryError> {
        let row = sqlx::query_as::<_, OrderRow>(&format!(
            "INSERT INTO orders (lines, summary, payment, customer)
             VALUES ($1, $2, $3, $4)
             RETURNING {SELECT_COLUMNS}"
        ))
        .bind(Json(&order.lines))
        .bind(Json(&order.summary))
        .bind(Json(&order.payment))
        .bind(Json(&order.customer))
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }

    /// List the most recent orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_recent(&self, limit: i64) -> Result<Vec<Order>, RepositoryError> {
        let rows = sqlx::query_as::<_, OrderRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM orders ORDER BY created_at DESC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Order::from).collect())
    }
}
