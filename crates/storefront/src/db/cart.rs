//! Cart repository.
//!
//! Cart rows are keyed by the client-generated session id. Adding a product
//! that is already in the cart folds into the existing row with an atomic
//! `ON CONFLICT .. DO UPDATE` increment, so two concurrent adds for the same
//! (session, product) pair both apply.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use lumenparts_core::{CartItemId, ProductId, SessionId};

use super::RepositoryError;
use crate::models::{CartItem, CartLine, Product};

/// Cart row joined with its product, as read from the database.
#[derive(sqlx::FromRow)]
struct CartLineRow {
    item_id: CartItemId,
    session_id: SessionId,
    quantity: i32,
    added_at: DateTime<Utc>,
    #[sqlx(flatten)]
    product: Product,
}

impl From<CartLineRow> for CartLine {
    fn from(row: CartLineRow) -> Self {
        Self {
            id: row.item_id,
            session_id: row.session_id,
            product_id: row.product.id,
            quantity: row.quantity,
            created_at: row.added_at,
            product: row.product,
        }
    }
}

const CART_LINE_SELECT: &str = "SELECT ci.id AS item_id, ci.session_id, ci.quantity, \
            ci.created_at AS added_at, \
            p.id, p.name, p.description, p.price, p.brand, p.image_url, p.category, \
            p.compatible_vehicles, p.featured, p.stock_quantity, p.tags, p.created_at \
     FROM cart_items ci \
     JOIN products p ON p.id = ci.product_id";

/// Repository for cart operations.
pub struct CartRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All cart lines for a session, joined with live product data.
    ///
    /// Rows whose product has been deleted are omitted by the inner join;
    /// an orphaned cart never causes an error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn items(&self, session_id: &SessionId) -> Result<Vec<CartLine>, RepositoryError> {
        let rows = sqlx::query_as::<_, CartLineRow>(&format!(
            "{CART_LINE_SELECT} WHERE ci.session_id = $1 ORDER BY ci.id"
        ))
        .bind(session_id)
        .fetch_all(self.pool)
        .await?;
        Ok(rows.into_iter().map(CartLine::from).collect())
    }

    /// Add a product to a session's cart.
    ///
    /// If the (session, product) pair already has a row, the quantity is
    /// incremented in place; repeated adds accumulate, they never overwrite.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the product does not exist, or
    /// `RepositoryError::Database` if a query fails.
    pub async fn add(
        &self,
        session_id: &SessionId,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<CartLine, RepositoryError> {
        let product_exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM products WHERE id = $1)")
                .bind(product_id)
                .fetch_one(self.pool)
                .await?;
        if !product_exists {
            return Err(RepositoryError::NotFound);
        }

        let item_id: CartItemId = sqlx::query_scalar(
            "INSERT INTO cart_items (session_id, product_id, quantity) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (session_id, product_id) \
             DO UPDATE SET quantity = cart_items.quantity + EXCLUDED.quantity \
             RETURNING id",
        )
        .bind(session_id)
        .bind(product_id)
        .bind(quantity)
        .fetch_one(self.pool)
        .await?;

        let row = sqlx::query_as::<_, CartLineRow>(&format!(
            "{CART_LINE_SELECT} WHERE ci.id = $1"
        ))
        .bind(item_id)
        .fetch_one(self.pool)
        .await?;
        Ok(row.into())
    }

    /// Set the quantity of a cart item.
    ///
    /// The caller validates that `quantity >= 1`; the table's check
    /// constraint backstops it. Returns `None` if the item does not exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update_quantity(
        &self,
        id: CartItemId,
        quantity: i32,
    ) -> Result<Option<CartItem>, RepositoryError> {
        let item = sqlx::query_as::<_, CartItem>(
            "UPDATE cart_items SET quantity = $2 WHERE id = $1 \
             RETURNING id, session_id, product_id, quantity, created_at",
        )
        .bind(id)
        .bind(quantity)
        .fetch_optional(self.pool)
        .await?;
        Ok(item)
    }

    /// Remove a cart item. Removing an id that is already gone is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn remove(&self, id: CartItemId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM cart_items WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(())
    }

    /// Delete every cart item for a session. Runs after a successful payment.
    ///
    /// Returns the number of rows removed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn clear(&self, session_id: &SessionId) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM cart_items WHERE session_id = $1")
            .bind(session_id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
