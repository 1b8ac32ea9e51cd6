//! Carts repository.

use async_trait::async_trait;
use mockall::automock;
use sqlx::{FromRow, Postgres, Row, postgres::PgRow, query, query_as};

use crate::{
    database::Db,
    domain::{carts::models::Cart, items::models::Item},
};

const GET_CART_SQL: &str = include_str!("sql/get_cart.sql");
const GET_CART_ITEMS_SQL: &str = include_str!("sql/get_cart_items.sql");
const DELETE_CART_ITEMS_SQL: &str = include_str!("sql/delete_cart_items.sql");
const INSERT_CART_ITEM_SQL: &str = include_str!("sql/insert_cart_item.sql");
const UPDATE_CART_TOTAL_SQL: &str = include_str!("sql/update_cart_total.sql");

/// Store capability for per-user carts.
#[automock]
#[async_trait]
pub trait CartsRepository: Send + Sync {
    /// Load a user's cart with its items in insertion order.
    async fn find_by_user(&self, user_id: i64) -> Result<Option<Cart>, sqlx::Error>;

    /// Persist the cart: replaces the stored item list and total.
    async fn save(&self, cart: &Cart) -> Result<(), sqlx::Error>;
}

#[derive(Debug, Clone)]
pub struct PgCartsRepository {
    db: Db,
}

impl PgCartsRepository {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CartsRepository for PgCartsRepository {
    async fn find_by_user(&self, user_id: i64) -> Result<Option<Cart>, sqlx::Error> {
        let mut tx = self.db.begin().await?;

        let Some(mut cart) = query_as::<Postgres, Cart>(GET_CART_SQL)
            .bind(user_id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let items = query_as::<Postgres, Item>(GET_CART_ITEMS_SQL)
            .bind(cart.id)
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;

        cart.items = items;

        Ok(Some(cart))
    }

    async fn save(&self, cart: &Cart) -> Result<(), sqlx::Error> {
        let mut tx = self.db.begin().await?;

        query(DELETE_CART_ITEMS_SQL)
            .bind(cart.id)
            .execute(&mut *tx)
            .await?;

        for (position, item) in (0_i64..).zip(&cart.items) {
            query(INSERT_CART_ITEM_SQL)
                .bind(cart.id)
                .bind(item.id)
                .bind(position)
                .execute(&mut *tx)
                .await?;
        }

        query(UPDATE_CART_TOTAL_SQL)
            .bind(cart.total)
            .bind(cart.id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}

impl<'r> FromRow<'r, PgRow> for Cart {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            items: Vec::new(),
            total: row.try_get("total")?,
        })
    }
}
