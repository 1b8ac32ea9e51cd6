//! Orders repository.

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use sqlx::{FromRow, Postgres, Row, postgres::PgRow, query, query_as};

use crate::{
    database::Db,
    domain::{carts::models::Cart, items::models::Item, orders::models::Order},
};

const CREATE_ORDER_SQL: &str = include_str!("sql/create_order.sql");
const INSERT_ORDER_ITEM_SQL: &str = include_str!("sql/insert_order_item.sql");
const ORDERS_FOR_USER_SQL: &str = include_str!("sql/orders_for_user.sql");
const ORDER_ITEMS_FOR_ORDER_SQL: &str = include_str!("sql/order_items_for_order.sql");

/// Store capability for submitted orders.
#[automock]
#[async_trait]
pub trait OrdersRepository: Send + Sync {
    /// Persist a cart snapshot as a new order for the given user.
    async fn insert(&self, user_id: i64, cart: &Cart) -> Result<Order, sqlx::Error>;

    /// A user's order history, newest first.
    async fn find_by_user(&self, user_id: i64) -> Result<Vec<Order>, sqlx::Error>;
}

#[derive(Debug, Clone)]
pub struct PgOrdersRepository {
    db: Db,
}

impl PgOrdersRepository {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrdersRepository for PgOrdersRepository {
    async fn insert(&self, user_id: i64, cart: &Cart) -> Result<Order, sqlx::Error> {
        let mut tx = self.db.begin().await?;

        let row = query(CREATE_ORDER_SQL)
            .bind(user_id)
            .bind(cart.total)
            .fetch_one(&mut *tx)
            .await?;

        let id: i64 = row.try_get("id")?;
        let submitted_at = row.try_get::<SqlxTimestamp, _>("submitted_at")?.to_jiff();

        for (position, item) in (0_i64..).zip(&cart.items) {
            query(INSERT_ORDER_ITEM_SQL)
                .bind(id)
                .bind(item.id)
                .bind(position)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(Order {
            id,
            user_id,
            items: cart.items.clone(),
            total: cart.total,
            submitted_at,
        })
    }

    async fn find_by_user(&self, user_id: i64) -> Result<Vec<Order>, sqlx::Error> {
        let mut tx = self.db.begin().await?;

        let mut orders = query_as::<Postgres, Order>(ORDERS_FOR_USER_SQL)
            .bind(user_id)
            .fetch_all(&mut *tx)
            .await?;

        for order in &mut orders {
            order.items = query_as::<Postgres, Item>(ORDER_ITEMS_FOR_ORDER_SQL)
                .bind(order.id)
                .fetch_all(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(orders)
    }
}

impl<'r> FromRow<'r, PgRow> for Order {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            items: Vec::new(),
            total: row.try_get("total")?,
            submitted_at: row.try_get::<SqlxTimestamp, _>("submitted_at")?.to_jiff(),
        })
    }
}
