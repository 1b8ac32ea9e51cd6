//! Items repository.

use async_trait::async_trait;
use mockall::automock;
use sqlx::{FromRow, Postgres, Row, postgres::PgRow, query_as};

use crate::{database::Db, domain::items::models::Item};

const GET_ITEM_SQL: &str = include_str!("sql/get_item.sql");
const LIST_ITEMS_SQL: &str = include_str!("sql/list_items.sql");
const FIND_ITEMS_BY_NAME_SQL: &str = include_str!("sql/find_items_by_name.sql");

/// Store capability for the item catalog.
#[automock]
#[async_trait]
pub trait ItemsRepository: Send + Sync {
    /// Look up a single catalog item by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Item>, sqlx::Error>;

    /// All catalog items sharing the given name.
    async fn find_by_name(&self, name: &str) -> Result<Vec<Item>, sqlx::Error>;

    /// The full catalog.
    async fn list(&self) -> Result<Vec<Item>, sqlx::Error>;
}

#[derive(Debug, Clone)]
pub struct PgItemsRepository {
    db: Db,
}

impl PgItemsRepository {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ItemsRepository for PgItemsRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Item>, sqlx::Error> {
        query_as::<Postgres, Item>(GET_ITEM_SQL)
            .bind(id)
            .fetch_optional(self.db.pool())
            .await
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Item>, sqlx::Error> {
        query_as::<Postgres, Item>(FIND_ITEMS_BY_NAME_SQL)
            .bind(name)
            .fetch_all(self.db.pool())
            .await
    }

    async fn list(&self) -> Result<Vec<Item>, sqlx::Error> {
        query_as::<Postgres, Item>(LIST_ITEMS_SQL)
            .fetch_all(self.db.pool())
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for Item {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            price: row.try_get("price")?,
            description: row.try_get("description")?,
        })
    }
}
