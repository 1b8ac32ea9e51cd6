//! Users repository.

use async_trait::async_trait;
use mockall::automock;
use sqlx::{FromRow, Postgres, Row, postgres::PgRow, query, query_as};

use crate::{
    database::Db,
    domain::users::models::{NewUser, User},
};

const FIND_USER_BY_USERNAME_SQL: &str = include_str!("sql/find_user_by_username.sql");
const CREATE_USER_SQL: &str = include_str!("sql/create_user.sql");
const CREATE_CART_SQL: &str = include_str!("sql/create_cart.sql");

/// Store capability for user accounts.
#[automock]
#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// Look up a user by their unique username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, sqlx::Error>;

    /// Create a user together with their empty cart.
    async fn create(&self, user: NewUser) -> Result<User, sqlx::Error>;
}

#[derive(Debug, Clone)]
pub struct PgUsersRepository {
    db: Db,
}

impl PgUsersRepository {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UsersRepository for PgUsersRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, sqlx::Error> {
        query_as::<Postgres, User>(FIND_USER_BY_USERNAME_SQL)
            .bind(username)
            .fetch_optional(self.db.pool())
            .await
    }

    async fn create(&self, user: NewUser) -> Result<User, sqlx::Error> {
        let mut tx = self.db.begin().await?;

        let created = query_as::<Postgres, User>(CREATE_USER_SQL)
            .bind(&user.username)
            .fetch_one(&mut *tx)
            .await?;

        query(CREATE_CART_SQL)
            .bind(created.id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(created)
    }
}

impl<'r> FromRow<'r, PgRow> for User {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            username: row.try_get("username")?,
        })
    }
}
