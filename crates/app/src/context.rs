//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        carts::{CartsRepository, CartsService, DefaultCartsService, PgCartsRepository},
        items::{DefaultItemsService, ItemsRepository, ItemsService, PgItemsRepository},
        orders::{DefaultOrdersService, OrdersService, PgOrdersRepository},
        users::{DefaultUsersService, PgUsersRepository, UsersRepository, UsersService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub users: Arc<dyn UsersService>,
    pub items: Arc<dyn ItemsService>,
    pub carts: Arc<dyn CartsService>,
    pub orders: Arc<dyn OrdersService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool);

        let users: Arc<dyn UsersRepository> = Arc::new(PgUsersRepository::new(db.clone()));
        let items: Arc<dyn ItemsRepository> = Arc::new(PgItemsRepository::new(db.clone()));
        let carts: Arc<dyn CartsRepository> = Arc::new(PgCartsRepository::new(db.clone()));
        let orders = Arc::new(PgOrdersRepository::new(db));

        Ok(Self {
            users: Arc::new(DefaultUsersService::new(users.clone())),
            items: Arc::new(DefaultItemsService::new(items.clone())),
            carts: Arc::new(DefaultCartsService::new(
                users.clone(),
                items,
                carts.clone(),
            )),
            orders: Arc::new(DefaultOrdersService::new(users, carts, orders)),
        })
    }
}
