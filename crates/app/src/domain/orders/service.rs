//! Orders service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::domain::{
    carts::repository::CartsRepository,
    orders::{errors::OrdersServiceError, models::Order, repository::OrdersRepository},
    users::repository::UsersRepository,
};

#[derive(Clone)]
pub struct DefaultOrdersService {
    users: Arc<dyn UsersRepository>,
    carts: Arc<dyn CartsRepository>,
    orders: Arc<dyn OrdersRepository>,
}

impl DefaultOrdersService {
    #[must_use]
    pub fn new(
        users: Arc<dyn UsersRepository>,
        carts: Arc<dyn CartsRepository>,
        orders: Arc<dyn OrdersRepository>,
    ) -> Self {
        Self {
            users,
            carts,
            orders,
        }
    }
}

#[async_trait]
impl OrdersService for DefaultOrdersService {
    async fn submit(&self, username: &str) -> Result<Order, OrdersServiceError> {
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or(OrdersServiceError::UserNotFound)?;

        let mut cart = self
            .carts
            .find_by_user(user.id)
            .await?
            .ok_or(OrdersServiceError::MissingCart)?;

        let order = self.orders.insert(user.id, &cart).await?;

        // The cart is consumed by submission.
        cart.clear();
        self.carts.save(&cart).await?;

        Ok(order)
    }

    async fn history(&self, username: &str) -> Result<Vec<Order>, OrdersServiceError> {
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or(OrdersServiceError::UserNotFound)?;

        let orders = self.orders.find_by_user(user.id).await?;

        Ok(orders)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Snapshot the user's cart into a new order and empty the cart.
    async fn submit(&self, username: &str) -> Result<Order, OrdersServiceError>;

    /// The user's submitted orders, newest first.
    async fn history(&self, username: &str) -> Result<Vec<Order>, OrdersServiceError>;
}
