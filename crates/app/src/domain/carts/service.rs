//! Carts service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::domain::{
    carts::{
        errors::CartsServiceError,
        models::{Cart, ModifyCartRequest},
        repository::CartsRepository,
    },
    items::{models::Item, repository::ItemsRepository},
    users::repository::UsersRepository,
};

#[derive(Clone)]
pub struct DefaultCartsService {
    users: Arc<dyn UsersRepository>,
    items: Arc<dyn ItemsRepository>,
    carts: Arc<dyn CartsRepository>,
}

impl DefaultCartsService {
    #[must_use]
    pub fn new(
        users: Arc<dyn UsersRepository>,
        items: Arc<dyn ItemsRepository>,
        carts: Arc<dyn CartsRepository>,
    ) -> Self {
        Self {
            users,
            items,
            carts,
        }
    }

    /// Resolve user, item and cart, failing fast before any mutation.
    async fn resolve(
        &self,
        request: &ModifyCartRequest,
    ) -> Result<(Item, Cart), CartsServiceError> {
        let user = self
            .users
            .find_by_username(&request.username)
            .await?
            .ok_or(CartsServiceError::UserNotFound)?;

        let item = self
            .items
            .find_by_id(request.item_id)
            .await?
            .ok_or(CartsServiceError::ItemNotFound)?;

        let cart = self
            .carts
            .find_by_user(user.id)
            .await?
            .ok_or(CartsServiceError::MissingCart)?;

        Ok((item, cart))
    }
}

#[async_trait]
impl CartsService for DefaultCartsService {
    async fn add_to_cart(&self, request: ModifyCartRequest) -> Result<Cart, CartsServiceError> {
        let (item, mut cart) = self.resolve(&request).await?;

        cart.add_items(&item, request.quantity);

        self.carts.save(&cart).await?;

        Ok(cart)
    }

    async fn remove_from_cart(
        &self,
        request: ModifyCartRequest,
    ) -> Result<Cart, CartsServiceError> {
        let (item, mut cart) = self.resolve(&request).await?;

        cart.remove_items(item.id, request.quantity);

        self.carts.save(&cart).await?;

        Ok(cart)
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Append units of a catalog item to the user's cart.
    async fn add_to_cart(&self, request: ModifyCartRequest) -> Result<Cart, CartsServiceError>;

    /// Remove units of a catalog item from the user's cart, clamping at
    /// zero when fewer units are present than requested.
    async fn remove_from_cart(
        &self,
        request: ModifyCartRequest,
    ) -> Result<Cart, CartsServiceError>;
}
