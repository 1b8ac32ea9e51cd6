//! Users service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::domain::users::{
    errors::UsersServiceError,
    models::{NewUser, User},
    repository::UsersRepository,
};

#[derive(Clone)]
pub struct DefaultUsersService {
    users: Arc<dyn UsersRepository>,
}

impl DefaultUsersService {
    #[must_use]
    pub fn new(users: Arc<dyn UsersRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UsersService for DefaultUsersService {
    async fn create_user(&self, user: NewUser) -> Result<User, UsersServiceError> {
        let created = self.users.create(user).await?;

        Ok(created)
    }

    async fn find_by_username(&self, username: &str) -> Result<User, UsersServiceError> {
        self.users
            .find_by_username(username)
            .await?
            .ok_or(UsersServiceError::NotFound)
    }
}

#[automock]
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Creates a new user account with an empty cart.
    async fn create_user(&self, user: NewUser) -> Result<User, UsersServiceError>;

    /// Retrieve a user by their unique username.
    async fn find_by_username(&self, username: &str) -> Result<User, UsersServiceError>;
}
