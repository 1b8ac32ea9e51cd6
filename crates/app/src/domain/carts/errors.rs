//! Carts service errors.

use sqlx::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("user not found")]
    UserNotFound,

    #[error("item not found")]
    ItemNotFound,

    /// An existing user has no cart row. Carts are created with their user,
    /// so this is a storage invariant breach rather than a client error.
    #[error("cart missing for user")]
    MissingCart,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CartsServiceError {
    fn from(error: Error) -> Self {
        Self::Sql(error)
    }
}
