//! Orders service errors.

use sqlx::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("user not found")]
    UserNotFound,

    /// See `CartsServiceError::MissingCart`.
    #[error("cart missing for user")]
    MissingCart,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for OrdersServiceError {
    fn from(error: Error) -> Self {
        Self::Sql(error)
    }
}
