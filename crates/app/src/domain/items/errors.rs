//! Items service errors.

use sqlx::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ItemsServiceError {
    #[error("item not found")]
    NotFound,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for ItemsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        Self::Sql(error)
    }
}
