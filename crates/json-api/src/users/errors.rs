//! Errors

use salvo::http::StatusError;
use tracing::error;

use bazaar_app::domain::users::UsersServiceError;

pub(crate) fn into_status_error(error: UsersServiceError) -> StatusError {
    match error {
        UsersServiceError::AlreadyExists => {
            StatusError::conflict().brief("Username already taken")
        }
        UsersServiceError::NotFound => StatusError::not_found(),
        UsersServiceError::Sql(source) => {
            error!("user lookup failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
