//! Errors

use salvo::http::StatusError;
use tracing::error;

use bazaar_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::UserNotFound | CartsServiceError::ItemNotFound => {
            StatusError::not_found()
        }
        CartsServiceError::MissingCart => {
            error!("cart row missing for an existing user");

            StatusError::internal_server_error()
        }
        CartsServiceError::Sql(source) => {
            error!("cart operation failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
