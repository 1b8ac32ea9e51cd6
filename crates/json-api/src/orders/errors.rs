//! Errors

use salvo::http::StatusError;
use tracing::error;

use bazaar_app::domain::orders::OrdersServiceError;

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::UserNotFound => StatusError::not_found(),
        OrdersServiceError::MissingCart => {
            error!("cart row missing for an existing user");

            StatusError::internal_server_error()
        }
        OrdersServiceError::Sql(source) => {
            error!("order operation failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
