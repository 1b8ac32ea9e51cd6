//! Errors

use salvo::http::StatusError;
use tracing::error;

use bazaar_app::domain::items::ItemsServiceError;

pub(crate) fn into_status_error(error: ItemsServiceError) -> StatusError {
    match error {
        ItemsServiceError::NotFound => StatusError::not_found(),
        ItemsServiceError::Sql(source) => {
            error!("item lookup failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
