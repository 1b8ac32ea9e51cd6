//! Submit Order Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    orders::{errors::into_status_error, responses::OrderResponse},
    state::State,
};

/// Submit Order Handler
///
/// Snapshots the user's cart into a new order and empties the cart.
#[endpoint(
    tags("orders"),
    summary = "Submit Order",
    responses(
        (status_code = StatusCode::OK, description = "Created order"),
        (status_code = StatusCode::NOT_FOUND, description = "Unknown user"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    username: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let order = state
        .app
        .orders
        .submit(&username.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(order.into()))
}
