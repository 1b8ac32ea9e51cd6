//! Add To Cart Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    carts::{errors::into_status_error, requests::CartModificationRequest, responses::CartResponse},
    extensions::*,
    state::State,
};

/// Add To Cart Handler
///
/// Appends units of a catalog item to the user's cart and returns the
/// updated cart.
#[endpoint(
    tags("cart"),
    summary = "Add items to a cart",
    responses(
        (status_code = StatusCode::OK, description = "Updated cart"),
        (status_code = StatusCode::NOT_FOUND, description = "Unknown user or item"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CartModificationRequest>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    if request.quantity == 0 {
        return Err(StatusError::bad_request().brief("quantity must be at least 1"));
    }

    let cart = state
        .app
        .carts
        .add_to_cart(request.into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}
