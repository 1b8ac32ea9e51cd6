//! Get Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    items::{errors::into_status_error, responses::ItemResponse},
    state::State,
};

/// Get Item Handler
///
/// Returns a single catalog item.
#[endpoint(tags("items"), summary = "Get catalog item")]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<ItemResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let item = state
        .app
        .items
        .get_item(id.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(item.into()))
}
