//! Find Items By Name Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    items::{errors::into_status_error, responses::ItemResponse},
    state::State,
};

/// Find Items By Name Handler
///
/// Returns all catalog items sharing the given name; 404 when none match.
#[endpoint(tags("items"), summary = "Find catalog items by name")]
pub(crate) async fn handler(
    name: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<Vec<ItemResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let items = state
        .app
        .items
        .find_by_name(&name.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}
