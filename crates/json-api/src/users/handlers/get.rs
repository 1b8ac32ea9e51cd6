//! Get User Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*, state::State, users::errors::into_status_error,
    users::responses::UserResponse,
};

/// Get User Handler
///
/// Returns a user account by username.
#[endpoint(tags("users"), summary = "Get User")]
pub(crate) async fn handler(
    username: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<UserResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let user = state
        .app
        .users
        .find_by_username(&username.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(user.into()))
}
