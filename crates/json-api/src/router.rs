//! App Router

use salvo::Router;

use crate::{carts, items, orders, users};

/// The `/api` resource tree.
///
/// The literal `name` segment is registered before the `{id}` parameter so
/// catalog name lookups are not swallowed by the id route.
pub(crate) fn api_router() -> Router {
    Router::with_path("api")
        .push(
            Router::with_path("cart")
                .push(Router::with_path("addToCart").post(carts::add::handler))
                .push(Router::with_path("removeFromCart").post(carts::remove::handler)),
        )
        .push(
            Router::with_path("user")
                .push(Router::with_path("create").post(users::create::handler))
                .push(Router::with_path("{username}").get(users::get::handler)),
        )
        .push(
            Router::with_path("item")
                .get(items::index::handler)
                .push(Router::with_path("name/{name}").get(items::by_name::handler))
                .push(Router::with_path("{id}").get(items::get::handler)),
        )
        .push(
            Router::with_path("order")
                .push(Router::with_path("submit/{username}").post(orders::submit::handler))
                .push(Router::with_path("history/{username}").get(orders::history::handler)),
        )
}
