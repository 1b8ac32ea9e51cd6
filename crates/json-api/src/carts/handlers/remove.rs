//! Remove From Cart Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    carts::{errors::into_status_error, requests::CartModificationRequest, responses::CartResponse},
    extensions::*,
    state::State,
};

/// Remove From Cart Handler
///
/// Removes up to the requested number of units from the user's cart and
/// returns the updated cart. Removing more units than present empties the
/// matches without error.
#[endpoint(
    tags("cart"),
    summary = "Remove items from a cart",
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
        .remove_from_cart(request.into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use bazaar_app::domain::carts::{CartsServiceError, MockCartsService};

    use crate::test_helpers::{carts_service, make_cart};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(
            carts,
            Router::with_path("api/cart/removeFromCart").post(handler),
        )
    }

    #[tokio::test]
    async fn test_remove_returns_emptied_cart() -> TestResult {
        let cart = make_cart(1, Vec::new());

        let mut carts = MockCartsService::new();

        carts
            .expect_remove_from_cart()
            .once()
            .withf(|request| {
                request.username == "test" && request.item_id == 1 && request.quantity == 1
            })
            .return_once(move |_| Ok(cart));

        carts.expect_add_to_cart().never();

        let mut res = TestClient::post("http://example.com/api/cart/removeFromCart")
            .json(&json!({ "username": "test", "itemId": 1, "quantity": 1 }))
            .send(&make_service(carts))
            .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.items.is_empty(), "cart should be empty");
        assert_eq!(body.total, "0");

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_for_unknown_item_returns_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_remove_from_cart()
            .once()
            .withf(|request| request.item_id == 42)
            .return_once(|_| Err(CartsServiceError::ItemNotFound));

        carts.expect_add_to_cart().never();

        let res = TestClient::post("http://example.com/api/cart/removeFromCart")
            .json(&json!({ "username": "test", "itemId": 42, "quantity": 1 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_with_zero_quantity_returns_400() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_add_to_cart().never();
        carts.expect_remove_from_cart().never();

        let res = TestClient::post("http://example.com/api/cart/removeFromCart")
            .json(&json!({ "username": "test", "itemId": 1, "quantity": 0 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
