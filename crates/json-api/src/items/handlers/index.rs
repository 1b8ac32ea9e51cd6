//! List Items Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    items::{errors::into_status_error, responses::ItemResponse},
    state::State,
};

/// List Items Handler
///
/// Returns the full catalog.
#[endpoint(tags("items"), summary = "List catalog items")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ItemResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let items = state
        .app
        .items
        .list_items()
        .await
        .map_err(into_status_error)?;

    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use bazaar_app::domain::items::MockItemsService;

    use crate::test_helpers::{items_service, make_item};

    use super::*;

    fn make_service(items: MockItemsService) -> Service {
        items_service(items, Router::with_path("api/item").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_catalog() -> TestResult {
        let mut items = MockItemsService::new();

        items.expect_list_items().once().return_once(|| {
            Ok(vec![
                make_item(1, Decimal::new(299, 2)),
                make_item(2, Decimal::new(199, 2)),
            ])
        });

        items.expect_get_item().never();
        items.expect_find_by_name().never();

        let mut res = TestClient::get("http://example.com/api/item")
            .send(&make_service(items))
            .await;

        let body: Vec<ItemResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.len(), 2);
        assert_eq!(body.first().map(|item| item.price.as_str()), Some("2.99"));

        Ok(())
    }
}
