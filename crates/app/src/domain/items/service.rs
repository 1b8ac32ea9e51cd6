//! Items service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::domain::items::{
    errors::ItemsServiceError, models::Item, repository::ItemsRepository,
};

#[derive(Clone)]
pub struct DefaultItemsService {
    items: Arc<dyn ItemsRepository>,
}

impl DefaultItemsService {
    #[must_use]
    pub fn new(items: Arc<dyn ItemsRepository>) -> Self {
        Self { items }
    }
}

#[async_trait]
impl ItemsService for DefaultItemsService {
    async fn list_items(&self) -> Result<Vec<Item>, ItemsServiceError> {
        let items = self.items.list().await?;

        Ok(items)
    }

    async fn get_item(&self, id: i64) -> Result<Item, ItemsServiceError> {
        self.items
            .find_by_id(id)
            .await?
            .ok_or(ItemsServiceError::NotFound)
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Item>, ItemsServiceError> {
        let items = self.items.find_by_name(name).await?;

        if items.is_empty() {
            return Err(ItemsServiceError::NotFound);
        }

        Ok(items)
    }
}

#[automock]
#[async_trait]
pub trait ItemsService: Send + Sync {
    /// The full catalog, ordered by id.
    async fn list_items(&self) -> Result<Vec<Item>, ItemsServiceError>;

    /// Retrieve a single catalog item.
    async fn get_item(&self, id: i64) -> Result<Item, ItemsServiceError>;

    /// All items sharing a name. An empty match is reported as `NotFound`.
    async fn find_by_name(&self, name: &str) -> Result<Vec<Item>, ItemsServiceError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::domain::items::repository::MockItemsRepository;

    use super::*;

    fn widget() -> Item {
        Item {
            id: 1,
            name: "Round Widget".to_string(),
            price: Decimal::new(299, 2),
            description: "A widget that is round".to_string(),
        }
    }

    fn make_service(items: MockItemsRepository) -> DefaultItemsService {
        DefaultItemsService::new(Arc::new(items))
    }

    #[tokio::test]
    async fn get_item_returns_catalog_entry() -> TestResult {
        let mut items = MockItemsRepository::new();

        items
            .expect_find_by_id()
            .once()
            .withf(|id| *id == 1)
            .return_once(|_| Ok(Some(widget())));

        let item = make_service(items).get_item(1).await?;

        assert_eq!(item.name, "Round Widget");
        assert_eq!(item.price, Decimal::new(299, 2));

        Ok(())
    }

    #[tokio::test]
    async fn get_unknown_item_returns_not_found() {
        let mut items = MockItemsRepository::new();

        items
            .expect_find_by_id()
            .once()
            .return_once(|_| Ok(None));

        let result = make_service(items).get_item(42).await;

        assert!(
            matches!(result, Err(ItemsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn find_by_name_with_no_matches_returns_not_found() {
        let mut items = MockItemsRepository::new();

        items
            .expect_find_by_name()
            .once()
            .withf(|name| name == "Hexagonal Widget")
            .return_once(|_| Ok(Vec::new()));

        let result = make_service(items).find_by_name("Hexagonal Widget").await;

        assert!(
            matches!(result, Err(ItemsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn list_items_passes_catalog_through() -> TestResult {
        let mut items = MockItemsRepository::new();

        items
            .expect_list()
            .once()
            .return_once(|| Ok(vec![widget()]));

        let catalog = make_service(items).list_items().await?;

        assert_eq!(catalog.len(), 1);

        Ok(())
    }
}
