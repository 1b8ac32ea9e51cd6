//! Item response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use bazaar_app::domain::items::models::Item;

/// Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ItemResponse {
    /// Catalog identifier of the item
    pub id: i64,

    /// Display name
    pub name: String,

    /// Unit price, an exact decimal string
    pub price: String,

    /// Catalog description
    pub description: String,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            price: item.price.to_string(),
            description: item.description,
        }
    }
}
