//! Cart response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use bazaar_app::domain::carts::models::Cart;

use crate::items::responses::ItemResponse;

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartResponse {
    /// Cart identifier
    pub id: i64,

    /// One entry per unit, in insertion order
    pub items: Vec<ItemResponse>,

    /// Sum of the contained item prices, an exact decimal string
    pub total: String,

    /// Identifier of the owning user
    pub user_id: i64,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            id: cart.id,
            user_id: cart.user_id,
            total: cart.total.to_string(),
            items: cart.items.into_iter().map(ItemResponse::from).collect(),
        }
    }
}
