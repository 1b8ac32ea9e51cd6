//! Cart request bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use bazaar_app::domain::carts::models::ModifyCartRequest;

/// Cart Modification Request
///
/// Shared body of the add and remove endpoints.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartModificationRequest {
    /// Username owning the cart
    pub username: String,

    /// Catalog identifier of the item
    pub item_id: i64,

    /// Number of units, at least 1
    pub quantity: u32,
}

impl From<CartModificationRequest> for ModifyCartRequest {
    fn from(request: CartModificationRequest) -> Self {
        ModifyCartRequest {
            username: request.username,
            item_id: request.item_id,
            quantity: request.quantity,
        }
    }
}
