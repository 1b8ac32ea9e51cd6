//! Order response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use bazaar_app::domain::orders::models::Order;

use crate::items::responses::ItemResponse;

/// Order Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderResponse {
    /// Order identifier
    pub id: i64,

    /// Identifier of the submitting user
    pub user_id: i64,

    /// Snapshot of the cart at submission
    pub items: Vec<ItemResponse>,

    /// Order total, an exact decimal string
    pub total: String,

    /// Submission timestamp, RFC 3339
    pub submitted_at: String,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            user_id: order.user_id,
            items: order.items.into_iter().map(ItemResponse::from).collect(),
            total: order.total.to_string(),
            submitted_at: order.submitted_at.to_string(),
        }
    }
}
