//! Order Models

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::domain::items::models::Item;

/// Order Model
///
/// An immutable snapshot of a cart at submission time.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub items: Vec<Item>,
    pub total: Decimal,
    pub submitted_at: Timestamp,
}
