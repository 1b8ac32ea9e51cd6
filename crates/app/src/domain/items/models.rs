//! Item Models

use rust_decimal::Decimal;

/// Item Model
///
/// A read-only catalog entry. `price` is exact fixed-point currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub description: String,
}
