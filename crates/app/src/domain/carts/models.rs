//! Cart Models

use rust_decimal::Decimal;

use crate::domain::items::models::Item;

/// Cart Model
///
/// Holds one entry per unit, in insertion order. `total` always equals the
/// sum of the contained item prices.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub id: i64,
    pub user_id: i64,
    pub items: Vec<Item>,
    pub total: Decimal,
}

impl Cart {
    /// Append `quantity` units of `item` after the existing entries.
    pub fn add_items(&mut self, item: &Item, quantity: u32) {
        for _ in 0..quantity {
            self.items.push(item.clone());
        }

        self.recalculate();
    }

    /// Remove up to `quantity` units of the given item, most recently added
    /// first. Removing more units than present clears all matches.
    pub fn remove_items(&mut self, item_id: i64, quantity: u32) {
        for _ in 0..quantity {
            let Some(position) = self.items.iter().rposition(|item| item.id == item_id) else {
                break;
            };

            self.items.remove(position);
        }

        self.recalculate();
    }

    /// Empty the cart and zero its total.
    pub fn clear(&mut self) {
        self.items.clear();
        self.recalculate();
    }

    fn recalculate(&mut self) {
        self.total = self.items.iter().map(|item| item.price).sum();
    }
}

/// Cart modification request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifyCartRequest {
    pub username: String,
    pub item_id: i64,
    pub quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: i64, price: Decimal) -> Item {
        Item {
            id,
            name: format!("item-{id}"),
            price,
            description: String::new(),
        }
    }

    fn empty_cart() -> Cart {
        Cart {
            id: 1,
            user_id: 1,
            items: Vec::new(),
            total: Decimal::ZERO,
        }
    }

    #[test]
    fn adding_items_keeps_total_equal_to_sum() {
        let mut cart = empty_cart();
        let widget = make_item(1, Decimal::new(299, 2));

        cart.add_items(&widget, 2);

        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.total, Decimal::new(598, 2));
    }

    #[test]
    fn added_items_land_after_existing_entries() {
        let mut cart = empty_cart();
        let first = make_item(1, Decimal::new(299, 2));
        let second = make_item(2, Decimal::new(199, 2));

        cart.add_items(&first, 1);
        cart.add_items(&second, 1);

        assert_eq!(cart.items.first().map(|item| item.id), Some(1));
        assert_eq!(cart.items.last().map(|item| item.id), Some(2));
        assert_eq!(cart.total, Decimal::new(498, 2));
    }

    #[test]
    fn add_then_remove_restores_total_exactly() {
        let mut cart = empty_cart();
        let widget = make_item(1, Decimal::new(299, 2));

        cart.add_items(&widget, 3);
        cart.remove_items(1, 3);

        assert!(cart.items.is_empty(), "cart should be empty");
        assert_eq!(cart.total, Decimal::ZERO);
    }

    #[test]
    fn removing_more_than_present_clamps_at_zero() {
        let mut cart = empty_cart();
        let widget = make_item(1, Decimal::new(299, 2));
        let other = make_item(2, Decimal::new(199, 2));

        cart.add_items(&widget, 1);
        cart.add_items(&other, 1);
        cart.remove_items(1, 5);

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.total, Decimal::new(199, 2));
    }

    #[test]
    fn removing_absent_item_leaves_cart_unchanged() {
        let mut cart = empty_cart();
        let widget = make_item(1, Decimal::new(299, 2));

        cart.add_items(&widget, 1);
        cart.remove_items(99, 1);

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.total, Decimal::new(299, 2));
    }

    #[test]
    fn duplicates_are_removed_most_recent_first() {
        let mut cart = empty_cart();
        let widget = make_item(1, Decimal::new(299, 2));
        let other = make_item(2, Decimal::new(199, 2));

        cart.add_items(&widget, 1);
        cart.add_items(&other, 1);
        cart.add_items(&widget, 1);
        cart.remove_items(1, 1);

        let ids: Vec<i64> = cart.items.iter().map(|item| item.id).collect();

        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn clear_empties_items_and_total() {
        let mut cart = empty_cart();
        let widget = make_item(1, Decimal::new(299, 2));

        cart.add_items(&widget, 4);
        cart.clear();

        assert!(cart.items.is_empty(), "cart should be empty");
        assert_eq!(cart.total, Decimal::ZERO);
    }
}
