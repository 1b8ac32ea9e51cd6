//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};

use bazaar_app::{
    context::AppContext,
    domain::{
        carts::{MockCartsService, models::Cart},
        items::{MockItemsService, models::Item},
        orders::{MockOrdersService, models::Order},
        users::MockUsersService,
    },
};

use crate::state::State;

pub(crate) fn make_item(id: i64, price: Decimal) -> Item {
    Item {
        id,
        name: format!("item-{id}"),
        price,
        description: String::new(),
    }
}

pub(crate) fn make_cart(user_id: i64, items: Vec<Item>) -> Cart {
    let total = items.iter().map(|item| item.price).sum();

    Cart {
        id: 1,
        user_id,
        items,
        total,
    }
}

pub(crate) fn make_order(id: i64, user_id: i64, items: Vec<Item>) -> Order {
    let total = items.iter().map(|item| item.price).sum();

    Order {
        id,
        user_id,
        items,
        total,
        submitted_at: Timestamp::UNIX_EPOCH,
    }
}

fn strict_users_mock() -> MockUsersService {
    let mut users = MockUsersService::new();

    users.expect_create_user().never();
    users.expect_find_by_username().never();

    users
}

fn strict_items_mock() -> MockItemsService {
    let mut items = MockItemsService::new();

    items.expect_list_items().never();
    items.expect_get_item().never();
    items.expect_find_by_name().never();

    items
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_add_to_cart().never();
    carts.expect_remove_from_cart().never();

    carts
}

fn strict_orders_mock() -> MockOrdersService {
    let mut orders = MockOrdersService::new();

    orders.expect_submit().never();
    orders.expect_history().never();

    orders
}

pub(crate) fn state_with_carts(carts: MockCartsService) -> Arc<State> {
    Arc::new(State::new(AppContext {
        users: Arc::new(strict_users_mock()),
        items: Arc::new(strict_items_mock()),
        carts: Arc::new(carts),
        orders: Arc::new(strict_orders_mock()),
    }))
}

pub(crate) fn state_with_users(users: MockUsersService) -> Arc<State> {
    Arc::new(State::new(AppContext {
        users: Arc::new(users),
        items: Arc::new(strict_items_mock()),
        carts: Arc::new(strict_carts_mock()),
        orders: Arc::new(strict_orders_mock()),
    }))
}

pub(crate) fn state_with_items(items: MockItemsService) -> Arc<State> {
    Arc::new(State::new(AppContext {
        users: Arc::new(strict_users_mock()),
        items: Arc::new(items),
        carts: Arc::new(strict_carts_mock()),
        orders: Arc::new(strict_orders_mock()),
    }))
}

pub(crate) fn state_with_orders(orders: MockOrdersService) -> Arc<State> {
    Arc::new(State::new(AppContext {
        users: Arc::new(strict_users_mock()),
        items: Arc::new(strict_items_mock()),
        carts: Arc::new(strict_carts_mock()),
        orders: Arc::new(orders),
    }))
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state_with_carts(carts))).push(route))
}

pub(crate) fn users_service(users: MockUsersService, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state_with_users(users))).push(route))
}

pub(crate) fn items_service(items: MockItemsService, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state_with_items(items))).push(route))
}

pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_orders(orders)))
            .push(route),
    )
}
