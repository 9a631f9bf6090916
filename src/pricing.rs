//! Price snapshotting and order totals.
//!
//! An order item copies the product price once, while the order is being created
//! (see the order actor's `on_create`). Nothing updates `item_price` afterwards, so
//! repricing a product never changes what past orders cost.

use crate::model::{Order, Price, Product};
use rust_decimal::Decimal;

/// The unit price to freeze on a new order item.
pub fn snapshot_item_price(product: &Product) -> Price {
    product.price
}

/// `Σ item_price × quantity`. Zero when the order has no items.
pub fn order_total(order: &Order) -> Decimal {
    order.items.iter().map(|item| item.line_total()).sum()
}
