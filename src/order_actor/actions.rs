//! Custom actions for the Order actor.
//!
//! Everything that changes an order after creation, apart from the operator edits in
//! [`OrderUpdate`](crate::model::OrderUpdate), is an action. Actions are handled one at a
//! time against a copy of the order, so a rejected one leaves the stored order untouched.

use crate::lifecycle::Transition;
use crate::model::{Order, ProductId};

#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Move the order one step along its lifecycle.
    Transition(Transition),
    /// Remove every item for a product that left the catalog.
    DropProduct(ProductId),
}

/// Results from [`OrderAction`]s, one variant per action.
#[derive(Debug, Clone)]
pub enum OrderActionResult {
    /// The order as stored after the transition.
    Transitioned(Box<Order>),
    /// How many items were removed.
    Dropped(usize),
}
