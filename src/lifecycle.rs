//! Order lifecycle: `New → Processed → Finished`.
//!
//! The rules here are pure functions of the order and the current time. The order actor
//! applies them one message at a time, which makes each transition a compare-and-set
//! on `order_status`: of two callers racing from the same state, one gets
//! [`OrderError::InvalidTransition`].

use crate::model::{Order, OrderStatus};
use crate::order_actor::OrderError;
use chrono::{DateTime, Utc};

/// An operator-triggered lifecycle step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The order was called through and handed to a restaurant.
    Process,
    /// The order was delivered.
    Finish,
}

impl Transition {
    /// The only state this transition may start from.
    pub fn required(&self) -> OrderStatus {
        match self {
            Transition::Process => OrderStatus::New,
            Transition::Finish => OrderStatus::Processed,
        }
    }

    pub fn target(&self) -> OrderStatus {
        match self {
            Transition::Process => OrderStatus::Processed,
            Transition::Finish => OrderStatus::Finished,
        }
    }

    /// Moves `order` to the target state and stamps the matching timestamp if it is
    /// still unset. On error the order is not modified.
    pub fn apply(&self, order: &mut Order, now: DateTime<Utc>) -> Result<(), OrderError> {
        if order.order_status != self.required() {
            return Err(OrderError::InvalidTransition {
                order: order.id,
                from: order.order_status,
                to: self.target(),
            });
        }

        order.order_status = self.target();
        let stamp = match self {
            Transition::Process => &mut order.called_at,
            Transition::Finish => &mut order.delivered_at,
        };
        stamp.get_or_insert(now);
        Ok(())
    }
}

/// `New → Processed`, stamping `called_at`.
pub fn mark_processed(order: &mut Order, now: DateTime<Utc>) -> Result<(), OrderError> {
    Transition::Process.apply(order, now)
}

/// `Processed → Finished`, stamping `delivered_at`.
pub fn mark_finished(order: &mut Order, now: DateTime<Utc>) -> Result<(), OrderError> {
    Transition::Finish.apply(order, now)
}

/// Orders still waiting to be processed, oldest first.
pub fn new_orders(orders: impl IntoIterator<Item = Order>) -> Vec<Order> {
    let mut pending: Vec<Order> = orders
        .into_iter()
        .filter(|order| order.order_status == OrderStatus::New)
        .collect();
    pending.sort_by_key(|order| (order.created_at, order.id));
    pending
}
