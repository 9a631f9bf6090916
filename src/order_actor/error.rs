//! Error types for the Order actor.

use crate::catalog::CatalogError;
use crate::error::ValidationError;
use crate::framework::FrameworkError;
use crate::model::{OrderId, OrderStatus};
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The order payload was rejected; no order or item was stored.
    #[error("Order validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The order is not in the state the transition starts from.
    #[error("{order} cannot move from {from} to {to}")]
    InvalidTransition {
        order: OrderId,
        from: OrderStatus,
        to: OrderStatus,
    },

    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The order actor could not be reached.
    #[error("Order storage error: {0}")]
    Storage(String),

    /// A catalog lookup made while building the order failed.
    #[error("Catalog error: {0}")]
    Catalog(CatalogError),
}

impl OrderError {
    /// Recovers the typed error raised by an order hook, or classifies a transport failure.
    pub fn from_framework(e: FrameworkError) -> Self {
        match e.downcast::<OrderError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => OrderError::NotFound(id),
            Err(other) => OrderError::Storage(other.to_string()),
        }
    }
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::Storage(msg)
    }
}
