//! Order-specific resource logic: creation with price snapshots, operator edits and
//! lifecycle transitions.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::OrderClient;
use crate::framework::ResourceActor;
use crate::model::Order;

/// Creates a new Order actor and its client. Run it with a
/// [`ProductClient`](crate::clients::ProductClient).
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    let client = OrderClient::new(generic_client);

    (actor, client)
}
