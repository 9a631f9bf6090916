//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod actor_client;
pub mod catalog_clients;
pub mod order_client;

pub use actor_client::*;
pub use catalog_clients::*;
pub use order_client::*;
