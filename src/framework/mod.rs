//! Generic actor framework backing the foodcart store.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait a stored record implements
//! - [`ResourceActor`] - The mailbox loop that owns one table
//! - [`ResourceClient`] - Cloneable handle for sending requests
//! - [`FrameworkError`] - Transport failures and boxed hook errors
//!
//! # Testing
//!
//! See the [`mock`] module for utilities to test clients without spawning real actors.

pub mod core;
pub mod mock;

pub use self::core::*;
