//! Runtime orchestration: starting, wiring and stopping the actors.
//!
//! # Main Components
//!
//! - [`FoodcartSystem`] - spawns one actor per table and injects each one's dependencies
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure

pub mod system;
pub mod tracing;

pub use self::system::*;
pub use self::tracing::*;
