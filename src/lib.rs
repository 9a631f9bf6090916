//! # Foodcart
//!
//! > **The ordering core of a food delivery store, built on resource-oriented actors.**
//!
//! Restaurants list products on their menus, customers order those products, and
//! operators move orders from "new" to "delivered". This crate owns the parts that must
//! stay correct under concurrent use: what is on sale, what an order costs, and which
//! state an order is in.
//!
//! ## 🏗️ Design
//!
//! Every table lives inside its own [`ResourceActor`](framework::ResourceActor), which
//! handles one request at a time. That gives three guarantees without locks:
//!
//! - **Atomic order creation**: products are resolved and prices frozen inside the order
//!   actor's `on_create`, before the order is stored. A failure stores nothing.
//! - **Stable history**: an order item keeps the price it was created with. Repricing a
//!   product later changes nothing in existing orders.
//! - **Single-winner transitions**: `mark_processed` and `mark_finished` are compare-and-set
//!   on the order status. Of two operators racing, one gets
//!   [`InvalidTransition`](order_actor::OrderError::InvalidTransition).
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic actor loop, its client, and [`MockClient`](framework::mock::MockClient)
//! for testing one actor against scripted neighbours.
//!
//! ### 2. The Records ([`model`], [`config`], [`error`])
//! Plain data: ids, prices, phone numbers, the five tables and their payloads, plus the
//! TOML configuration and the shared [`ValidationError`](error::ValidationError).
//!
//! ### 3. The Rules ([`pricing`], [`lifecycle`], [`availability`])
//! Pure functions over records: price snapshots and totals, the order state machine,
//! and which products are on sale.
//!
//! ### 4. The Actors ([`catalog`], [`order_actor`])
//! [`ActorEntity`](framework::ActorEntity) implementations and the
//! [`Catalog`](catalog::Catalog) facade that applies cascading deletes.
//!
//! ### 5. The Interface ([`clients`], [`checkout`], [`runtime`])
//! Typed clients, order placement from a wire request, and
//! [`FoodcartSystem`](runtime::FoodcartSystem), which starts and wires everything.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! FOODCART_CONFIG=foodcart.toml RUST_LOG=debug cargo run
//! ```

pub mod availability;
pub mod catalog;
pub mod checkout;
pub mod clients;
pub mod config;
pub mod error;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod pricing;
pub mod runtime;
