//! Records held by the store.

mod category;
mod ids;
mod menu_item;
mod order;
mod phone;
mod price;
mod product;
mod restaurant;

pub use category::*;
pub use ids::*;
pub use menu_item::*;
pub use order::*;
pub use phone::*;
pub use price::*;
pub use product::*;
pub use restaurant::*;
