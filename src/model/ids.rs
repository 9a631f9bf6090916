//! Type-safe identifiers.
//!
//! Every table gets its own `u32` newtype so a `ProductId` can never be passed where an
//! `OrderId` is expected. IDs display as `product_3`, and serialize as the bare number
//! so they match the wire payload (`{"product": 3, "quantity": 1}`).

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "_{}"), self.0)
            }
        }
    };
}

define_id!(
    /// Identifier of a [`Restaurant`](crate::model::Restaurant).
    RestaurantId,
    "restaurant"
);
define_id!(
    /// Identifier of a [`ProductCategory`](crate::model::ProductCategory).
    CategoryId,
    "category"
);
define_id!(
    /// Identifier of a [`Product`](crate::model::Product).
    ProductId,
    "product"
);
define_id!(
    /// Identifier of a [`RestaurantMenuItem`](crate::model::RestaurantMenuItem).
    MenuItemId,
    "menu_item"
);
define_id!(
    /// Identifier of an [`Order`](crate::model::Order).
    OrderId,
    "order"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_wire_form() {
        assert_eq!(ProductId(3).to_string(), "product_3");
        assert_eq!(MenuItemId::from(12).to_string(), "menu_item_12");
        assert_eq!(serde_json::to_string(&OrderId(5)).unwrap(), "5");
        let id: ProductId = serde_json::from_str("42").unwrap();
        assert_eq!(id, ProductId(42));
    }
}
