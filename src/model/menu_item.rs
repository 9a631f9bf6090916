use crate::model::{MenuItemId, ProductId, RestaurantId};
use serde::{Deserialize, Serialize};

/// "Restaurant R sells product P", with a switch for whether it is on sale right now.
///
/// At most one menu item exists per (restaurant, product) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestaurantMenuItem {
    pub id: MenuItemId,
    pub restaurant: RestaurantId,
    pub product: ProductId,
    pub availability: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MenuItemCreate {
    pub restaurant: RestaurantId,
    pub product: ProductId,
    #[serde(default = "default_availability")]
    pub availability: bool,
}

fn default_availability() -> bool {
    true
}

impl MenuItemCreate {
    /// An available menu entry.
    pub fn new(restaurant: RestaurantId, product: ProductId) -> Self {
        Self {
            restaurant,
            product,
            availability: default_availability(),
        }
    }

    pub fn unavailable(mut self) -> Self {
        self.availability = false;
        self
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuItemUpdate {
    pub availability: Option<bool>,
}
