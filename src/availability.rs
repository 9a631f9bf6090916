//! Which products can be bought right now.
//!
//! A product is on sale when at least one restaurant lists it with `availability` set.
//! Nothing is cached: every call reads the current menu and product tables.

use crate::catalog::CatalogError;
use crate::clients::{MenuItemClient, ProductClient};
use crate::model::{Product, ProductId, RestaurantMenuItem};
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Products listed as available by at least one menu item, by id. Each product appears
/// once however many restaurants sell it.
pub fn available_products(menu: &[RestaurantMenuItem], products: Vec<Product>) -> Vec<Product> {
    let on_sale: HashSet<ProductId> = menu
        .iter()
        .filter(|item| item.availability)
        .map(|item| item.product)
        .collect();

    let mut available: Vec<Product> = products
        .into_iter()
        .filter(|product| on_sale.contains(&product.id))
        .collect();
    available.sort_by_key(|product| product.id);
    available.dedup_by_key(|product| product.id);
    available
}

#[derive(Clone)]
pub struct AvailabilityIndex {
    menu_items: MenuItemClient,
    products: ProductClient,
}

impl AvailabilityIndex {
    pub fn new(menu_items: MenuItemClient, products: ProductClient) -> Self {
        Self {
            menu_items,
            products,
        }
    }

    /// The two tables are read one after the other, so a concurrent write may be
    /// reflected in one and not yet the other.
    #[instrument(skip(self))]
    pub async fn available_products(&self) -> Result<Vec<Product>, CatalogError> {
        let menu = self.menu_items.list_menu_items().await?;
        let products = self.products.list_products().await?;
        let available = available_products(&menu, products);
        debug!(menu_items = menu.len(), available = available.len(), "Computed availability");
        Ok(available)
    }
}
