//! Catalog tables: restaurants, product categories, products and menu items.
//!
//! Each table runs in its own actor. Deletes that must reach other tables go through
//! [`Catalog`], which sends the follow-up requests itself. Entity hooks only ever call
//! "down" the dependency graph (menu items → products → categories), so no actor ever
//! waits on one that could be waiting on it.

mod entity;
mod error;

pub use error::*;

use crate::clients::{
    ActorClient, CategoryClient, MenuItemClient, OrderClient, ProductClient, RestaurantClient,
};
use crate::framework::ResourceActor;
use crate::model::{
    CategoryId, Product, ProductCategory, ProductId, ProductUpdate, Restaurant, RestaurantId,
    RestaurantMenuItem,
};
use crate::order_actor::OrderError;
use tracing::{info, instrument};

/// Creates the restaurant actor and its client.
pub fn new_restaurants(buffer_size: usize) -> (ResourceActor<Restaurant>, RestaurantClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, RestaurantClient::new(generic_client))
}

/// Creates the product category actor and its client.
pub fn new_categories(buffer_size: usize) -> (ResourceActor<ProductCategory>, CategoryClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, CategoryClient::new(generic_client))
}

/// Creates the product actor and its client. Run it with a [`CategoryClient`].
pub fn new_products(buffer_size: usize) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, ProductClient::new(generic_client))
}

/// Creates the menu item actor and its client. Run it with a
/// `(RestaurantClient, ProductClient)` pair.
pub fn new_menu_items(buffer_size: usize) -> (ResourceActor<RestaurantMenuItem>, MenuItemClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, MenuItemClient::new(generic_client))
}

/// Deletes with their effects on dependent rows.
///
/// | delete     | effect                                                       |
/// |------------|--------------------------------------------------------------|
/// | restaurant | its menu items are deleted                                   |
/// | category   | products in it become uncategorised                          |
/// | product    | its menu items are deleted and it is dropped from every order |
///
/// The parent row goes first, so a concurrent create that references it fails its
/// existence check instead of leaving a dangling row behind.
#[derive(Clone)]
pub struct Catalog {
    restaurants: RestaurantClient,
    categories: CategoryClient,
    products: ProductClient,
    menu_items: MenuItemClient,
    orders: OrderClient,
}

impl Catalog {
    pub fn new(
        restaurants: RestaurantClient,
        categories: CategoryClient,
        products: ProductClient,
        menu_items: MenuItemClient,
        orders: OrderClient,
    ) -> Self {
        Self {
            restaurants,
            categories,
            products,
            menu_items,
            orders,
        }
    }

    #[instrument(skip(self))]
    pub async fn delete_restaurant(&self, id: RestaurantId) -> Result<(), CatalogError> {
        self.restaurants.delete(id).await?;

        let stale: Vec<_> = self
            .menu_items
            .list_menu_items()
            .await?
            .into_iter()
            .filter(|item| item.restaurant == id)
            .map(|item| item.id)
            .collect();
        for item in &stale {
            ignore_missing(self.menu_items.delete(*item).await)?;
        }

        info!(%id, menu_items = stale.len(), "Restaurant deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete_category(&self, id: CategoryId) -> Result<(), CatalogError> {
        self.categories.delete(id).await?;

        let mut detached = 0;
        for product in self.products.list_products().await? {
            if product.category != Some(id) {
                continue;
            }
            match self
                .products
                .update_product(product.id, ProductUpdate::clear_category())
                .await
            {
                Ok(_) => detached += 1,
                Err(CatalogError::NotFound(_)) => {}
                Err(e) => return Err(e),
            }
        }

        info!(%id, products = detached, "Category deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ProductId) -> Result<(), CatalogError> {
        self.products.delete(id).await?;

        let stale: Vec<_> = self
            .menu_items
            .list_menu_items()
            .await?
            .into_iter()
            .filter(|item| item.product == id)
            .map(|item| item.id)
            .collect();
        for item in &stale {
            ignore_missing(self.menu_items.delete(*item).await)?;
        }

        let orders = self
            .orders
            .list_orders()
            .await
            .map_err(|e| CatalogError::Storage(e.to_string()))?;
        let mut dropped = 0;
        for order in orders.iter().filter(|order| order.contains_product(id)) {
            match self.orders.drop_product(order.id, id).await {
                Ok(count) => dropped += count,
                Err(OrderError::NotFound(_)) => {}
                Err(e) => return Err(CatalogError::Storage(e.to_string())),
            }
        }

        info!(%id, menu_items = stale.len(), order_items = dropped, "Product deleted");
        Ok(())
    }
}

fn ignore_missing(result: Result<(), CatalogError>) -> Result<(), CatalogError> {
    match result {
        Err(CatalogError::NotFound(_)) => Ok(()),
        other => other,
    }
}
