use crate::availability::AvailabilityIndex;
use crate::catalog::{self, Catalog};
use crate::checkout::Checkout;
use crate::clients::{CategoryClient, MenuItemClient, OrderClient, ProductClient, RestaurantClient};
use crate::config::FoodcartConfig;
use crate::order_actor;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum ShutdownError {
    #[error("actor task failed: {0}")]
    ActorFailed(#[from] tokio::task::JoinError),
}

/// The running store: one actor per table plus the services built on top of them.
///
/// Dependencies between actors point one way only:
///
/// ```text
/// orders ──► products ──► categories
/// menu items ──► products, restaurants
/// ```
///
/// Cascading deletes run in [`Catalog`], outside the actors, so the graph stays acyclic.
pub struct FoodcartSystem {
    pub restaurants: RestaurantClient,
    pub categories: CategoryClient,
    pub products: ProductClient,
    pub menu_items: MenuItemClient,
    pub orders: OrderClient,

    pub catalog: Catalog,
    pub availability: AvailabilityIndex,
    pub checkout: Checkout,

    handles: Vec<JoinHandle<()>>,
}

impl FoodcartSystem {
    /// Spawns every actor with its context. Must be called inside a Tokio runtime.
    pub fn new(config: &FoodcartConfig) -> Self {
        let buffer_size = config.actors.buffer_size;

        let (restaurant_actor, restaurants) = catalog::new_restaurants(buffer_size);
        let (category_actor, categories) = catalog::new_categories(buffer_size);
        let (product_actor, products) = catalog::new_products(buffer_size);
        let (menu_item_actor, menu_items) = catalog::new_menu_items(buffer_size);
        let (order_actor, orders) = order_actor::new(buffer_size);

        let handles = vec![
            tokio::spawn(restaurant_actor.run(())),
            tokio::spawn(category_actor.run(())),
            tokio::spawn(product_actor.run(categories.clone())),
            tokio::spawn(menu_item_actor.run((restaurants.clone(), products.clone()))),
            tokio::spawn(order_actor.run(products.clone())),
        ];

        let catalog = Catalog::new(
            restaurants.clone(),
            categories.clone(),
            products.clone(),
            menu_items.clone(),
            orders.clone(),
        );
        let availability = AvailabilityIndex::new(menu_items.clone(), products.clone());
        let checkout = Checkout::new(orders.clone(), config.region.clone());

        info!(buffer_size, region = %config.region.code, "System started");

        Self {
            restaurants,
            categories,
            products,
            menu_items,
            orders,
            catalog,
            availability,
            checkout,
            handles,
        }
    }

    /// Drops every client held here and waits for the actors to drain.
    ///
    /// An actor stops once the last client for it is gone, including the copies other
    /// actors hold as context, so clones kept by the caller delay shutdown.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down system...");

        drop(self.checkout);
        drop(self.availability);
        drop(self.catalog);
        drop(self.orders);
        drop(self.menu_items);
        drop(self.products);
        drop(self.categories);
        drop(self.restaurants);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e.into());
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
