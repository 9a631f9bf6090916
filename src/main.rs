//! # Foodcart demo
//!
//! Walks one day of the store through the real actors:
//! 1.  Setting up the [`FoodcartSystem`] from `FOODCART_CONFIG` (or the defaults).
//! 2.  Filling the catalog and listing what is on sale.
//! 3.  Placing an order, repricing a product, and showing the order keeps its price.
//! 4.  Moving the order through its lifecycle.

use anyhow::{Context, Result};
use foodcart::checkout::{CreateOrderRequest, OrderReceipt};
use foodcart::config::FoodcartConfig;
use foodcart::model::{
    MenuItemCreate, ProductCategoryCreate, ProductCreate, ProductUpdate, RestaurantCreate,
};
use foodcart::runtime::{setup_tracing, FoodcartSystem};
use rust_decimal_macros::dec;
use tracing::{info, warn, Instrument};

fn load_config() -> Result<FoodcartConfig> {
    match std::env::var("FOODCART_CONFIG") {
        Ok(path) => FoodcartConfig::load(&path).with_context(|| format!("loading {path}")),
        Err(_) => Ok(FoodcartConfig::default()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_tracing();

    let config = load_config()?;
    info!(region = %config.region.code, "Starting foodcart");
    let system = FoodcartSystem::new(&config);

    let (burger, fries) = async {
        let restaurant = system
            .restaurants
            .create_restaurant(
                RestaurantCreate::new("Star Burger Тверская")
                    .with_address("Москва, Тверская 1")
                    .with_contact_phone("+7 495 123-45-67"),
            )
            .await?;
        let category = system
            .categories
            .create_category(ProductCategoryCreate {
                name: "Бургеры".into(),
            })
            .await?;
        let burger = system
            .products
            .create_product(
                ProductCreate::new("Чизбургер", dec!(100.00), "cheeseburger.png")
                    .with_category(category)
                    .special(),
            )
            .await?;
        let fries = system
            .products
            .create_product(ProductCreate::new("Картофель фри", dec!(50.00), "fries.png"))
            .await?;

        system
            .menu_items
            .create_menu_item(MenuItemCreate::new(restaurant, burger))
            .await?;
        system
            .menu_items
            .create_menu_item(MenuItemCreate::new(restaurant, fries))
            .await?;

        let on_sale = system.availability.available_products().await?;
        info!(count = on_sale.len(), "Products on sale");
        Ok::<_, anyhow::Error>((burger, fries))
    }
    .instrument(tracing::info_span!("catalog_setup"))
    .await
    .context("setting up the catalog")?;

    let request: CreateOrderRequest = serde_json::from_value(serde_json::json!({
        "firstname": "Иван",
        "lastname": "Петров",
        "address": "Москва, Тверская 1, кв. 5",
        "phonenumber": "8 (912) 345-67-89",
        "payment_method": "CH",
        "products": [
            {"product": burger, "quantity": 2},
            {"product": fries, "quantity": 1}
        ]
    }))
    .context("building the order request")?;

    let order = async {
        let order = system.checkout.create_order(request).await?;
        info!(id = %order.id, total = %order.total(), "Order placed");

        system
            .products
            .update_product(burger, ProductUpdate::price(dec!(120.00)))
            .await?;
        let order = system.orders.mark_processed(order.id).await?;
        info!(id = %order.id, total = %order.total(), "Total after repricing");
        Ok::<_, anyhow::Error>(order)
    }
    .instrument(tracing::info_span!("order_placement"))
    .await
    .context("placing the order")?;

    if let Err(e) = system.orders.mark_processed(order.id).await {
        warn!(error = %e, "Second mark_processed rejected");
    }
    let order = system
        .orders
        .mark_finished(order.id)
        .await
        .context("finishing the order")?;

    let receipt = OrderReceipt::new(&order, &config.labels);
    println!("{}", serde_json::to_string_pretty(&receipt)?);

    system.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}
