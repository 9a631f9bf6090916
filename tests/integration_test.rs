use foodcart::checkout::{CreateOrderRequest, OrderReceipt};
use foodcart::clients::ActorClient;
use foodcart::config::FoodcartConfig;
use foodcart::error::ValidationError;
use foodcart::model::{
    MenuItemCreate, OrderStatus, PaymentMethod, ProductCreate, ProductId, ProductUpdate,
    RestaurantCreate,
};
use foodcart::order_actor::OrderError;
use foodcart::runtime::FoodcartSystem;
use rust_decimal_macros::dec;

fn order_request(lines: &[(ProductId, i64)]) -> CreateOrderRequest {
    let products: Vec<_> = lines
        .iter()
        .map(|(product, quantity)| serde_json::json!({"product": product, "quantity": quantity}))
        .collect();
    serde_json::from_value(serde_json::json!({
        "firstname": "Иван",
        "lastname": "Петров",
        "address": "Москва, Тверская 1",
        "phonenumber": "+79123456789",
        "products": products
    }))
    .unwrap()
}

async fn burger_and_fries(system: &FoodcartSystem) -> (ProductId, ProductId) {
    let burger = system
        .products
        .create_product(ProductCreate::new("Чизбургер", dec!(100.00), "burger.png"))
        .await
        .unwrap();
    let fries = system
        .products
        .create_product(ProductCreate::new("Картофель фри", dec!(50.00), "fries.png"))
        .await
        .unwrap();
    (burger, fries)
}

/// Full end-to-end run with all real actors: the order keeps the prices it was
/// created with after the catalog is repriced.
#[tokio::test]
async fn test_order_total_survives_repricing() {
    let system = FoodcartSystem::new(&FoodcartConfig::default());
    let (burger, fries) = burger_and_fries(&system).await;

    let order = system
        .checkout
        .create_order(order_request(&[(burger, 2), (fries, 1)]))
        .await
        .expect("Failed to create order");

    assert_eq!(order.order_status, OrderStatus::New);
    assert_eq!(order.payment_method, PaymentMethod::Unknown);
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.items[0].item_price.amount(), dec!(100.00));
    assert_eq!(order.items[1].item_price.amount(), dec!(50.00));
    assert_eq!(order.total(), dec!(250.00));

    let repriced = system
        .products
        .update_product(burger, ProductUpdate::price(dec!(120.00)))
        .await
        .unwrap();
    assert_eq!(repriced.price.amount(), dec!(120.00));

    let stored = system.orders.get(order.id).await.unwrap().unwrap();
    assert_eq!(stored.items[0].item_price.amount(), dec!(100.00));
    assert_eq!(stored.total(), dec!(250.00));

    // A new order picks up the new price
    let second = system
        .checkout
        .create_order(order_request(&[(burger, 1)]))
        .await
        .unwrap();
    assert_eq!(second.total(), dec!(120.00));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_failed_creation_stores_nothing() {
    let system = FoodcartSystem::new(&FoodcartConfig::default());
    let (burger, fries) = burger_and_fries(&system).await;

    let err = system
        .checkout
        .create_order(order_request(&[]))
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::Validation(ref e) if e.field == "products"));

    // Third line points at a product that does not exist
    let err = system
        .checkout
        .create_order(order_request(&[(burger, 1), (fries, 2), (ProductId(99), 1)]))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        OrderError::Validation(ValidationError::new(
            "products[2].product",
            "invalid pk \"99\" - object does not exist"
        ))
    );

    let err = system
        .checkout
        .create_order(order_request(&[(burger, -3)]))
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::Validation(ref e) if e.field == "products[0].quantity"));

    assert!(system.orders.list_orders().await.unwrap().is_empty());

    // Failed attempts do not block later ones
    let order = system
        .checkout
        .create_order(order_request(&[(fries, 1)]))
        .await
        .unwrap();
    assert_eq!(system.orders.list_orders().await.unwrap(), vec![order]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_lifecycle_and_new_orders_queue() {
    let system = FoodcartSystem::new(&FoodcartConfig::default());
    let (burger, fries) = burger_and_fries(&system).await;

    let first = system
        .checkout
        .create_order(order_request(&[(burger, 1)]))
        .await
        .unwrap();
    let second = system
        .checkout
        .create_order(order_request(&[(fries, 1)]))
        .await
        .unwrap();

    let queue: Vec<_> = system.orders.new_orders().await.unwrap();
    assert_eq!(queue.iter().map(|o| o.id).collect::<Vec<_>>(), vec![first.id, second.id]);

    let processed = system.orders.mark_processed(first.id).await.unwrap();
    assert_eq!(processed.order_status, OrderStatus::Processed);
    assert!(processed.called_at.is_some());
    assert!(processed.delivered_at.is_none());

    let queue = system.orders.new_orders().await.unwrap();
    assert_eq!(queue.iter().map(|o| o.id).collect::<Vec<_>>(), vec![second.id]);

    let err = system.orders.mark_finished(second.id).await.unwrap_err();
    assert_eq!(
        err,
        OrderError::InvalidTransition {
            order: second.id,
            from: OrderStatus::New,
            to: OrderStatus::Finished,
        }
    );

    let finished = system.orders.mark_finished(first.id).await.unwrap();
    assert_eq!(finished.order_status, OrderStatus::Finished);
    assert_eq!(finished.called_at, processed.called_at);
    assert!(finished.delivered_at.is_some());

    assert!(matches!(
        system.orders.mark_processed(first.id).await,
        Err(OrderError::InvalidTransition { .. })
    ));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_mark_processed_has_one_winner() {
    let system = FoodcartSystem::new(&FoodcartConfig::default());
    let (burger, _) = burger_and_fries(&system).await;
    let order = system
        .checkout
        .create_order(order_request(&[(burger, 1)]))
        .await
        .unwrap();

    let attempts: Vec<_> = (0..8)
        .map(|_| {
            let orders = system.orders.clone();
            tokio::spawn(async move { orders.mark_processed(order.id).await })
        })
        .collect();

    let mut wins = 0;
    let mut rejections = 0;
    for attempt in attempts {
        match attempt.await.unwrap() {
            Ok(_) => wins += 1,
            Err(OrderError::InvalidTransition { from, .. }) => {
                assert_eq!(from, OrderStatus::Processed);
                rejections += 1;
            }
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
    assert_eq!((wins, rejections), (1, 7));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_operator_update_keeps_items() {
    let system = FoodcartSystem::new(&FoodcartConfig::default());
    let (burger, _) = burger_and_fries(&system).await;
    let order = system
        .checkout
        .create_order(order_request(&[(burger, 3)]))
        .await
        .unwrap();

    let updated = system
        .orders
        .update_order(
            order.id,
            foodcart::model::OrderUpdate {
                payment_method: Some(PaymentMethod::Online),
                comment: Some("позвонить за час".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.payment_method, PaymentMethod::Online);
    assert_eq!(updated.items, order.items);
    assert_eq!(updated.created_at, order.created_at);

    let err = system
        .orders
        .update_order(
            order.id,
            foodcart::model::OrderUpdate {
                address: Some(String::new()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::Validation(ref e) if e.field == "address"));
    assert_eq!(
        system.orders.get(order.id).await.unwrap().unwrap().address,
        order.address
    );

    let moved = system
        .orders
        .update_order(
            order.id,
            foodcart::model::OrderUpdate {
                address: Some("  Москва, Арбат 10 ".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(moved.address, "Москва, Арбат 10");

    system.orders.delete(order.id).await.unwrap();
    assert!(system.orders.get(order.id).await.unwrap().is_none());
    assert!(matches!(
        system.orders.delete(order.id).await,
        Err(OrderError::NotFound(_))
    ));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_receipt_serialization() {
    let system = FoodcartSystem::new(&FoodcartConfig::default());
    let restaurant = system
        .restaurants
        .create_restaurant(RestaurantCreate::new("Star Burger"))
        .await
        .unwrap();
    let (burger, fries) = burger_and_fries(&system).await;
    system
        .menu_items
        .create_menu_item(MenuItemCreate::new(restaurant, burger))
        .await
        .unwrap();

    let order = system
        .checkout
        .create_order(order_request(&[(burger, 2), (fries, 1)]))
        .await
        .unwrap();
    let receipt = OrderReceipt::new(&order, &FoodcartConfig::default().labels);
    let json = serde_json::to_value(&receipt).unwrap();

    assert_eq!(json["id"], 1);
    assert_eq!(json["phonenumber"], "+79123456789");
    assert_eq!(json["order_status"], "new");
    assert_eq!(json["order_status_label"], "Необработанный");
    assert_eq!(json["payment_method"], "NA");
    assert_eq!(json["payment_method_label"], "Не известно");
    assert_eq!(json["total"], "250.00");
    assert_eq!(
        json["products"],
        serde_json::json!([
            {"product": burger.0, "quantity": 2, "item_price": "100.00"},
            {"product": fries.0, "quantity": 1, "item_price": "50.00"}
        ])
    );

    system.shutdown().await.unwrap();
}
