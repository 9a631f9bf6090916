//! [`ActorEntity`] implementation for [`Order`].
//!
//! Creation is the only step that talks to another actor: every requested product is
//! looked up and its current price copied onto the item. The order is stored only after
//! the last lookup succeeds.

use super::actions::{OrderAction, OrderActionResult};
use super::OrderError;
use crate::clients::{ActorClient, ProductClient};
use crate::error::{check_text, ValidationError};
use crate::framework::ActorEntity;
use crate::model::{Order, OrderCreate, OrderId, OrderItem, OrderStatus, OrderUpdate, Price};
use crate::pricing;
use async_trait::async_trait;
use chrono::Utc;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = ProductClient;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        check_text("firstname", &params.firstname, Order::FIRSTNAME_MAX, false)?;
        check_text("lastname", &params.lastname, Order::LASTNAME_MAX, false)?;
        check_text("address", &params.address, Order::ADDRESS_MAX, false)?;
        if params.lines.is_empty() {
            return Err(ValidationError::new("products", "this list may not be empty").into());
        }

        Ok(Self {
            id,
            firstname: params.firstname,
            lastname: params.lastname,
            address: params.address,
            phonenumber: params.phonenumber,
            created_at: Utc::now(),
            called_at: None,
            delivered_at: None,
            order_status: OrderStatus::New,
            payment_method: params.payment_method,
            comment: params.comment,
            items: params
                .lines
                .into_iter()
                .map(|line| OrderItem {
                    product: line.product,
                    quantity: line.quantity,
                    item_price: Price::ZERO,
                })
                .collect(),
        })
    }

    /// Resolves each product and freezes its price on the item.
    async fn on_create(&mut self, products: &ProductClient) -> Result<(), OrderError> {
        for (index, item) in self.items.iter_mut().enumerate() {
            let product = products
                .get(item.product)
                .await
                .map_err(OrderError::Catalog)?
                .ok_or_else(|| {
                    ValidationError::new(
                        format!("products[{index}].product"),
                        format!("invalid pk \"{}\" - object does not exist", item.product.0),
                    )
                })?;
            item.item_price = pricing::snapshot_item_price(&product);
        }
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: OrderUpdate,
        _products: &ProductClient,
    ) -> Result<(), OrderError> {
        if let Some(address) = update.address {
            let address = address.trim();
            check_text("address", address, Order::ADDRESS_MAX, false)?;
            self.address = address.to_owned();
        }
        if let Some(payment_method) = update.payment_method {
            self.payment_method = payment_method;
        }
        if let Some(comment) = update.comment {
            self.comment = comment;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _products: &ProductClient,
    ) -> Result<OrderActionResult, OrderError> {
        match action {
            OrderAction::Transition(transition) => {
                transition.apply(self, Utc::now())?;
                Ok(OrderActionResult::Transitioned(Box::new(self.clone())))
            }
            OrderAction::DropProduct(product) => {
                let before = self.items.len();
                self.items.retain(|item| item.product != product);
                Ok(OrderActionResult::Dropped(before - self.items.len()))
            }
        }
    }
}
