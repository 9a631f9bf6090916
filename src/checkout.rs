//! Order creation from a customer request.
//!
//! A [`CreateOrderRequest`] is what arrives on the wire. [`CreateOrderRequest::validate`]
//! checks everything that can be checked without the catalog and turns it into an
//! [`OrderCreate`]. [`Checkout::create_order`] then hands that to the order actor, which
//! resolves the products and snapshots their prices before anything is stored.

use crate::clients::OrderClient;
use crate::config::{LabelsConfig, RegionConfig};
use crate::error::{check_text, ValidationError};
use crate::model::{
    Order, OrderCreate, OrderId, OrderLine, OrderStatus, PaymentMethod, PhoneNumber, Price,
    ProductId,
};
use crate::order_actor::OrderError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// One requested product line. `quantity` is kept signed so a negative value reaches
/// validation instead of failing deserialization.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RequestedLine {
    pub product: ProductId,
    pub quantity: i64,
}

/// Order payload as submitted by a customer.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderRequest {
    pub address: String,
    pub firstname: String,
    pub lastname: String,
    pub phonenumber: String,
    pub products: Vec<RequestedLine>,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub comment: String,
}

impl CreateOrderRequest {
    /// Reports the first offending field. Product existence is checked later, by the
    /// order actor. Names and address are stored trimmed.
    pub fn validate(self, region: &RegionConfig) -> Result<OrderCreate, ValidationError> {
        let firstname = self.firstname.trim().to_owned();
        let lastname = self.lastname.trim().to_owned();
        let address = self.address.trim().to_owned();
        check_text("firstname", &firstname, Order::FIRSTNAME_MAX, false)?;
        check_text("lastname", &lastname, Order::LASTNAME_MAX, false)?;
        check_text("address", &address, Order::ADDRESS_MAX, false)?;
        let phonenumber = PhoneNumber::parse(&self.phonenumber, region)
            .map_err(|e| ValidationError::new("phonenumber", e.to_string()))?;

        if self.products.is_empty() {
            return Err(ValidationError::new("products", "this list may not be empty"));
        }
        let lines = self
            .products
            .iter()
            .enumerate()
            .map(|(index, line)| {
                let field = format!("products[{index}].quantity");
                if line.quantity < 0 {
                    return Err(ValidationError::new(
                        field,
                        "ensure this value is greater than or equal to 0",
                    ));
                }
                let quantity = u32::try_from(line.quantity).map_err(|_| {
                    ValidationError::new(
                        field,
                        format!("ensure this value is less than or equal to {}", u32::MAX),
                    )
                })?;
                Ok(OrderLine {
                    product: line.product,
                    quantity,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(OrderCreate {
            firstname,
            lastname,
            address,
            phonenumber,
            payment_method: self.payment_method,
            comment: self.comment,
            lines,
        })
    }
}

/// Entry point for placing orders.
#[derive(Clone)]
pub struct Checkout {
    orders: OrderClient,
    region: RegionConfig,
}

impl Checkout {
    pub fn new(orders: OrderClient, region: RegionConfig) -> Self {
        Self { orders, region }
    }

    /// Validates, stores and returns the order with its frozen prices. On any error
    /// nothing is stored.
    #[instrument(skip(self, request))]
    pub async fn create_order(&self, request: CreateOrderRequest) -> Result<Order, OrderError> {
        debug!(?request, "create_order called");
        let params = request.validate(&self.region)?;
        let order = self.orders.create_order(params).await?;
        info!(id = %order.id, total = %order.total(), items = order.items.len(), "Order placed");
        Ok(order)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReceiptLine {
    pub product: ProductId,
    pub quantity: u32,
    pub item_price: Price,
}

/// What the customer gets back after placing an order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderReceipt {
    pub id: OrderId,
    pub address: String,
    pub firstname: String,
    pub lastname: String,
    pub phonenumber: PhoneNumber,
    pub products: Vec<ReceiptLine>,
    pub order_status: OrderStatus,
    pub order_status_label: String,
    pub payment_method: PaymentMethod,
    pub payment_method_label: String,
    pub comment: String,
    pub total: Decimal,
}

impl OrderReceipt {
    pub fn new(order: &Order, labels: &LabelsConfig) -> Self {
        Self {
            id: order.id,
            address: order.address.clone(),
            firstname: order.firstname.clone(),
            lastname: order.lastname.clone(),
            phonenumber: order.phonenumber.clone(),
            products: order
                .items
                .iter()
                .map(|item| ReceiptLine {
                    product: item.product,
                    quantity: item.quantity,
                    item_price: item.item_price,
                })
                .collect(),
            order_status: order.order_status,
            order_status_label: labels.order_status(order.order_status).to_string(),
            payment_method: order.payment_method,
            payment_method_label: labels.payment_method(order.payment_method).to_string(),
            comment: order.comment.clone(),
            total: order.total(),
        }
    }
}
