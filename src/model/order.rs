//! Orders and their line items.

use crate::model::{OrderId, PhoneNumber, Price, ProductId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Where an order is in its delivery lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    New,
    Processed,
    Finished,
}

impl OrderStatus {
    /// Stable code, used on the wire and in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::New => "new",
            OrderStatus::Processed => "processed",
            OrderStatus::Finished => "finished",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Finished)
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the customer intends to pay. Payment itself happens elsewhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[default]
    #[serde(rename = "NA")]
    Unknown,
    #[serde(rename = "ON")]
    Online,
    #[serde(rename = "CH")]
    Cash,
}

impl PaymentMethod {
    pub fn code(&self) -> &'static str {
        match self {
            PaymentMethod::Unknown => "NA",
            PaymentMethod::Online => "ON",
            PaymentMethod::Cash => "CH",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "NA" => Some(PaymentMethod::Unknown),
            "ON" => Some(PaymentMethod::Online),
            "CH" => Some(PaymentMethod::Cash),
            _ => None,
        }
    }
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One product line of an order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderItem {
    pub product: ProductId,
    pub quantity: u32,
    /// Unit price frozen when the order was created.
    pub item_price: Price,
}

impl OrderItem {
    pub fn line_total(&self) -> Decimal {
        self.item_price.times(self.quantity)
    }
}

/// A customer order. Owns its items; the total is derived, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub firstname: String,
    pub lastname: String,
    pub address: String,
    pub phonenumber: PhoneNumber,
    pub created_at: DateTime<Utc>,
    pub called_at: Option<DateTime<Utc>>,
    pub delivered_at: Option<DateTime<Utc>>,
    pub order_status: OrderStatus,
    pub payment_method: PaymentMethod,
    pub comment: String,
    pub items: Vec<OrderItem>,
}

impl Order {
    pub const FIRSTNAME_MAX: usize = 50;
    pub const LASTNAME_MAX: usize = 50;
    pub const ADDRESS_MAX: usize = 200;

    /// Sum of `item_price × quantity` over the items.
    pub fn total(&self) -> Decimal {
        crate::pricing::order_total(self)
    }

    pub fn contains_product(&self, product: ProductId) -> bool {
        self.items.iter().any(|item| item.product == product)
    }
}

/// A requested line, after boundary validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLine {
    pub product: ProductId,
    pub quantity: u32,
}

/// Validated payload for creating an order. Built by
/// [`CreateOrderRequest::validate`](crate::checkout::CreateOrderRequest::validate).
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub firstname: String,
    pub lastname: String,
    pub address: String,
    pub phonenumber: PhoneNumber,
    pub payment_method: PaymentMethod,
    pub comment: String,
    pub lines: Vec<OrderLine>,
}

/// Operator edits to an order. Items and prices cannot be edited.
#[derive(Debug, Clone, Default)]
pub struct OrderUpdate {
    pub address: Option<String>,
    pub payment_method: Option<PaymentMethod>,
    pub comment: Option<String>,
}
