use crate::error::{check_text, ValidationError};
use crate::model::RestaurantId;
use serde::{Deserialize, Serialize};

/// A restaurant that can sell products through its menu.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub address: String,
    pub contact_phone: String,
}

impl Restaurant {
    pub const NAME_MAX: usize = 50;
    pub const ADDRESS_MAX: usize = 100;
    pub const CONTACT_PHONE_MAX: usize = 50;

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_text("name", &self.name, Self::NAME_MAX, false)?;
        check_text("address", &self.address, Self::ADDRESS_MAX, true)?;
        check_text("contact_phone", &self.contact_phone, Self::CONTACT_PHONE_MAX, true)
    }
}

/// Payload for creating a restaurant.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RestaurantCreate {
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub contact_phone: String,
}

impl RestaurantCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn with_contact_phone(mut self, phone: impl Into<String>) -> Self {
        self.contact_phone = phone.into();
        self
    }
}

/// Payload for updating a restaurant. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RestaurantUpdate {
    pub name: Option<String>,
    pub address: Option<String>,
    pub contact_phone: Option<String>,
}
