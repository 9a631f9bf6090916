use crate::error::{check_text, ValidationError};
use crate::model::{CategoryId, Price, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Whether a product can be ordered is not stored here: it follows from the restaurant
/// menus, see [`AvailabilityIndex`](crate::availability::AvailabilityIndex).
///
/// The price may change at any time. Orders never read it after creation; each order
/// item carries its own frozen copy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Weak reference: deleting the category clears it.
    pub category: Option<CategoryId>,
    pub price: Price,
    /// Image reference (path or URL).
    pub image: String,
    pub special_status: bool,
    pub description: String,
}

impl Product {
    pub const NAME_MAX: usize = 50;
    pub const IMAGE_MAX: usize = 100;
    pub const DESCRIPTION_MAX: usize = 200;

    /// Checks the text fields. The price is checked when it is parsed.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_text("name", &self.name, Self::NAME_MAX, false)?;
        check_text("image", &self.image, Self::IMAGE_MAX, false)?;
        check_text("description", &self.description, Self::DESCRIPTION_MAX, true)
    }
}

/// Payload for creating a product.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    #[serde(default)]
    pub category: Option<CategoryId>,
    pub price: Decimal,
    pub image: String,
    #[serde(default)]
    pub special_status: bool,
    #[serde(default)]
    pub description: String,
}

impl ProductCreate {
    pub fn new(name: impl Into<String>, price: Decimal, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: None,
            price,
            image: image.into(),
            special_status: false,
            description: String::new(),
        }
    }

    pub fn with_category(mut self, category: CategoryId) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn special(mut self) -> Self {
        self.special_status = true;
        self
    }
}

/// Payload for updating a product. `None` leaves the field unchanged; for `category`,
/// `Some(None)` clears it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub category: Option<Option<CategoryId>>,
    pub price: Option<Decimal>,
    pub image: Option<String>,
    pub special_status: Option<bool>,
    pub description: Option<String>,
}

impl ProductUpdate {
    pub fn price(price: Decimal) -> Self {
        Self {
            price: Some(price),
            ..Self::default()
        }
    }

    pub fn clear_category() -> Self {
        Self {
            category: Some(None),
            ..Self::default()
        }
    }
}
