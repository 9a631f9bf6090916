use crate::error::{check_text, ValidationError};
use crate::model::CategoryId;
use serde::{Deserialize, Serialize};

/// Optional grouping for products.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCategory {
    pub id: CategoryId,
    pub name: String,
}

impl ProductCategory {
    pub const NAME_MAX: usize = 50;

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_text("name", &self.name, Self::NAME_MAX, false)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductCategoryCreate {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductCategoryUpdate {
    pub name: Option<String>,
}
