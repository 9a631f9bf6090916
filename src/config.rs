//! Runtime configuration, loaded from TOML.
//!
//! Everything has a default, so an empty file (or no file) gives the stock setup:
//! Russian phone numbering and Russian display labels.
//!
//! ```toml
//! [region]
//! code = "RU"
//! country_code = "7"
//! trunk_prefix = "8"
//! national_number_length = 10
//! leading_digits = "3489"
//!
//! [labels.payment_method]
//! unknown = "Не известно"
//! online = "Электронно"
//! cash = "Наличностью"
//!
//! [actors]
//! buffer_size = 32
//! ```

use crate::model::{OrderStatus, PaymentMethod};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodcartConfig {
    #[serde(default)]
    pub region: RegionConfig,

    #[serde(default)]
    pub labels: LabelsConfig,

    #[serde(default)]
    pub actors: ActorConfig,
}

impl FoodcartConfig {
    /// Load config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

/// Dialing rules of the region whose phone numbers orders are validated against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionConfig {
    /// ISO region code, informational.
    #[serde(default = "default_region_code")]
    pub code: String,

    /// Country calling code without the `+`.
    #[serde(default = "default_country_code")]
    pub country_code: String,

    /// Domestic prefix that may replace `+<country_code>`.
    #[serde(default = "default_trunk_prefix")]
    pub trunk_prefix: String,

    #[serde(default = "default_national_number_length")]
    pub national_number_length: usize,

    /// Digits a national number may start with.
    #[serde(default = "default_leading_digits")]
    pub leading_digits: String,
}

fn default_region_code() -> String {
    "RU".to_string()
}

fn default_country_code() -> String {
    "7".to_string()
}

fn default_trunk_prefix() -> String {
    "8".to_string()
}

fn default_national_number_length() -> usize {
    10
}

fn default_leading_digits() -> String {
    "3489".to_string()
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            code: default_region_code(),
            country_code: default_country_code(),
            trunk_prefix: default_trunk_prefix(),
            national_number_length: default_national_number_length(),
            leading_digits: default_leading_digits(),
        }
    }
}

/// Display labels for the closed enumerations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelsConfig {
    #[serde(default)]
    pub order_status: OrderStatusLabels,

    #[serde(default)]
    pub payment_method: PaymentMethodLabels,
}

impl LabelsConfig {
    pub fn order_status(&self, status: OrderStatus) -> &str {
        match status {
            OrderStatus::New => &self.order_status.new,
            OrderStatus::Processed => &self.order_status.processed,
            OrderStatus::Finished => &self.order_status.finished,
        }
    }

    pub fn payment_method(&self, method: PaymentMethod) -> &str {
        match method {
            PaymentMethod::Unknown => &self.payment_method.unknown,
            PaymentMethod::Online => &self.payment_method.online,
            PaymentMethod::Cash => &self.payment_method.cash,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderStatusLabels {
    pub new: String,
    pub processed: String,
    pub finished: String,
}

impl Default for OrderStatusLabels {
    fn default() -> Self {
        Self {
            new: "Необработанный".to_string(),
            processed: "Обработанный".to_string(),
            finished: "Выполнен".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentMethodLabels {
    pub unknown: String,
    pub online: String,
    pub cash: String,
}

impl Default for PaymentMethodLabels {
    fn default() -> Self {
        Self {
            unknown: "Не известно".to_string(),
            online: "Электронно".to_string(),
            cash: "Наличностью".to_string(),
        }
    }
}

/// Actor runtime settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorConfig {
    /// Mailbox capacity of every actor.
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,
}

fn default_buffer_size() -> usize {
    32
}

impl Default for ActorConfig {
    fn default() -> Self {
        Self {
            buffer_size: default_buffer_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = FoodcartConfig::from_toml_str("").unwrap();
        assert_eq!(config, FoodcartConfig::default());
        assert_eq!(config.region.code, "RU");
        assert_eq!(config.actors.buffer_size, 32);
    }

    #[test]
    fn test_partial_labels_keep_remaining_defaults() {
        let config = FoodcartConfig::from_toml_str(
            r#"
            [labels.payment_method]
            online = "Online"

            [actors]
            buffer_size = 8
            "#,
        )
        .unwrap();

        assert_eq!(config.labels.payment_method(PaymentMethod::Online), "Online");
        assert_eq!(config.labels.payment_method(PaymentMethod::Cash), "Наличностью");
        assert_eq!(config.labels.order_status(OrderStatus::New), "Необработанный");
        assert_eq!(config.actors.buffer_size, 8);
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let err = FoodcartConfig::from_toml_str("[region\ncode = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = FoodcartConfig::load("/nonexistent/foodcart.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
