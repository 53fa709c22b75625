//! Gate configuration: where denied visitors go, where the guarded page lives,
//! which query parameter carries the order id and how records are namespaced.

use crate::gate::location::{Location, OrderId};
use thiserror::Error;

pub const DEFAULT_PAYMENT_PATH: &str = "/sale/buy-course/course/payment";
pub const DEFAULT_ACCESS_PATH: &str = "/sale/buy-course/course/access";
pub const DEFAULT_CONFIRM_PATH: &str = "/sale/buy-course/course/confirm";
pub const DEFAULT_ORDER_PARAM: &str = "order_id";
pub const DEFAULT_STORAGE_PREFIX: &str = "verifiedPayment_";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{field} must be an absolute path, got {value:?}")]
    RelativePath { field: &'static str, value: String },
    #[error("{0} must not be empty")]
    Empty(&'static str),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GateConfig {
    /// Payment entry point; denied visitors are redirected here.
    pub payment_path: String,
    /// The guarded post-purchase page.
    pub access_path: String,
    /// Payment callback page that records verification.
    pub confirm_path: String,
    pub order_param: String,
    pub storage_prefix: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            payment_path: DEFAULT_PAYMENT_PATH.to_string(),
            access_path: DEFAULT_ACCESS_PATH.to_string(),
            confirm_path: DEFAULT_CONFIRM_PATH.to_string(),
            order_param: DEFAULT_ORDER_PARAM.to_string(),
            storage_prefix: DEFAULT_STORAGE_PREFIX.to_string(),
        }
    }
}

impl GateConfig {
    /// # Errors
    /// Returns an error if a path is not absolute or the parameter/prefix is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("payment_path", &self.payment_path),
            ("access_path", &self.access_path),
            ("confirm_path", &self.confirm_path),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Empty(field));
            }
            if !value.starts_with('/') {
                return Err(ConfigError::RelativePath {
                    field,
                    value: value.clone(),
                });
            }
        }

        if self.order_param.trim().is_empty() {
            return Err(ConfigError::Empty("order_param"));
        }
        if self.storage_prefix.is_empty() {
            return Err(ConfigError::Empty("storage_prefix"));
        }

        Ok(())
    }

    pub fn payment_location(&self) -> Location {
        Location::new(self.payment_path.as_str(), None)
    }

    /// Where the payment flow sends the visitor once the record is written.
    pub fn access_location(&self, order_id: &OrderId) -> Location {
        Location::with_param(&self.access_path, &self.order_param, order_id.as_str())
    }
}
