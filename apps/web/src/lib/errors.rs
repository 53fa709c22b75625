use paygate::gate::{ConfigError, StoreError};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    Storage(String),
    InvalidOrder(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Storage(message) => {
                write!(formatter, "Could not save your purchase: {message}")
            }
            AppError::InvalidOrder(order_id) => {
                if order_id.trim().is_empty() {
                    write!(formatter, "The payment confirmation is missing an order id.")
                } else {
                    write!(formatter, "Order id {order_id:?} is not valid.")
                }
            }
        }
    }
}

impl std::error::Error for AppError {}

impl From<StoreError> for AppError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::InvalidOrderId(raw) => AppError::InvalidOrder(raw),
            StoreError::Storage(message) => AppError::Storage(message),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        AppError::Config(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_map_to_user_messages() {
        let error = AppError::from(StoreError::InvalidOrderId(String::new()));
        assert_eq!(
            error.to_string(),
            "The payment confirmation is missing an order id."
        );

        let error = AppError::from(StoreError::Storage("quota exceeded".to_string()));
        assert_eq!(
            error.to_string(),
            "Could not save your purchase: quota exceeded"
        );
    }

    #[test]
    fn config_errors_keep_field_name() {
        let error = AppError::from(ConfigError::Empty("storage_prefix"));
        assert_eq!(
            error,
            AppError::Config("storage_prefix must not be empty".to_string())
        );
    }
}
