//! Error types for mebel-report

use thiserror::Error;

use crate::domain::model::OrderStatus;
use crate::infrastructure::loader::LoaderError;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to load input file: {0}")]
    Loader(#[from] LoaderError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Order {order_id} cannot move from {from} to {to}")]
    InvalidTransition {
        order_id: u32,
        from: OrderStatus,
        to: OrderStatus,
    },

    #[error("Invalid quantity {value:?} for furniture type {kind}")]
    InvalidQuantity { kind: String, value: String },

    #[error("Excel export error: {0}")]
    Excel(String),
}

pub type Result<T> = std::result::Result<T, Error>;
