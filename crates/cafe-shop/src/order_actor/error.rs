//! Error types for the Order actor.

use crate::model::OrderStatus;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// An order must contain at least one item.
    #[error("Order has no items")]
    EmptyOrder,

    #[error("Invalid quantity for {name}: {quantity}")]
    InvalidQuantity { name: String, quantity: u32 },

    /// The submitted total does not match the items.
    #[error("Order total {submitted} does not match items total {computed}")]
    TotalMismatch { submitted: Decimal, computed: Decimal },

    #[error("Delivery orders need a delivery address")]
    MissingDeliveryAddress,

    /// The order data provided is invalid.
    #[error("Order validation error: {0}")]
    ValidationError(String),

    /// The requested status change skips or reverses the lifecycle.
    #[error("Cannot move order from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}
