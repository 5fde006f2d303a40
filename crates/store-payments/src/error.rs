//! Payment Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, PaymentError>;

/// Payment-related errors
#[derive(Error, Debug)]
pub enum PaymentError {
    /// Checkout requires at least one cart line
    #[error("Cart is empty")]
    EmptyCart,

    /// Operation not allowed in the current checkout state
    #[error("Invalid checkout state: {0}")]
    InvalidState(&'static str),

    /// Cart total could not be expressed in integer minor units
    #[error("Invalid amount: {0}")]
    Amount(String),

    /// External widget failed to open or report back
    #[error("Gateway error: {0}")]
    Gateway(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PaymentError {
    /// Get user-friendly message
    pub fn user_message(&self) -> &str {
        match self {
            PaymentError::EmptyCart => "Your cart is empty.",
            PaymentError::Gateway(_) => "Payment processing failed. Please try again.",
            PaymentError::Config(_) => "Payments are not configured.",
            _ => "An error occurred processing your request.",
        }
    }
}
