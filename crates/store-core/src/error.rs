//! Error Types for store-core

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    /// Catalog service responded with a non-success status
    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    /// Get user-friendly message
    pub fn user_message(&self) -> &str {
        match self {
            StoreError::Catalog(_) | StoreError::Network(_) => {
                "Failed to load products. Please reload the page."
            }
            StoreError::Serialization(_) => "An error occurred processing your request.",
        }
    }
}
