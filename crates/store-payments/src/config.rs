//! Payment Configuration
//!
//! The integration key is process-wide configuration injected at startup
//! and passed into [`crate::CheckoutFlow`] explicitly, never read ad hoc,
//! so the flow stays testable with a substituted value.

use serde::{Deserialize, Serialize};

use crate::error::{PaymentError, Result};

/// Fixed display/settlement currency
pub const CURRENCY: &str = "INR";

/// Merchant display name shown by the widget
const STORE_NAME: &str = "Neo Store";

/// Order description shown by the widget
const ORDER_DESCRIPTION: &str = "Payment for your order";

/// Configuration for the external payment widget
#[derive(Clone, Debug)]
pub struct PaymentConfig {
    /// Integration key (environment-supplied, not embedded in source)
    pub key_id: String,

    /// Merchant display name
    pub name: String,

    /// Order description
    pub description: String,

    /// Buyer prefill shown by the widget
    pub prefill: Prefill,
}

/// Static placeholder buyer identity for the widget's prefill block
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Prefill {
    pub name: String,
    pub email: String,
    pub contact: String,
}

impl Default for Prefill {
    fn default() -> Self {
        Self {
            name: "Customer Name".into(),
            email: "customer@example.com".into(),
            contact: "9999999999".into(),
        }
    }
}

impl PaymentConfig {
    /// Create a config with the given integration key.
    ///
    /// An empty key is accepted here; [`crate::CheckoutFlow::initiate`]
    /// rejects it so that the catalog and cart flows keep working when
    /// payments are unconfigured.
    pub fn new(key_id: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            name: STORE_NAME.into(),
            description: ORDER_DESCRIPTION.into(),
            prefill: Prefill::default(),
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        let key_id = std::env::var("RAZORPAY_KEY_ID")
            .map_err(|_| PaymentError::Config("RAZORPAY_KEY_ID not set".into()))?;

        Ok(Self::new(key_id))
    }

    /// Whether an integration key is present
    pub fn is_configured(&self) -> bool {
        !self.key_id.is_empty()
    }
}
