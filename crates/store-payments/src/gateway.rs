//! Payment Gateway Integration
//!
//! Abstraction over the opaque external payment widget. The widget takes
//! over the user interaction surface once opened and reports back through
//! a single completion signal; nothing about its internals is validated.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::Prefill;
use crate::error::Result;

/// Session request handed to the external widget
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionRequest {
    /// Ephemeral session id (local only, never sent to the provider)
    #[serde(skip)]
    pub session_id: Uuid,

    /// Integration key
    pub key: String,

    /// Amount in integer minor units (paise)
    pub amount: i64,

    /// Fixed currency code
    pub currency: String,

    /// Merchant display name
    pub name: String,

    /// Order description
    pub description: String,

    /// Static placeholder buyer identity
    pub prefill: Prefill,

    /// Provider-side order id; the order-linking feature is unused
    pub order_id: String,

    /// When the session was initiated
    #[serde(skip)]
    pub created_at: DateTime<Utc>,
}

/// The widget's completion signal
#[derive(Clone, Debug)]
pub enum PaymentOutcome {
    /// Payment went through; the payload is opaque and unvalidated
    Success(serde_json::Value),

    /// The widget was closed without completing payment
    Dismissed,
}

/// Payment gateway trait (Strategy pattern)
///
/// Implement this per provider widget. `open` hands the interaction
/// surface to the widget and resolves only when the widget reports back;
/// no timeout is enforced.
///
/// Browser-backed implementations hold JS handles, which are not `Send`,
/// so the trait does not require `Send` futures.
#[async_trait(?Send)]
pub trait PaymentGateway {
    /// Open the widget for the given session and wait for its outcome
    async fn open(&self, request: SessionRequest) -> Result<PaymentOutcome>;

    /// Gateway name
    fn name(&self) -> &str;
}

/// Mock gateway for tests and demos.
///
/// Resolves synchronously with a canned outcome instead of opening a
/// widget.
pub struct MockGateway {
    succeed: bool,
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::succeeding()
    }
}

impl MockGateway {
    /// Gateway whose widget always reports success
    pub fn succeeding() -> Self {
        Self { succeed: true }
    }

    /// Gateway whose widget is always closed without paying
    pub fn dismissing() -> Self {
        Self { succeed: false }
    }
}

#[async_trait(?Send)]
impl PaymentGateway for MockGateway {
    async fn open(&self, request: SessionRequest) -> Result<PaymentOutcome> {
        if self.succeed {
            Ok(PaymentOutcome::Success(serde_json::json!({
                "razorpay_payment_id": format!("pay_{}", request.session_id.simple()),
            })))
        } else {
            Ok(PaymentOutcome::Dismissed)
        }
    }

    fn name(&self) -> &str {
        "MockGateway"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PaymentConfig;

    fn request() -> SessionRequest {
        SessionRequest {
            session_id: Uuid::new_v4(),
            key: "rzp_test_key".into(),
            amount: 2100,
            currency: crate::config::CURRENCY.into(),
            name: "Neo Store".into(),
            description: "Payment for your order".into(),
            prefill: PaymentConfig::new("rzp_test_key").prefill,
            order_id: String::new(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_mock_gateway_outcomes() {
        let outcome = MockGateway::succeeding().open(request()).await.unwrap();
        assert!(matches!(outcome, PaymentOutcome::Success(_)));

        let outcome = MockGateway::dismissing().open(request()).await.unwrap();
        assert!(matches!(outcome, PaymentOutcome::Dismissed));
    }

    #[test]
    fn test_session_request_wire_shape() {
        let json = serde_json::to_value(request()).unwrap();

        // Only provider-facing fields go over the wire.
        assert_eq!(json["amount"], 2100);
        assert_eq!(json["currency"], "INR");
        assert_eq!(json["order_id"], "");
        assert!(json.get("session_id").is_none());
        assert!(json.get("created_at").is_none());
    }
}
