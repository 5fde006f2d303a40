//! Checkout Flow
//!
//! The state machine driving the handoff from the cart to the external
//! payment widget. States: `Idle → AwaitingExternalResult → Completed`.
//!
//! The amount is captured from the cart total at the instant checkout is
//! initiated, converted to integer minor units. The widget's success
//! signal is the only path to `Completed`; entering `Completed` clears
//! the cart exactly once. A dismissed widget returns the flow to `Idle`
//! with the cart untouched.

use chrono::Utc;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use uuid::Uuid;

use store_core::Cart;

use crate::config::{PaymentConfig, CURRENCY};
use crate::error::{PaymentError, Result};
use crate::gateway::{PaymentOutcome, SessionRequest};

/// Checkout flow states
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckoutState {
    /// No checkout in progress
    Idle,

    /// The external widget owns the interaction surface
    AwaitingExternalResult,

    /// The widget reported success and the cart was cleared; terminal
    /// for this session
    Completed,
}

/// The checkout state machine
#[derive(Clone, Debug)]
pub struct CheckoutFlow {
    config: PaymentConfig,
    state: CheckoutState,
}

impl CheckoutFlow {
    pub fn new(config: PaymentConfig) -> Self {
        Self {
            config,
            state: CheckoutState::Idle,
        }
    }

    pub fn state(&self) -> CheckoutState {
        self.state
    }

    /// Start a checkout from the current cart.
    ///
    /// Requires `Idle`, a non-empty cart, and a configured integration
    /// key. On success the flow moves to `AwaitingExternalResult` and the
    /// returned request must be handed to a [`crate::PaymentGateway`];
    /// the eventual outcome goes back through [`CheckoutFlow::resolve`].
    pub fn initiate(&mut self, cart: &Cart) -> Result<SessionRequest> {
        if self.state != CheckoutState::Idle {
            return Err(PaymentError::InvalidState("checkout already in progress"));
        }
        if cart.is_empty() {
            return Err(PaymentError::EmptyCart);
        }
        if !self.config.is_configured() {
            return Err(PaymentError::Config("payment key missing".into()));
        }

        let amount = minor_units(cart.total())?;
        let request = SessionRequest {
            session_id: Uuid::new_v4(),
            key: self.config.key_id.clone(),
            amount,
            currency: CURRENCY.into(),
            name: self.config.name.clone(),
            description: self.config.description.clone(),
            prefill: self.config.prefill.clone(),
            order_id: String::new(),
            created_at: Utc::now(),
        };

        self.state = CheckoutState::AwaitingExternalResult;
        tracing::info!(
            session_id = %request.session_id,
            amount,
            "Checkout initiated, handing off to payment widget"
        );

        Ok(request)
    }

    /// Apply the widget's completion signal.
    ///
    /// `Success` clears the cart and moves to `Completed`; `Dismissed`
    /// returns to `Idle` leaving the cart intact. Only legal while
    /// `AwaitingExternalResult`.
    pub fn resolve(&mut self, cart: &mut Cart, outcome: PaymentOutcome) -> Result<CheckoutState> {
        if self.state != CheckoutState::AwaitingExternalResult {
            return Err(PaymentError::InvalidState("no checkout in progress"));
        }

        match outcome {
            PaymentOutcome::Success(_) => {
                cart.clear();
                self.state = CheckoutState::Completed;
                tracing::info!("Payment succeeded, cart cleared");
            }
            PaymentOutcome::Dismissed => {
                self.state = CheckoutState::Idle;
                tracing::warn!("Payment widget dismissed, cart retained");
            }
        }

        Ok(self.state)
    }

    /// Return to `Idle` for a fresh session once the cart is repopulated
    pub fn reset(&mut self) {
        self.state = CheckoutState::Idle;
    }
}

/// Convert a cart total to integer minor units (×100, truncating any
/// sub-minor remainder toward zero).
fn minor_units(total: Decimal) -> Result<i64> {
    (total * Decimal::ONE_HUNDRED)
        .trunc()
        .to_i64()
        .ok_or_else(|| PaymentError::Amount(format!("total {total} out of range")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::{MockGateway, PaymentGateway};
    use rust_decimal_macros::dec;
    use store_core::Product;

    fn config() -> PaymentConfig {
        PaymentConfig::new("rzp_test_key")
    }

    fn cart_with(prices: &[(u64, Decimal, u32)]) -> Cart {
        let mut cart = Cart::new();
        for &(id, price, quantity) in prices {
            let product = Product::new(id, format!("Product {id}"), price);
            for _ in 0..quantity {
                cart.add(&product);
            }
        }
        cart
    }

    #[test]
    fn test_minor_units() {
        assert_eq!(minor_units(dec!(21.00)).unwrap(), 2100);
        assert_eq!(minor_units(dec!(0)).unwrap(), 0);
        // Sub-paise fractions truncate toward zero.
        assert_eq!(minor_units(dec!(10.999)).unwrap(), 1099);
    }

    #[test]
    fn test_initiate_requires_non_empty_cart() {
        let mut flow = CheckoutFlow::new(config());
        let cart = Cart::new();

        assert!(matches!(
            flow.initiate(&cart),
            Err(PaymentError::EmptyCart)
        ));
        assert_eq!(flow.state(), CheckoutState::Idle);
    }

    #[test]
    fn test_initiate_requires_key() {
        let mut flow = CheckoutFlow::new(PaymentConfig::new(""));
        let cart = cart_with(&[(1, dec!(10.00), 1)]);

        assert!(matches!(
            flow.initiate(&cart),
            Err(PaymentError::Config(_))
        ));
    }

    #[test]
    fn test_initiate_captures_amount_at_that_instant() {
        let mut flow = CheckoutFlow::new(config());
        let mut cart = cart_with(&[(1, dec!(10.00), 1), (2, dec!(5.50), 2)]);

        let request = flow.initiate(&cart).unwrap();
        assert_eq!(request.amount, 2100);
        assert_eq!(request.currency, "INR");
        assert_eq!(request.order_id, "");
        assert_eq!(flow.state(), CheckoutState::AwaitingExternalResult);

        // Later cart mutations do not touch the captured amount.
        cart.remove(1);
        assert_eq!(request.amount, 2100);
    }

    #[test]
    fn test_double_initiate_rejected() {
        let mut flow = CheckoutFlow::new(config());
        let cart = cart_with(&[(1, dec!(10.00), 1)]);

        flow.initiate(&cart).unwrap();
        assert!(matches!(
            flow.initiate(&cart),
            Err(PaymentError::InvalidState(_))
        ));
    }

    #[test]
    fn test_resolve_without_initiate_rejected() {
        let mut flow = CheckoutFlow::new(config());
        let mut cart = cart_with(&[(1, dec!(10.00), 1)]);

        let result = flow.resolve(&mut cart, PaymentOutcome::Dismissed);
        assert!(matches!(result, Err(PaymentError::InvalidState(_))));
        assert_eq!(cart.len(), 1);
    }

    #[tokio::test]
    async fn test_success_clears_cart() {
        // add A (10.00) once, B (5.50) twice, remove A: total 11.00
        let mut cart = cart_with(&[(1, dec!(10.00), 1), (2, dec!(5.50), 2)]);
        assert_eq!(cart.total(), dec!(21.00));
        cart.remove(1);
        assert_eq!(cart.total(), dec!(11.00));

        let mut flow = CheckoutFlow::new(config());
        let request = flow.initiate(&cart).unwrap();
        assert_eq!(request.amount, 1100);

        let outcome = MockGateway::succeeding().open(request).await.unwrap();
        let state = flow.resolve(&mut cart, outcome).unwrap();

        assert_eq!(state, CheckoutState::Completed);
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_dismissal_retains_cart_and_allows_retry() {
        let mut cart = cart_with(&[(1, dec!(10.00), 1)]);
        let mut flow = CheckoutFlow::new(config());

        let request = flow.initiate(&cart).unwrap();
        let outcome = MockGateway::dismissing().open(request).await.unwrap();
        let state = flow.resolve(&mut cart, outcome).unwrap();

        assert_eq!(state, CheckoutState::Idle);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), dec!(10.00));

        // The flow is re-initiable without a reset.
        assert!(flow.initiate(&cart).is_ok());
    }

    #[test]
    fn test_completed_is_terminal_until_reset() {
        let mut cart = cart_with(&[(1, dec!(10.00), 1)]);
        let mut flow = CheckoutFlow::new(config());

        let _request = flow.initiate(&cart).unwrap();
        flow.resolve(&mut cart, PaymentOutcome::Success(serde_json::json!({})))
            .unwrap();

        // A repopulated cart alone is not enough; the session is done.
        cart.add(&Product::new(2, "Product 2", dec!(5.50)));
        assert!(matches!(
            flow.initiate(&cart),
            Err(PaymentError::InvalidState(_))
        ));

        flow.reset();
        assert!(flow.initiate(&cart).is_ok());
    }
}
