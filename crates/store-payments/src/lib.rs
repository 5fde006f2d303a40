//! # store-payments
//!
//! Checkout flow and external payment gateway abstraction for neo-store.
//!
//! ## Checkout handoff
//!
//! The external widget owns the whole payment interaction; this crate only
//! builds the session request and reacts to the one completion signal:
//!
//! ```text
//! ┌─────────────┐  SessionRequest  ┌──────────────────┐  outcome   ┌─────────────┐
//! │  Storefront │─────────────────▶│  Payment widget  │───────────▶│  Storefront │
//! │  (cart)     │                  │  (external)      │            │ (cart clear)│
//! └─────────────┘                  └──────────────────┘            └─────────────┘
//! ```
//!
//! The flow is a three-state machine:
//!
//! ```text
//! Idle ──initiate()──▶ AwaitingExternalResult ──Success──▶ Completed
//!   ▲                          │
//!   └──────────Dismissed───────┘        (cart untouched)
//! ```
//!
//! `Completed` is terminal for the session; the cart is cleared exactly
//! once on entry. A dismissed widget returns the flow to `Idle` so the
//! user can retry — the original storefront left the session waiting
//! forever in that case, which is not worth preserving.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use store_payments::{CheckoutFlow, PaymentConfig, PaymentGateway};
//!
//! let mut flow = CheckoutFlow::new(PaymentConfig::from_env()?);
//!
//! let request = flow.initiate(&cart)?;
//! let outcome = gateway.open(request).await?;
//! flow.resolve(&mut cart, outcome)?;
//! ```

mod checkout;
mod config;
mod error;
mod gateway;

pub use checkout::{CheckoutFlow, CheckoutState};
pub use config::{PaymentConfig, Prefill, CURRENCY};
pub use error::{PaymentError, Result};
pub use gateway::{MockGateway, PaymentGateway, PaymentOutcome, SessionRequest};
