//! Razorpay Widget Binding
//!
//! [`PaymentGateway`] implementation over the `Razorpay` constructor that
//! the provider's script tag injects into the page. The widget owns the
//! interaction surface once opened; it reports back through exactly one
//! of two callbacks: the success handler or the modal dismiss hook.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;
use js_sys::Reflect;
use wasm_bindgen::prelude::*;

use store_payments::{PaymentError, PaymentGateway, PaymentOutcome, Result, SessionRequest};

#[wasm_bindgen]
extern "C" {
    /// `window.Razorpay`, injected by the provider's checkout.js
    type Razorpay;

    #[wasm_bindgen(constructor)]
    fn new(options: &JsValue) -> Razorpay;

    #[wasm_bindgen(method)]
    fn open(this: &Razorpay);
}

/// Gateway backed by the hosted Razorpay checkout widget
pub struct RazorpayGateway;

#[async_trait(?Send)]
impl PaymentGateway for RazorpayGateway {
    async fn open(&self, request: SessionRequest) -> Result<PaymentOutcome> {
        let options = session_options(&request)?;

        // Whichever callback fires first wins; the other finds the
        // sender already taken and is a no-op.
        let (tx, rx) = oneshot::channel::<PaymentOutcome>();
        let tx = Rc::new(RefCell::new(Some(tx)));

        let success_tx = Rc::clone(&tx);
        let on_success = Closure::<dyn FnMut(JsValue)>::new(move |response: JsValue| {
            if let Some(tx) = success_tx.borrow_mut().take() {
                let _ = tx.send(PaymentOutcome::Success(opaque_payload(&response)));
            }
        });

        let dismiss_tx = Rc::clone(&tx);
        let on_dismiss = Closure::<dyn FnMut()>::new(move || {
            if let Some(tx) = dismiss_tx.borrow_mut().take() {
                let _ = tx.send(PaymentOutcome::Dismissed);
            }
        });

        set(&options, "handler", on_success.as_ref())?;
        let modal = js_sys::Object::new();
        set(modal.as_ref(), "ondismiss", on_dismiss.as_ref())?;
        set(&options, "modal", modal.as_ref())?;

        Razorpay::new(&options).open();

        // The widget may call back at any point; the closures must
        // outlive this function.
        on_success.forget();
        on_dismiss.forget();

        rx.await
            .map_err(|_| PaymentError::Gateway("widget dropped without signaling".into()))
    }

    fn name(&self) -> &str {
        "Razorpay"
    }
}

/// Build the widget options object from the session request
fn session_options(request: &SessionRequest) -> Result<JsValue> {
    let json = serde_json::to_string(request)
        .map_err(|e| PaymentError::Gateway(format!("serialize options: {e}")))?;

    js_sys::JSON::parse(&json)
        .map_err(|e| PaymentError::Gateway(format!("parse options: {e:?}")))
}

fn set(target: &JsValue, field: &str, value: &JsValue) -> Result<()> {
    Reflect::set(target, &JsValue::from_str(field), value)
        .map_err(|e| PaymentError::Gateway(format!("set {field}: {e:?}")))?;
    Ok(())
}

/// Round-trip the callback payload through JSON; the content is opaque
/// and unvalidated.
fn opaque_payload(response: &JsValue) -> serde_json::Value {
    js_sys::JSON::stringify(response)
        .ok()
        .and_then(|s| s.as_string())
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or(serde_json::Value::Null)
}
