//! Storefront Page
//!
//! Catalog grid plus the slide-up cart panel. All cart state lives in
//! this view for the lifetime of a single page visit; checkout hands the
//! interaction surface to the Razorpay widget and reacts to its single
//! completion signal.

use leptos::prelude::*;

use store_core::{Cart, Product};
use store_payments::{CheckoutFlow, CheckoutState, PaymentConfig, PaymentError, PaymentGateway};

use crate::api;
use crate::components::{CartRow, ProductCard};
use crate::razorpay::RazorpayGateway;

/// Integration key baked in at build time; empty when unset, in which
/// case catalog and cart still work and only checkout refuses.
const RAZORPAY_KEY_ID: &str = match option_env!("RAZORPAY_KEY_ID") {
    Some(key) => key,
    None => "",
};

#[component]
pub fn StorePage() -> impl IntoView {
    let (products, set_products) = signal(Vec::<Product>::new());
    let (load_error, set_load_error) = signal(Option::<String>::None);
    let (loading, set_loading) = signal(true);

    let (cart, set_cart) = signal(Cart::new());
    let (show_cart, set_show_cart) = signal(false);
    let (paying, set_paying) = signal(false);
    let (payment_success, set_payment_success) = signal(false);
    let (pay_error, set_pay_error) = signal(Option::<String>::None);

    let flow = StoredValue::new(CheckoutFlow::new(PaymentConfig::new(RAZORPAY_KEY_ID)));

    // One catalog fetch per page view; failure keeps no partial list.
    leptos::task::spawn_local(async move {
        match api::fetch_products().await {
            Ok(list) => set_products.set(list),
            Err(message) => set_load_error.set(Some(message)),
        }
        set_loading.set(false);
    });

    let on_add = Callback::new(move |product: Product| {
        set_cart.update(|cart| cart.add(&product));
    });
    let on_increment = Callback::new(move |id: u64| {
        set_cart.update(|cart| {
            let quantity = cart.lines().iter().find(|l| l.id == id).map(|l| l.quantity);
            if let Some(q) = quantity {
                cart.update_quantity(id, q + 1);
            }
        });
    });
    let on_decrement = Callback::new(move |id: u64| {
        set_cart.update(|cart| {
            let quantity = cart.lines().iter().find(|l| l.id == id).map(|l| l.quantity);
            if let Some(q) = quantity {
                // q - 1 == 0 is absorbed as a no-op by the cart
                cart.update_quantity(id, q.saturating_sub(1));
            }
        });
    });
    let on_remove = Callback::new(move |id: u64| {
        set_cart.update(|cart| cart.remove(id));
    });

    let pay = move |_| {
        let initiated = flow
            .try_update_value(|f| f.initiate(&cart.get_untracked()))
            .unwrap_or(Err(PaymentError::InvalidState("flow unavailable")));

        let request = match initiated {
            Ok(request) => request,
            Err(e) => {
                set_pay_error.set(Some(e.user_message().to_string()));
                return;
            }
        };

        set_pay_error.set(None);
        set_paying.set(true);

        leptos::task::spawn_local(async move {
            let outcome = match RazorpayGateway.open(request).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    set_pay_error.set(Some(e.user_message().to_string()));
                    flow.update_value(CheckoutFlow::reset);
                    set_paying.set(false);
                    return;
                }
            };

            set_cart.update(|cart| {
                let resolved = flow.try_update_value(|f| f.resolve(cart, outcome));
                if let Some(Ok(CheckoutState::Completed)) = resolved {
                    set_payment_success.set(true);
                    set_show_cart.set(false);
                }
            });
            set_paying.set(false);
        });
    };

    view! {
        <div class="store">
            <div class="cart-toggle">
                <button class="btn btn-outline" on:click=move |_| set_show_cart.update(|v| *v = !*v)>
                    "Cart"
                    <Show when=move || !cart.with(Cart::is_empty)>
                        <span class="badge">{move || cart.with(Cart::len)}</span>
                    </Show>
                </button>
            </div>

            <h1>"Neo Store"</h1>

            <Show when=move || loading.get()>
                <p class="loading">"Loading..."</p>
            </Show>

            <Show when=move || load_error.get().is_some()>
                <p class="error">{move || load_error.get().unwrap_or_default()}</p>
            </Show>

            <div class="product-grid">
                <For
                    each=move || products.get()
                    key=|product| product.id
                    children=move |product| view! { <ProductCard product on_add /> }
                />
            </div>

            <Show when=move || show_cart.get()>
                <div class="cart-panel">
                    <div class="cart-header">
                        <h2>"Your Cart"</h2>
                        <button class="btn btn-ghost" on:click=move |_| set_show_cart.set(false)>
                            "✕"
                        </button>
                    </div>

                    <Show
                        when=move || !cart.with(Cart::is_empty)
                        fallback=|| view! { <p class="cart-empty">"Your cart is empty"</p> }
                    >
                        <For
                            each=move || cart.get().lines().to_vec()
                            key=|line| (line.id, line.quantity)
                            children=move |line| {
                                view! {
                                    <CartRow line on_decrement on_increment on_remove />
                                }
                            }
                        />
                    </Show>

                    <div class="cart-total">
                        <span>"Total:"</span>
                        <span>{move || format!("INR {:.2}", cart.get().total())}</span>
                    </div>

                    <Show when=move || pay_error.get().is_some()>
                        <p class="error">{move || pay_error.get().unwrap_or_default()}</p>
                    </Show>

                    <Show
                        when=move || !payment_success.get()
                        fallback=|| {
                            view! {
                                <p class="success">"Payment successful! Thank you for your order."</p>
                            }
                        }
                    >
                        <button
                            class="btn btn-primary btn-wide"
                            on:click=pay
                            disabled=move || cart.with(Cart::is_empty) || paying.get()
                        >
                            {move || if paying.get() { "Waiting for payment..." } else { "Proceed to Payment" }}
                        </button>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
