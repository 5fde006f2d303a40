//! UI Components

use leptos::prelude::*;

use store_core::{CartLine, Product};

/// Product card for the catalog grid
#[component]
pub fn ProductCard(product: Product, on_add: Callback<Product>) -> impl IntoView {
    let added = product.clone();

    view! {
        <div class="product-card">
            <h3 class="product-title">{product.title.clone()}</h3>
            <p class="product-description">{product.description.clone()}</p>
            <img class="product-image" src=product.image.clone() alt=product.title.clone() />
            <div class="product-footer">
                <span class="price">{format!("INR {:.2}", product.price)}</span>
                <button class="btn btn-primary" on:click=move |_| on_add.run(added.clone())>
                    "Add to Cart"
                </button>
            </div>
            <p class="rating">
                {format!("Rating: {} ({} reviews)", product.rating.rate, product.rating.count)}
            </p>
        </div>
    }
}

/// One line of the cart panel with quantity stepper and remove button
#[component]
pub fn CartRow(
    line: CartLine,
    on_decrement: Callback<u64>,
    on_increment: Callback<u64>,
    on_remove: Callback<u64>,
) -> impl IntoView {
    let id = line.id;

    view! {
        <div class="cart-row">
            <img class="cart-thumb" src=line.image.clone() alt=line.name.clone() />
            <div class="cart-row-info">
                <h4>{line.name.clone()}</h4>
                <p class="price">{format!("INR {:.2}", line.price)}</p>
            </div>
            <div class="cart-row-actions">
                <button class="btn btn-outline" on:click=move |_| on_decrement.run(id)>"−"</button>
                <span class="quantity">{line.quantity}</span>
                <button class="btn btn-outline" on:click=move |_| on_increment.run(id)>"+"</button>
                <button class="btn btn-ghost" on:click=move |_| on_remove.run(id)>"Remove"</button>
            </div>
        </div>
    }
}
