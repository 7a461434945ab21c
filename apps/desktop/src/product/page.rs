//! Product detail page — fetched by id, independent of the listing snapshot.

use dioxus::prelude::*;
use estore_core::card::{price_label, rating_label};
use estore_core::catalog::{CatalogSource, HttpCatalog};
use estore_core::types::Product;
use tracing::error;

use crate::state::*;

#[component]
pub fn ProductPage(product_id: u64) -> Element {
    let product = use_resource(move || async move {
        let config = CONFIG.read().clone();
        let result = match HttpCatalog::new(&config) {
            Ok(client) => client.fetch_product(product_id).await,
            Err(e) => Err(e),
        };
        if let Err(e) = &result {
            error!(id = product_id, error = %e, "Error fetching product");
        }
        result
    });

    let body = match &*product.read() {
        None => rsx! { h1 { class: "listing-status", "Loading..." } },
        Some(Err(e)) => rsx! {
            div { class: "listing-status listing-error", "{e.user_message()}" }
        },
        Some(Ok(p)) => rsx! { ProductDetail { product: p.clone() } },
    };

    rsx! {
        div {
            class: "product-page",
            button {
                class: "primary-btn back-btn",
                onclick: move |_| go_back(),
                "Back"
            }
            {body}
        }
    }
}

#[component]
fn ProductDetail(product: Product) -> Element {
    let image = product.primary_image().unwrap_or_default().to_string();

    rsx! {
        div {
            class: "product-detail",
            div {
                class: "product-detail-image",
                img { src: "{image}", alt: "{product.title}" }
            }
            div {
                class: "product-detail-info",
                h1 { "{product.title}" }
                p { class: "product-description", "{product.description}" }
                div {
                    class: "product-meta",
                    p { class: "product-price", "{price_label(product.price)}" }
                    p { class: "product-rating", "Rating: {rating_label(product.rating)}" }
                }
                div {
                    class: "product-actions",
                    // Cart and reviews are not implemented; the buttons are inert.
                    button { class: "cart-btn", "Add to Cart" }
                    button {
                        class: "secondary-btn",
                        onclick: move |_| {
                            let _ = document::eval(
                                "window.scrollTo({ top: document.body.scrollHeight, behavior: 'smooth' });",
                            );
                        },
                        "Add Review"
                    }
                }
            }
        }
        Reviews {}
    }
}

#[component]
fn Reviews() -> Element {
    rsx! {
        section {
            class: "reviews",
            h2 { "Customer Reviews" }
            div {
                class: "reviews-card",
                p { "No reviews yet. Be the first to review this product!" }
                form {
                    onsubmit: move |e: Event<FormData>| e.prevent_default(),
                    label { r#for: "review", "Your Review:" }
                    textarea { id: "review", rows: "4", placeholder: "Write your review here..." }
                    button { r#type: "submit", class: "primary-btn", "Submit Review" }
                }
            }
        }
    }
}
