//! A single product card: thumbnail, title, price, "View Details".

use dioxus::prelude::*;
use estore_core::card::ProductCard as CardModel;
use estore_core::route::Route;

use crate::state::*;

#[component]
pub fn ProductCard(card: CardModel) -> Element {
    let id = card.id;
    let price = card.price_label();

    rsx! {
        div {
            class: "product-card",
            a {
                href: "{card.href()}",
                onclick: move |e: Event<MouseData>| {
                    e.prevent_default();
                    navigate(Route::Product(id));
                },
                img {
                    class: "product-card-image",
                    src: "{card.image}",
                    alt: "{card.title}",
                }
            }
            div {
                class: "product-card-body",
                h3 { class: "product-card-title", "{card.title}" }
                p { class: "product-card-price", "{price}" }
                button {
                    class: "primary-btn",
                    onclick: move |_| navigate(Route::Product(id)),
                    "View Details"
                }
            }
        }
    }
}
