//! Product views — cards, the filtered grid, and the detail page.

mod card;
mod page;

use dioxus::prelude::*;
use estore_core::card::ProductCard as CardModel;

use crate::state::*;
pub use card::ProductCard;
pub use page::ProductPage;

/// Grid of cards for every product passing the current filters.
#[component]
pub fn ProductGrid() -> Element {
    let cards: Vec<CardModel> = SHOP.read().visible().iter().map(CardModel::from).collect();

    if cards.is_empty() {
        return rsx! {
            div { class: "listing-status", "No products match the current filters." }
        };
    }

    rsx! {
        div {
            class: "product-grid",
            for card in cards {
                ProductCard { key: "{card.id}", card }
            }
        }
    }
}
