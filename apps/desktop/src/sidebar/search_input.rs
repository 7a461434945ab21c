//! Free-text search field and the min/max price boxes.

use dioxus::prelude::*;
use estore_core::filter::parse_price_input;

use crate::state::*;

#[component]
pub fn SearchInput() -> Element {
    let query = SHOP.read().filters().search_query.clone();

    rsx! {
        input {
            class: "text-input",
            r#type: "text",
            placeholder: "Search Products",
            value: "{query}",
            oninput: move |e: Event<FormData>| {
                let value = e.value();
                SHOP.write().update_filters(|f| f.set_search_query(value));
            },
        }
    }
}

/// Which bound a price box edits.
#[derive(Clone, Copy, PartialEq)]
enum Bound {
    Min,
    Max,
}

#[component]
pub fn PriceRange() -> Element {
    // A reset remounts both boxes, which drops any draft text they hold.
    let resets = SHOP.read().filter_resets();

    rsx! {
        div {
            class: "price-range",
            PriceBox { key: "{resets}-min", bound: Bound::Min }
            PriceBox { key: "{resets}-max", bound: Bound::Max }
        }
    }
}

/// Price text box. Keeps the raw text the user typed, so "12." or "abc"
/// stay visible while the store holds the parsed bound (or none).
#[component]
fn PriceBox(bound: Bound) -> Element {
    let mut draft = use_signal(|| {
        let shop = SHOP.read();
        let current = match bound {
            Bound::Min => shop.filters().min_price,
            Bound::Max => shop.filters().max_price,
        };
        current.map(|v| v.to_string()).unwrap_or_default()
    });
    let placeholder = match bound {
        Bound::Min => "Min Price",
        Bound::Max => "Max Price",
    };

    rsx! {
        input {
            class: "text-input price-input",
            r#type: "text",
            placeholder: placeholder,
            value: "{draft}",
            oninput: move |e: Event<FormData>| {
                let text = e.value();
                let value = parse_price_input(&text);
                draft.set(text);
                SHOP.write().update_filters(|f| match bound {
                    Bound::Min => f.set_min_price(value),
                    Bound::Max => f.set_max_price(value),
                });
            },
        }
    }
}
