//! Category radio list, derived from the loaded catalog.

use dioxus::prelude::*;

use crate::state::*;

#[component]
pub fn CategoryList() -> Element {
    let shop = SHOP.read();
    let selected = shop.filters().selected_category.clone();
    let categories = shop.categories().to_vec();

    rsx! {
        div {
            class: "category-list",
            for category in categories {
                label {
                    key: "{category}",
                    class: "category-option",
                    input {
                        r#type: "radio",
                        name: "category",
                        value: "{category}",
                        checked: selected == category,
                        onchange: {
                            let category = category.clone();
                            move |_| {
                                let category = category.clone();
                                SHOP.write().update_filters(|f| f.set_selected_category(category));
                            }
                        },
                    }
                    span { "{category.to_uppercase()}" }
                }
            }
        }
    }
}
