//! Quick-filter keyword buttons.

use dioxus::prelude::*;

use crate::state::*;

#[component]
pub fn KeywordList() -> Element {
    let keywords = CONFIG.read().keywords.clone();
    let active = SHOP.read().filters().keyword.clone();

    rsx! {
        div {
            class: "keyword-list",
            for keyword in keywords {
                button {
                    key: "{keyword}",
                    class: if active == keyword { "keyword-btn active" } else { "keyword-btn" },
                    onclick: {
                        let keyword = keyword.clone();
                        move |_| {
                            let keyword = keyword.clone();
                            SHOP.write().update_filters(|f| f.set_keyword(keyword));
                        }
                    },
                    "{keyword.to_uppercase()}"
                }
            }
        }
    }
}
