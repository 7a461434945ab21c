//! Sidebar components — search, price range, categories, keywords, reset.

mod category_list;
mod keyword_list;
mod search_input;

use dioxus::prelude::*;

use crate::state::*;
use category_list::CategoryList;
use keyword_list::KeywordList;
use search_input::{PriceRange, SearchInput};

#[component]
pub fn SideBar() -> Element {
    rsx! {
        aside {
            class: "sidebar",
            h1 { class: "sidebar-title", "eStore" }

            section {
                class: "sidebar-section",
                SearchInput {}
                PriceRange {}
            }

            section {
                class: "sidebar-section",
                h2 { class: "sidebar-heading", "Categories" }
                CategoryList {}
            }

            section {
                class: "sidebar-section",
                h2 { class: "sidebar-heading", "Keywords" }
                KeywordList {}
                button {
                    class: "reset-btn",
                    onclick: move |_| SHOP.write().reset_filters(),
                    "Reset Filters"
                }
            }
        }
    }
}
