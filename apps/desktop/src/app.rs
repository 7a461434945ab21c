//! Root application component — sidebar on the left, listing or product page on the right.

use dioxus::prelude::*;
use estore_core::catalog::{CatalogSource, CatalogState, HttpCatalog};
use estore_core::route::Route;

use crate::product::{ProductGrid, ProductPage};
use crate::sidebar::SideBar;
use crate::state::*;

static VARIABLES_CSS: Asset = asset!("/assets/styles/variables.css");
static APP_CSS: Asset = asset!("/assets/styles/app.css");

#[component]
pub fn App() -> Element {
    // Fetch the catalog once; the result is applied whenever it resolves.
    use_future(|| async move {
        let config = CONFIG.read().clone();
        let result = match HttpCatalog::new(&config) {
            Ok(client) => client.fetch_products().await,
            Err(e) => Err(e),
        };
        SHOP.write().apply_catalog(result);
    });

    let route = current_route();

    rsx! {
        document::Stylesheet { href: VARIABLES_CSS }
        document::Stylesheet { href: APP_CSS }

        div {
            class: "app-shell",
            SideBar {}
            main {
                class: "content-area",
                {match route {
                    Route::Listing => rsx! { Listing {} },
                    Route::Product(id) => rsx! { ProductPage { key: "{id}", product_id: id } },
                }}
            }
        }
    }
}

/// Filtered product grid with loading and failure states.
#[component]
fn Listing() -> Element {
    let shop = SHOP.read();

    match shop.catalog() {
        CatalogState::Pending => rsx! {
            div { class: "listing-status", h1 { "Loading..." } }
        },
        CatalogState::Unavailable => {
            let message = shop
                .last_error()
                .map(|e| e.user_message())
                .unwrap_or("The product catalog is unavailable right now.");
            rsx! {
                div { class: "listing-status listing-error", "{message}" }
            }
        }
        CatalogState::Ready(products) => {
            let total = products.len();
            let visible = shop.visible().len();
            rsx! {
                div {
                    class: "listing-header",
                    if visible == total {
                        "{total} products"
                    } else {
                        "{visible} of {total} products"
                    }
                }
                ProductGrid {}
            }
        }
    }
}
