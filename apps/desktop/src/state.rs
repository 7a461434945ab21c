//! Global application state using Dioxus signals.
//!
//! The storefront session owns the filter store and the catalog snapshot;
//! components read it through `SHOP` and write only through its filter setters.

use dioxus::prelude::*;
use estore_core::route::{History, Route};
use estore_core::storefront::Storefront;
use estore_core::types::StoreConfig;
use tracing::debug;

use crate::INITIAL_CONFIG;

fn initial_config() -> StoreConfig {
    INITIAL_CONFIG
        .lock()
        .ok()
        .and_then(|mut slot| slot.take())
        .unwrap_or_default()
}

fn new_storefront() -> Storefront {
    let mut shop = Storefront::new();
    shop.update_filters(|filters| {
        filters.subscribe(|state| debug!(?state, "Filters changed"));
    });
    shop
}

// ---------------------------------------------------------------------------
// Global signals
// ---------------------------------------------------------------------------

/// Runtime configuration — taken from the pre-launch slot on first read
pub static CONFIG: GlobalSignal<StoreConfig> = Signal::global(initial_config);

/// Filters, catalog snapshot, and the derived visible list
pub static SHOP: GlobalSignal<Storefront> = Signal::global(new_storefront);

/// Navigation back-stack; the last entry is the page on screen
pub static HISTORY: GlobalSignal<History> = Signal::global(History::default);

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

pub fn current_route() -> Route {
    HISTORY.read().current()
}

pub fn navigate(route: Route) {
    HISTORY.write().push(route);
}

/// Equivalent of the browser's back button.
pub fn go_back() {
    HISTORY.write().back();
}
