//! eStore Desktop — Dioxus-powered storefront.

use std::sync::Mutex;

use dioxus::prelude::*;

mod app;
mod product;
mod sidebar;
mod state;

use app::App;
use estore_core::types::StoreConfig;

/// Pre-runtime storage — loaded before Dioxus launches, consumed on first render.
pub static INITIAL_CONFIG: Mutex<Option<StoreConfig>> = Mutex::new(None);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("estore=info")),
        )
        .with_target(false)
        .init();

    let config = match std::env::current_dir() {
        Ok(cwd) => estore_core::load_store_config(&cwd),
        Err(_) => StoreConfig::default(),
    };
    if let Ok(mut slot) = INITIAL_CONFIG.lock() {
        *slot = Some(config);
    }

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        LaunchBuilder::new()
            .with_cfg(
                Config::default()
                    .with_menu(None)
                    .with_background_color((255, 255, 255, 255))
                    .with_window(
                        WindowBuilder::new()
                            .with_title("eStore")
                            .with_inner_size(LogicalSize::new(1280.0, 860.0))
                            .with_min_inner_size(LogicalSize::new(720.0, 480.0))
                            .with_resizable(true),
                    ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}
