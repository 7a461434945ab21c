//! eStore — a small storefront over a public product catalog.
//!
//! This crate holds everything the front-ends share: the product model, the
//! filter-state store, the filter evaluator, catalog access, and configuration.
//!
//! # Modules
//!
//! - [`types`] — Products, filter criteria, and configuration types
//! - [`store`] — Filter-state store with synchronous change notification
//! - [`filter`] — Stable, AND-combined filtering of a catalog snapshot
//! - [`catalog`] — Catalog source port, HTTP client, and snapshot state
//! - [`storefront`] — Session wiring store, snapshot, and evaluator together
//! - [`card`] — Product card and detail labels
//! - [`route`] — Listing/product routes and back-stack history

pub mod card;
pub mod catalog;
pub mod filter;
pub mod route;
pub mod store;
pub mod storefront;
pub mod types;

use std::path::Path;

use tracing::{debug, warn};

use types::StoreConfig;

// ---------------------------------------------------------------------------
// .estore.toml config loading
// ---------------------------------------------------------------------------

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".estore.toml";

/// Known keys in `.estore.toml` for config validation.
const KNOWN_CONFIG_KEYS: &[&str] = &["api_base", "timeout_secs", "keywords"];

/// Simple Levenshtein edit distance for typo suggestions.
fn edit_distance(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Load `.estore.toml` from `dir`, falling back to defaults.
pub fn load_store_config(dir: &Path) -> StoreConfig {
    load_store_config_from(&dir.join(CONFIG_FILE_NAME))
}

/// Load configuration from an explicit file path.
///
/// Returns a [`StoreConfig`] with defaults merged with any overrides from the file.
/// If the file doesn't exist or can't be parsed, returns defaults (with a warning
/// for parse failures). Unknown keys trigger a warning with a typo suggestion.
pub fn load_store_config_from(config_path: &Path) -> StoreConfig {
    let mut config = StoreConfig::default();

    if !config_path.exists() {
        return config;
    }
    debug!(path = %config_path.display(), "Loading config");

    let content = match std::fs::read_to_string(config_path) {
        Ok(c) => c,
        Err(e) => {
            warn!(path = %config_path.display(), error = %e, "Could not read config file");
            return config;
        }
    };
    let table = match content.parse::<toml::Table>() {
        Ok(t) => t,
        Err(e) => {
            warn!(path = %config_path.display(), error = %e, "Failed to parse config file");
            return config;
        }
    };

    for key in table.keys() {
        if KNOWN_CONFIG_KEYS.contains(&key.as_str()) {
            continue;
        }
        let suggestion = KNOWN_CONFIG_KEYS.iter().min_by_key(|k| edit_distance(key, k));
        match suggestion {
            Some(s) if edit_distance(key, s) <= 3 => {
                warn!(key = key.as_str(), suggestion = *s, "Unknown config key — did you mean '{s}'?");
            }
            _ => {
                warn!(
                    key = key.as_str(),
                    "Unknown config key (known keys: {})",
                    KNOWN_CONFIG_KEYS.join(", ")
                );
            }
        }
    }

    if let Some(base) = table.get("api_base").and_then(|v| v.as_str()) {
        config.api_base = base.trim_end_matches('/').to_string();
    }

    match table.get("timeout_secs").and_then(|v| v.as_integer()) {
        Some(secs) if secs > 0 => config.timeout_secs = secs as u64,
        Some(secs) => warn!(timeout_secs = secs, "Ignoring non-positive timeout_secs"),
        None => {}
    }

    if let Some(words) = table.get("keywords").and_then(|v| v.as_array()) {
        config.keywords = words.iter().filter_map(|v| v.as_str().map(|s| s.to_string())).collect();
    }

    config
}
