//! Core types shared across eStore: catalog products, the list endpoint's
//! response envelope, filter criteria, and runtime configuration.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Catalog records
// ---------------------------------------------------------------------------

/// A single catalog product as served by the remote catalog API.
///
/// Records are read-only: nothing in eStore mutates a product after it has
/// been decoded. Fields the API sends beyond these are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub rating: f64,
    /// The detail endpoint of some catalogs omits this; treat it as uncategorized.
    #[serde(default)]
    pub category: String,
}

impl Product {
    /// First image URL, used as the card thumbnail and detail hero image.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Envelope returned by `GET /products`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductPage {
    pub products: Vec<Product>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub skip: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
}

// ---------------------------------------------------------------------------
// Filter criteria
// ---------------------------------------------------------------------------

/// Every active filter criterion at one point in time.
///
/// Empty strings and `None` bounds mean "no filter" for their dimension.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterState {
    pub search_query: String,
    pub selected_category: String,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub keyword: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no dimension would narrow the catalog.
    pub fn is_default(&self) -> bool {
        self.search_query.is_empty()
            && self.selected_category.is_empty()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.keyword.is_empty()
    }

    /// True when both bounds are set and min exceeds max. Such a range matches nothing.
    pub fn has_inverted_range(&self) -> bool {
        matches!((self.min_price, self.max_price), (Some(min), Some(max)) if min > max)
    }
}

// ---------------------------------------------------------------------------
// Runtime configuration
// ---------------------------------------------------------------------------

/// Base URL of the public catalog service.
pub const DEFAULT_API_BASE: &str = "https://dummyjson.com";

/// HTTP request timeout applied to every catalog request.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Quick-filter keywords offered by the sidebar.
pub const DEFAULT_KEYWORDS: &[&str] = &["apple", "watch", "Fashion", "Shoes", "Shirt"];

/// Runtime configuration. Loaded from `.estore.toml` or defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// Catalog service root, without a trailing slash.
    pub api_base: String,
    pub timeout_secs: u64,
    /// Sidebar quick-filter terms, in display order.
    pub keywords: Vec<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            keywords: DEFAULT_KEYWORDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
