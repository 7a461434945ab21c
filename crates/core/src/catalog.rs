//! Catalog access: the [`CatalogSource`] port, its HTTP implementation, and
//! the snapshot state the rest of eStore reads from.
//!
//! The catalog is an external collaborator. Failures are reported once as a
//! [`CatalogError`]; nothing here retries.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::types::{Product, ProductPage, StoreConfig};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Ways a catalog fetch can fail.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// Transport failure: DNS, connect, TLS, timeout.
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("catalog returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// The body did not match the product schema.
    #[error("could not decode catalog response: {0}")]
    Decode(String),
}

impl CatalogError {
    /// Short message suitable for display in the UI.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Network(_) => "Could not reach the product catalog.",
            Self::Status { status: 404, .. } => "That product does not exist.",
            Self::Status { .. } => "The product catalog is unavailable right now.",
            Self::Decode(_) => "The product catalog sent an unexpected response.",
        }
    }
}

// ---------------------------------------------------------------------------
// Source port
// ---------------------------------------------------------------------------

/// Anything that can list the catalog and resolve a product by id.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the full product list.
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError>;

    /// Fetch a single product by id.
    async fn fetch_product(&self, id: u64) -> Result<Product, CatalogError>;
}

/// Catalog backed by a dummyjson-style REST API.
#[derive(Clone)]
pub struct HttpCatalog {
    client: Client,
    api_base: String,
}

impl HttpCatalog {
    pub fn new(config: &StoreConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("estore/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CatalogError::Network(e.to_string()))?;
        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    fn products_url(&self) -> String {
        format!("{}/products", self.api_base)
    }

    fn product_url(&self, id: u64) -> String {
        format!("{}/products/{id}", self.api_base)
    }

    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, CatalogError> {
        debug!(url, "Fetching from catalog");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status { status: status.as_u16(), url: url.to_string() });
        }

        let body = response.bytes().await.map_err(|e| CatalogError::Network(e.to_string()))?;
        Ok(body.to_vec())
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let body = self.get_bytes(&self.products_url()).await?;
        let page: ProductPage =
            serde_json::from_slice(&body).map_err(|e| CatalogError::Decode(e.to_string()))?;
        debug!(count = page.products.len(), total = ?page.total, "Catalog page decoded");
        Ok(page.products)
    }

    async fn fetch_product(&self, id: u64) -> Result<Product, CatalogError> {
        let body = self.get_bytes(&self.product_url(id)).await?;
        serde_json::from_slice(&body).map_err(|e| CatalogError::Decode(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Snapshot state
// ---------------------------------------------------------------------------

/// What is currently known about the catalog.
#[derive(Debug, Clone, Default)]
pub enum CatalogState {
    /// No fetch has resolved yet. Reads see an empty catalog.
    #[default]
    Pending,
    /// The most recent successful fetch.
    Ready(Arc<[Product]>),
    /// The first fetch failed and nothing was ever loaded.
    Unavailable,
}

impl CatalogState {
    /// The snapshot to filter. Empty until a fetch succeeds.
    pub fn products(&self) -> &[Product] {
        match self {
            Self::Ready(products) => products,
            Self::Pending | Self::Unavailable => &[],
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

/// Distinct product categories in first-seen order.
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    products
        .iter()
        .filter(|p| seen.insert(p.category.as_str()))
        .map(|p| p.category.clone())
        .collect()
}
