//! Storefront session: ties the filter store, the catalog snapshot, and the
//! evaluator together so the visible product list is always derived from the
//! current snapshot and the current criteria.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::catalog::{categories, CatalogError, CatalogState};
use crate::filter::evaluate_owned;
use crate::store::FilterStore;
use crate::types::{FilterState, Product};

#[derive(Debug, Default)]
pub struct Storefront {
    filters: FilterStore,
    catalog: CatalogState,
    categories: Vec<String>,
    visible: Vec<Product>,
    last_error: Option<CatalogError>,
}

impl Storefront {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the outcome of a catalog fetch.
    ///
    /// A failure is logged and otherwise ignored: the previous snapshot (if
    /// any) stays in place and a pending catalog becomes unavailable.
    pub fn apply_catalog(&mut self, result: Result<Vec<Product>, CatalogError>) {
        match result {
            Ok(products) => {
                info!(products = products.len(), "Catalog loaded");
                self.categories = categories(&products);
                self.catalog = CatalogState::Ready(Arc::from(products));
                self.last_error = None;
            }
            Err(e) => {
                error!(error = %e, "Error fetching products");
                if matches!(self.catalog, CatalogState::Pending) {
                    self.catalog = CatalogState::Unavailable;
                }
                self.last_error = Some(e);
            }
        }
        self.refresh();
    }

    /// Run a mutation against the filter store, then re-derive the visible list.
    pub fn update_filters<R>(&mut self, mutate: impl FnOnce(&mut FilterStore) -> R) -> R {
        let out = mutate(&mut self.filters);
        self.refresh();
        out
    }

    /// Shorthand for a full reset.
    pub fn reset_filters(&mut self) {
        self.update_filters(FilterStore::reset_filters);
    }

    fn refresh(&mut self) {
        let state = self.filters.state();
        if state.has_inverted_range() {
            warn!(min = ?state.min_price, max = ?state.max_price, "Minimum price exceeds maximum; nothing can match");
        }
        self.visible = evaluate_owned(self.catalog.products(), state);
        debug!(
            visible = self.visible.len(),
            catalog = self.catalog.products().len(),
            "Product list re-evaluated"
        );
    }

    /// Products passing the current filters, in catalog order.
    pub fn visible(&self) -> &[Product] {
        &self.visible
    }

    pub fn filters(&self) -> &FilterState {
        self.filters.state()
    }

    /// See [`FilterStore::resets`].
    pub fn filter_resets(&self) -> u64 {
        self.filters.resets()
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// The error of the most recent failed fetch, cleared by the next success.
    pub fn last_error(&self) -> Option<&CatalogError> {
        self.last_error.as_ref()
    }
}
