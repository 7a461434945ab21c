//! Navigation targets and a back-stack history.
//!
//! A product id is the only parameter any view needs; the detail view
//! resolves everything else from the catalog.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    /// Sidebar plus product grid.
    #[default]
    Listing,
    /// Detail page for one product id.
    Product(u64),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Listing => "/".to_string(),
            Route::Product(id) => format!("/product/{id}"),
        }
    }

    /// Parse `/` or `/product/{id}`. Trailing slashes are tolerated.
    pub fn parse(path: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Some(Route::Listing);
        }
        let id = trimmed.strip_prefix("/product/")?;
        id.parse().ok().map(Route::Product)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Back-stack of visited routes. Never empty: the root entry is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    stack: Vec<Route>,
}

impl Default for History {
    fn default() -> Self {
        Self::new(Route::Listing)
    }
}

impl History {
    pub fn new(root: Route) -> Self {
        Self { stack: vec![root] }
    }

    pub fn current(&self) -> Route {
        // The root entry is never popped.
        self.stack.last().copied().unwrap_or_default()
    }

    pub fn push(&mut self, route: Route) {
        if self.current() != route {
            self.stack.push(route);
        }
    }

    /// Go back one entry. Returns false when already at the root.
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }
}
