//! The filter-state store: single owner of the current [`FilterState`].
//!
//! All writes go through the setters below. Every setter call, including one
//! that writes the value already held, notifies each subscriber synchronously
//! with the new state, in subscription order.

use tracing::trace;

use crate::types::FilterState;

/// Handle returned by [`FilterStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&FilterState)>;

#[derive(Default)]
pub struct FilterStore {
    state: FilterState,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
    resets: u64,
}

impl FilterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current criteria. Read-only; mutate through the setters.
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Register a callback invoked after every change.
    pub fn subscribe(&mut self, callback: impl FnMut(&FilterState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns false if the id was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Number of completed [`reset_filters`](Self::reset_filters) calls.
    ///
    /// Views that keep their own draft text (price boxes) key on this so a
    /// reset also clears what the user typed.
    pub fn resets(&self) -> u64 {
        self.resets
    }

    /// Replace the free-text query verbatim.
    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.state.search_query = text.into();
        self.notify("search_query");
    }

    /// Replace the category filter. An empty string clears it.
    pub fn set_selected_category(&mut self, category: impl Into<String>) {
        self.state.selected_category = category.into();
        self.notify("selected_category");
    }

    pub fn set_min_price(&mut self, value: Option<f64>) {
        self.state.min_price = value;
        self.notify("min_price");
    }

    pub fn set_max_price(&mut self, value: Option<f64>) {
        self.state.max_price = value;
        self.notify("max_price");
    }

    /// Replace the quick-filter keyword. An empty string clears it.
    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.state.keyword = keyword.into();
        self.notify("keyword");
    }

    /// Restore all five fields to their defaults with a single notification.
    pub fn reset_filters(&mut self) {
        self.state = FilterState::default();
        self.resets += 1;
        self.notify("reset");
    }

    fn notify(&mut self, field: &'static str) {
        trace!(field, subscribers = self.subscribers.len(), "Filter state changed");
        let state = &self.state;
        for (_, callback) in self.subscribers.iter_mut() {
            callback(state);
        }
    }
}

impl std::fmt::Debug for FilterStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterStore")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .field("resets", &self.resets)
            .finish()
    }
}
