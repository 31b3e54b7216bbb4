//! Application state for the web server.

use jobsift::{Catalog, QueryDispatcher};

/// Shared application state.
///
/// Both fields are reference-counted internally, so handlers clone freely
/// and move the clones onto the blocking pool.
#[derive(Clone)]
pub struct AppState {
    /// The read-only dataset and its alias table.
    pub catalog: Catalog,
    /// Forwards natural-language queries to the configured agent.
    pub dispatcher: QueryDispatcher,
}

impl AppState {
    pub fn new(catalog: Catalog, dispatcher: QueryDispatcher) -> Self {
        Self {
            catalog,
            dispatcher,
        }
    }

    /// A dataset counts as loaded once it has a header.
    pub fn data_loaded(&self) -> bool {
        self.catalog.dataset().column_count() > 0
    }
}
