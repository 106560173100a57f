//! Shared application state for all routes.

use crate::store::PackageStore;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct AppState {
    /// Stands in for the ORM: rows come back snake_case, like database columns.
    pub store: Arc<PackageStore>,
}

impl AppState {
    pub fn new(store: PackageStore) -> Self {
        AppState { store: Arc::new(store) }
    }
}
