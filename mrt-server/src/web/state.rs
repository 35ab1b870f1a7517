//! Application state for the web layer.

use std::sync::Arc;

use crate::directory::StationDirectory;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Station directory queries
    pub directory: Arc<StationDirectory>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(directory: StationDirectory) -> Self {
        Self {
            directory: Arc::new(directory),
        }
    }
}
