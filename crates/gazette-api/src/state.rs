//! Shared application state.

use std::sync::Arc;

use gazette_core::agency::Agency;
use tokio::sync::RwLock;

/// Application state shared across all request handlers.
///
/// The registry performs no locking of its own; every handler goes through
/// this single lock, which serializes mutations as the core requires.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The agency registry.
    pub agency: Arc<RwLock<Agency>>,
}

impl AppState {
    /// Create new application state owning the given registry.
    #[must_use]
    pub fn new(agency: Agency) -> Self {
        Self {
            agency: Arc::new(RwLock::new(agency)),
        }
    }
}
