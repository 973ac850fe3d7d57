//! In-memory catalog store with atomic snapshot replacement.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use super::{CatalogEntry, CatalogSnapshot};
use crate::metrics::CATALOG_ENTRIES;

/// Holds the current catalog snapshot.
///
/// Readers clone the `Arc` of whichever snapshot is current; a refresh
/// swaps in a fully built snapshot, so no reader ever sees a partial one.
#[derive(Debug, Default)]
pub struct CatalogStore {
    current: RwLock<Arc<CatalogSnapshot>>,
}

impl CatalogStore {
    /// Create a store holding an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// The snapshot that is current at call time.
    pub async fn snapshot(&self) -> Arc<CatalogSnapshot> {
        Arc::clone(&*self.current.read().await)
    }

    /// Replace the current snapshot with one built from `entries`.
    pub async fn publish(&self, entries: Vec<CatalogEntry>) -> Arc<CatalogSnapshot> {
        let snapshot = Arc::new(CatalogSnapshot::new(entries));
        {
            let mut current = self.current.write().await;
            *current = Arc::clone(&snapshot);
        }
        CATALOG_ENTRIES.set(snapshot.len() as i64);
        debug!(entries = snapshot.len(), "Published catalog snapshot");
        snapshot
    }
}
