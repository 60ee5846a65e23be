//! Application state.
//!
//! The loaded specification document set is the one shared, mutable
//! resource. It is held as an `Arc` snapshot behind a `parking_lot`
//! RwLock: handlers take the snapshot once per request and validate
//! against it, and a refresh swaps the snapshot wholesale
//! (last-snapshot-wins, no versioning). The lock is never held across
//! an `.await` point.

use std::sync::Arc;

use evspec_repo::SpecSourceClient;
use evspec_schema::SpecStore;
use parking_lot::RwLock;

use crate::config::AppConfig;

/// Shared state for all route handlers. Clone-friendly via `Arc`
/// internals.
#[derive(Debug, Clone)]
pub struct AppState {
    specs: Arc<RwLock<Arc<SpecStore>>>,
    /// Remote specification source. `None` when not configured — the
    /// refresh endpoint then fails with a client error, and validation
    /// runs against whatever was loaded at startup.
    pub source: Option<Arc<SpecSourceClient>>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Build state from configuration, an optional source client, and
    /// the initially loaded store.
    pub fn new(config: AppConfig, source: Option<SpecSourceClient>, store: SpecStore) -> Self {
        Self {
            specs: Arc::new(RwLock::new(Arc::new(store))),
            source: source.map(Arc::new),
            config: Arc::new(config),
        }
    }

    /// The current document snapshot. Cheap; the caller keeps the
    /// snapshot for the whole request even if a refresh lands meanwhile.
    pub fn snapshot(&self) -> Arc<SpecStore> {
        Arc::clone(&self.specs.read())
    }

    /// Replace the document set wholesale.
    pub fn replace(&self, store: SpecStore) {
        *self.specs.write() = Arc::new(store);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evspec_schema::SpecDocument;

    #[test]
    fn snapshot_survives_a_replace() {
        let state = AppState::new(AppConfig::default(), None, SpecStore::default());
        let before = state.snapshot();
        assert!(before.is_empty());

        let doc = SpecDocument::parse("channels:\n  E:\n    publish: {}\n", "t.yaml").unwrap();
        state.replace(SpecStore::new(vec![doc]));

        // The old snapshot is untouched; a new one sees the swap.
        assert!(before.is_empty());
        assert_eq!(state.snapshot().document_count(), 1);
    }
}
