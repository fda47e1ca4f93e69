/// In-memory snapshot store
use crate::domain::Snapshot;
use std::sync::{Arc, PoisonError, RwLock};

/// Process-wide holder of the current snapshot.
///
/// One writer (the periodic refresh), many readers. The lock guards a
/// single `Arc` swap, so readers always see a snapshot whole and the
/// lock is never held across I/O.
pub struct SnapshotStore {
    current: RwLock<Arc<Snapshot>>,
}

impl SnapshotStore {
    pub fn new(initial: Snapshot) -> Self {
        Self {
            current: RwLock::new(Arc::new(initial)),
        }
    }

    /// The presently installed snapshot
    pub fn current(&self) -> Arc<Snapshot> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Atomically replace the installed snapshot, returning the new one
    pub fn install(&self, snapshot: Snapshot) -> Arc<Snapshot> {
        let fresh = Arc::new(snapshot);
        let mut slot = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *slot = fresh.clone();
        fresh
    }
}
