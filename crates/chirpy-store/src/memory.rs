use std::io;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::RwLock;

use chirpy_types::Dataset;

use crate::error::{StoreError, StoreResult};
use crate::traits::DatasetBackend;

/// Backend that keeps the "persisted" dataset in memory.
///
/// Intended for tests and embedding. Saves can be made to fail on demand
/// to exercise the behavior of callers when persistence breaks.
pub struct InMemoryBackend {
    stored: RwLock<Option<Dataset>>,
    fail_saves: AtomicBool,
    saves: AtomicUsize,
}

impl InMemoryBackend {
    /// A backend holding nothing yet.
    pub fn new() -> Self {
        Self {
            stored: RwLock::new(None),
            fail_saves: AtomicBool::new(false),
            saves: AtomicUsize::new(0),
        }
    }

    /// A backend already holding `data`.
    pub fn with_dataset(data: Dataset) -> Self {
        let backend = Self::new();
        *backend.stored.write().expect("lock poisoned") = Some(data);
        backend
    }

    /// Make every subsequent save fail (or succeed again).
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// The last successfully saved dataset, if any.
    pub fn stored(&self) -> Option<Dataset> {
        self.stored.read().expect("lock poisoned").clone()
    }
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetBackend for InMemoryBackend {
    fn load(&self) -> StoreResult<Dataset> {
        if let Some(data) = self.stored() {
            return Ok(data);
        }
        let data = Dataset::new();
        self.save(&data)?;
        Ok(data)
    }

    fn save(&self, data: &Dataset) -> StoreResult<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StoreError::Io(io::Error::new(
                io::ErrorKind::Other,
                "in-memory backend configured to fail saves",
            )));
        }
        *self.stored.write().expect("lock poisoned") = Some(data.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

impl std::fmt::Debug for InMemoryBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryBackend")
            .field("save_count", &self.save_count())
            .field("fail_saves", &self.fail_saves.load(Ordering::SeqCst))
            .finish()
    }
}
