use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard};

use chirpy_types::Dataset;
use tracing::{info, warn};

use crate::error::StoreResult;
use crate::file::JsonFileBackend;
use crate::memory::InMemoryBackend;
use crate::traits::DatasetBackend;

/// The in-memory dataset plus the backend it is mirrored onto.
///
/// Readers share the lock. Every mutation holds the write lock across the
/// in-memory change and the save, so writers never interleave and readers
/// never see a change whose save is still in flight.
///
/// If the save fails, the in-memory change stays in place and the error is
/// returned: memory and disk disagree until the next successful save.
pub struct Database {
    backend: Box<dyn DatasetBackend>,
    data: RwLock<Dataset>,
}

impl Database {
    /// Load the dataset from `backend`, creating it empty if absent.
    pub fn open(backend: impl DatasetBackend + 'static) -> StoreResult<Self> {
        let data = backend.load()?;
        info!(
            location = %backend.describe(),
            chirps = data.chirps.len(),
            users = data.users.len(),
            "database opened"
        );
        Ok(Self {
            backend: Box::new(backend),
            data: RwLock::new(data),
        })
    }

    /// Open the JSON file at `path`.
    pub fn open_file(path: impl Into<PathBuf>) -> StoreResult<Self> {
        Self::open(JsonFileBackend::new(path))
    }

    /// An empty database that never touches the disk.
    pub fn in_memory() -> Self {
        Self {
            backend: Box::new(InMemoryBackend::new()),
            data: RwLock::new(Dataset::new()),
        }
    }

    /// Shared read access to the current dataset.
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, Dataset> {
        self.data.read().expect("lock poisoned")
    }

    /// Run `f` against the dataset and persist the result, all under the
    /// write lock. Nothing is saved if `f` fails.
    pub(crate) fn mutate<T>(
        &self,
        f: impl FnOnce(&mut Dataset) -> StoreResult<T>,
    ) -> StoreResult<T> {
        let mut data = self.data.write().expect("lock poisoned");
        let out = f(&mut data)?;
        if let Err(e) = self.backend.save(&data) {
            warn!(
                location = %self.backend.describe(),
                error = %e,
                "save failed; in-memory state is ahead of disk"
            );
            return Err(e);
        }
        Ok(out)
    }

    /// Clone of the whole current dataset.
    pub fn snapshot(&self) -> Dataset {
        self.read().clone()
    }

    /// Replace the dataset with an empty one and persist it.
    pub fn reset(&self) -> StoreResult<()> {
        self.mutate(|data| {
            *data = Dataset::new();
            Ok(())
        })?;
        info!(location = %self.backend.describe(), "database reset");
        Ok(())
    }

    /// Where the dataset is persisted, for logs.
    pub fn location(&self) -> String {
        self.backend.describe()
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let data = self.read();
        f.debug_struct("Database")
            .field("location", &self.backend.describe())
            .field("chirps", &data.chirps.len())
            .field("users", &data.users.len())
            .finish()
    }
}
