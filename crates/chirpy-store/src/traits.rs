use chirpy_types::Dataset;

use crate::error::StoreResult;

/// Persistence medium for the dataset.
///
/// All implementations must satisfy these invariants:
/// - `load` on a backend that holds nothing creates an empty dataset,
///   persists it, and returns it. Absence is never an error.
/// - `save` replaces the previous content entirely. Once it returns `Ok`,
///   a subsequent `load` reproduces the saved dataset exactly.
/// - A failed `save` leaves the previously committed content intact.
///
/// Backends do no locking of their own; [`Database`](crate::Database)
/// serializes access.
pub trait DatasetBackend: Send + Sync {
    /// Read the full dataset, creating an empty one if none exists.
    fn load(&self) -> StoreResult<Dataset>;

    /// Durably write the full dataset, replacing prior content.
    fn save(&self, data: &Dataset) -> StoreResult<()>;

    /// Short human-readable location, for logs.
    fn describe(&self) -> String;
}
