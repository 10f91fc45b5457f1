//! File-backed dataset store for Chirpy.
//!
//! The whole application state is one [`Dataset`](chirpy_types::Dataset)
//! held in memory by a [`Database`] and mirrored onto a single JSON file.
//!
//! # Storage Backends
//!
//! All backends implement the [`DatasetBackend`] trait:
//!
//! - [`JsonFileBackend`] -- one JSON file, replaced atomically on every save
//! - [`InMemoryBackend`] -- no disk at all, for tests and embedding
//!
//! # Design Rules
//!
//! 1. The backend is the only component that touches the disk.
//! 2. Reads share the dataset lock; every create/update/reset holds the write
//!    lock across mutate, serialize and write.
//! 3. Saves go to a temporary file that is fsynced and renamed over the
//!    target, so the file always holds the last completed write.
//! 4. Mutations are applied in memory before the save. A failed save is
//!    reported but not rolled back; memory and disk diverge until the next
//!    successful save.
//! 5. Identifiers are `count + 1`. Nothing is ever deleted except by reset.
//! 6. All I/O errors are propagated, never silently ignored.

pub mod chirps;
pub mod database;
pub mod error;
pub mod file;
pub mod memory;
pub mod traits;
pub mod users;

// Re-export primary types at crate root for ergonomic imports.
pub use database::Database;
pub use error::{StoreError, StoreResult};
pub use file::JsonFileBackend;
pub use memory::InMemoryBackend;
pub use traits::DatasetBackend;
