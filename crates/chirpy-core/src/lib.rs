//! Service core for Chirpy.
//!
//! [`Chirpy`] is the single service object an application constructs at
//! startup and shares with every request path. It owns the dataset store,
//! the token service and the password hasher, and exposes each user-facing
//! operation with a typed [`ChirpyError`] on failure.

pub mod error;
pub mod service;
pub mod session;

pub use error::{ChirpyError, ChirpyResult};
pub use service::Chirpy;
pub use session::LoginSession;

// Re-export key types
pub use chirpy_crypto::{PasswordHasher, TokenScope, TokenService};
pub use chirpy_store::{Database, DatasetBackend, InMemoryBackend, JsonFileBackend};
pub use chirpy_types::{Chirp, ChirpId, User, UserId, UserProfile};
