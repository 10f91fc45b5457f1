use serde::{Deserialize, Serialize};

use crate::id::ChirpId;

/// A short post. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chirp {
    pub id: ChirpId,
    /// Body after the length check and profanity filter.
    pub body: String,
}

impl Chirp {
    pub fn new(id: ChirpId, body: impl Into<String>) -> Self {
        Self {
            id,
            body: body.into(),
        }
    }
}
