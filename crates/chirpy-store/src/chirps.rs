//! Chirp repository.

use chirpy_types::{clean_body, Chirp, ChirpId};
use tracing::debug;

use crate::database::Database;
use crate::error::{StoreError, StoreResult};

impl Database {
    /// Validate and filter `body`, store it under the next id, and persist.
    pub fn create_chirp(&self, body: &str) -> StoreResult<Chirp> {
        let body = clean_body(body)?;
        let chirp = self.mutate(|data| {
            let chirp = Chirp::new(data.next_chirp_id(), body);
            data.chirps.insert(chirp.id, chirp.clone());
            Ok(chirp)
        })?;
        debug!(id = %chirp.id, "chirp created");
        Ok(chirp)
    }

    /// All chirps, ascending by id.
    pub fn list_chirps(&self) -> StoreResult<Vec<Chirp>> {
        Ok(self.read().sorted_chirps())
    }

    pub fn get_chirp(&self, id: ChirpId) -> StoreResult<Chirp> {
        self.read()
            .chirps
            .get(&id)
            .cloned()
            .ok_or(StoreError::ChirpNotFound(id))
    }
}
