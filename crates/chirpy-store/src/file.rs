use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chirpy_types::Dataset;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::traits::DatasetBackend;

/// Dataset persisted as one JSON file.
///
/// Every save writes the full dataset to a fresh temporary file in the same
/// directory, fsyncs it, and renames it over the target. A crash mid-save
/// leaves either the old file or the new one, never a torn mix.
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the database file at `path`. Returns `true` if it existed.
    pub fn remove(path: &Path) -> StoreResult<bool> {
        match fs::remove_file(path) {
            Ok(()) => {
                info!(path = %path.display(), "removed database file");
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        }
    }

    fn serialization_error(&self, e: serde_json::Error) -> StoreError {
        StoreError::Serialization {
            path: self.path.clone(),
            reason: e.to_string(),
        }
    }
}

impl DatasetBackend for JsonFileBackend {
    fn load(&self) -> StoreResult<Dataset> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "database does not exist, creating it");
                let data = Dataset::new();
                self.save(&data)?;
                return Ok(data);
            }
            Err(e) => return Err(e.into()),
        };
        let data: Dataset =
            serde_json::from_slice(&bytes).map_err(|e| self.serialization_error(e))?;
        debug!(
            path = %self.path.display(),
            chirps = data.chirps.len(),
            users = data.users.len(),
            "database loaded"
        );
        Ok(data)
    }

    fn save(&self, data: &Dataset) -> StoreResult<()> {
        let bytes = serde_json::to_vec(data).map_err(|e| self.serialization_error(e))?;

        let dir = self.parent_dir();
        fs::create_dir_all(dir)?;
        let mut tmp = NamedTempFile::new_in(dir)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tmp.as_file()
                .set_permissions(fs::Permissions::from_mode(0o600))?;
        }

        tmp.write_all(&bytes)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;

        debug!(path = %self.path.display(), bytes = bytes.len(), "database saved");
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

impl std::fmt::Debug for JsonFileBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonFileBackend")
            .field("path", &self.path)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chirpy_types::{Chirp, ChirpId, User, UserId};

    fn sample() -> Dataset {
        let mut data = Dataset::new();
        data.chirps
            .insert(ChirpId::new(1), Chirp::new(ChirpId::new(1), "first"));
        data.users.insert(
            UserId::new(1),
            User::new(UserId::new(1), "a@example.com", "$2b$04$hash"),
        );
        data
    }

    #[test]
    fn load_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.json");
        let backend = JsonFileBackend::new(&path);

        let data = backend.load().unwrap();
        assert!(data.is_empty());
        assert!(path.exists());
        let on_disk: serde_json::Value =
            serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(on_disk, serde_json::json!({ "chirps": {}, "users": {} }));
    }

    #[test]
    fn load_creates_missing_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("db.json");
        JsonFileBackend::new(&path).load().unwrap();
        assert!(path.exists());
    }

    #[test]
    fn save_then_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonFileBackend::new(dir.path().join("db.json"));
        let data = sample();
        backend.save(&data).unwrap();
        assert_eq!(backend.load().unwrap(), data);
    }

    #[test]
    fn save_of_load_is_stable() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonFileBackend::new(dir.path().join("db.json"));
        backend.save(&sample()).unwrap();

        let first = backend.load().unwrap();
        backend.save(&first).unwrap();
        let second = backend.load().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn save_replaces_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonFileBackend::new(dir.path().join("db.json"));
        backend.save(&sample()).unwrap();
        backend.save(&Dataset::new()).unwrap();
        assert!(backend.load().unwrap().is_empty());
    }

    #[test]
    fn save_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonFileBackend::new(dir.path().join("db.json"));
        for _ in 0..3 {
            backend.save(&sample()).unwrap();
        }
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn reads_string_keyed_maps() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.json");
        fs::write(
            &path,
            r#"{"chirps":{"1":{"id":1,"body":"hi"}},"users":{"1":{"id":1,"email":"a@b.c","hashed_password":"$2a$10$x"}}}"#,
        )
        .unwrap();
        let data = JsonFileBackend::new(&path).load().unwrap();
        assert_eq!(data.chirps[&ChirpId::new(1)].body, "hi");
        assert_eq!(data.users[&UserId::new(1)].hashed_password, "$2a$10$x");
    }

    #[test]
    fn corrupt_file_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.json");
        fs::write(&path, b"{ not json").unwrap();
        let err = JsonFileBackend::new(&path).load().unwrap_err();
        assert!(matches!(err, StoreError::Serialization { .. }));
        assert!(err.is_io());
        // The corrupt file is left alone for inspection.
        assert_eq!(fs::read(&path).unwrap(), b"{ not json");
    }

    #[test]
    fn remove_reports_existence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.json");
        assert!(!JsonFileBackend::remove(&path).unwrap());
        JsonFileBackend::new(&path).load().unwrap();
        assert!(JsonFileBackend::remove(&path).unwrap());
        assert!(!path.exists());
    }

    #[test]
    fn bare_file_name_uses_current_dir() {
        let backend = JsonFileBackend::new("db.json");
        assert_eq!(backend.parent_dir(), Path::new("."));
    }
}
