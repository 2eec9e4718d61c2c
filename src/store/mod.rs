//! Local persistence of the in-progress form
//!
//! The form is kept in a single JSON file:
//!
//! ```text
//! {"version":1,"checksum":<crc32 of body>,"body":"<snapshot JSON>"}
//! ```
//!
//! Writes go to a sibling temp file which is synced and renamed over the
//! target. A body whose checksum does not match, or that does not parse,
//! is reported as corruption; callers start from a blank form.

mod checksum;
mod errors;

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::form::FormSnapshot;

pub use checksum::{compute_checksum, verify_checksum};
pub use errors::{StoreError, StoreErrorCode, StoreResult};

pub const FORMAT_VERSION: u32 = 1;
pub const FORM_FILE_NAME: &str = "form.json";

#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    version: u32,
    checksum: u32,
    body: String,
}

#[derive(Debug, Clone)]
pub struct FormStore {
    path: PathBuf,
}

impl FormStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<data_dir>/form.json`
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(FORM_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persists the snapshot. A blank snapshot clears the store instead.
    pub fn save(&self, snapshot: &FormSnapshot) -> StoreResult<()> {
        if snapshot.is_blank() {
            return self.clear();
        }

        let body = serde_json::to_string(snapshot).map_err(|e| {
            StoreError::write_failed_no_source(format!("Failed to encode form: {}", e))
        })?;
        let envelope = Envelope {
            version: FORMAT_VERSION,
            checksum: compute_checksum(body.as_bytes()),
            body,
        };
        let bytes = serde_json::to_vec(&envelope).map_err(|e| {
            StoreError::write_failed_no_source(format!("Failed to encode envelope: {}", e))
        })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    StoreError::write_failed(
                        format!("Failed to create directory: {}", parent.display()),
                        e,
                    )
                })?;
            }
        }

        let tmp_path = self.tmp_path();
        let mut file = File::create(&tmp_path).map_err(|e| {
            StoreError::write_failed(format!("Failed to create {}", tmp_path.display()), e)
        })?;
        file.write_all(&bytes)
            .and_then(|_| file.sync_all())
            .map_err(|e| StoreError::write_failed("Failed to write form", e))?;
        drop(file);

        fs::rename(&tmp_path, &self.path).map_err(|e| {
            StoreError::write_failed(format!("Failed to replace {}", self.path.display()), e)
        })
    }

    /// Loads the stored snapshot, `None` when nothing is stored.
    pub fn load(&self) -> StoreResult<Option<FormSnapshot>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StoreError::read_failed(
                    format!("Failed to read {}", self.path.display()),
                    e,
                ))
            }
        };

        let envelope: Envelope = serde_json::from_slice(&bytes)
            .map_err(|e| StoreError::corrupted(format!("Unreadable envelope: {}", e)))?;

        if envelope.version != FORMAT_VERSION {
            return Err(StoreError::corrupted(format!(
                "Unsupported format version {}",
                envelope.version
            )));
        }

        if !verify_checksum(envelope.body.as_bytes(), envelope.checksum) {
            return Err(StoreError::corrupted("Checksum mismatch"));
        }

        let snapshot = serde_json::from_str(&envelope.body)
            .map_err(|e| StoreError::corrupted(format!("Unreadable form body: {}", e)))?;

        Ok(Some(snapshot))
    }

    /// Removes the stored form. Missing files are not an error.
    pub fn clear(&self) -> StoreResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::write_failed(
                format!("Failed to remove {}", self.path.display()),
                e,
            )),
        }
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::InspectorField;
    use crate::resolver::{CheckOutcome, Fact};
    use tempfile::TempDir;

    fn snapshot() -> FormSnapshot {
        let mut snapshot = FormSnapshot::default();
        snapshot.facts.set(Fact::Status, "in-progress");
        snapshot.answers.insert("TBM실시여부", CheckOutcome::NotApplicable);
        snapshot
    }

    #[test]
    fn test_save_then_load() {
        let temp = TempDir::new().unwrap();
        let store = FormStore::in_dir(temp.path());

        store.save(&snapshot()).unwrap();
        assert_eq!(store.load().unwrap(), Some(snapshot()));
        assert!(!store.tmp_path().exists());
    }

    #[test]
    fn test_missing_file_loads_none() {
        let temp = TempDir::new().unwrap();
        let store = FormStore::in_dir(&temp.path().join("nested"));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_blank_snapshot_clears() {
        let temp = TempDir::new().unwrap();
        let store = FormStore::in_dir(temp.path());

        store.save(&snapshot()).unwrap();
        store.save(&FormSnapshot::default()).unwrap();
        assert!(!store.path().exists());
    }

    #[test]
    fn test_date_only_snapshot_is_kept() {
        let temp = TempDir::new().unwrap();
        let store = FormStore::in_dir(temp.path());

        let mut dated = FormSnapshot::default();
        dated
            .inspector
            .set(InspectorField::InspectionDate, "2023-11-20")
            .unwrap();
        store.save(&dated).unwrap();
        assert_eq!(store.load().unwrap(), Some(dated));
    }

    #[test]
    fn test_tampered_body_is_corruption() {
        let temp = TempDir::new().unwrap();
        let store = FormStore::in_dir(temp.path());
        store.save(&snapshot()).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        fs::write(store.path(), content.replace("not-applicable", "complied")).unwrap();

        let err = store.load().unwrap_err();
        assert!(err.is_corruption());
    }

    #[test]
    fn test_garbage_is_corruption() {
        let temp = TempDir::new().unwrap();
        let store = FormStore::in_dir(temp.path());
        fs::write(store.path(), b"{not json").unwrap();

        assert_eq!(store.load().unwrap_err().code(), StoreErrorCode::Corrupted);
    }
}
