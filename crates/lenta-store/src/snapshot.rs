//! The single persisted session record.
//!
//! Mirrors the one browser-local storage key of the original client: a
//! JSON document holding the current user, rewritten on every session
//! mutation and read once at startup. There is no other durable state.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use lenta_types::models::User;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot io: {0}")]
    Io(#[from] io::Error),
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// File-backed store for the serialized current user.
pub struct Snapshot {
    path: PathBuf,
}

impl Snapshot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted record. A missing file is not an error, just
    /// no session to restore. A record that fails to parse is.
    pub fn load(&self) -> Result<Option<User>, SnapshotError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let user = serde_json::from_str(&raw)?;
        Ok(Some(user))
    }

    pub fn save(&self, user: &User) -> Result<(), SnapshotError> {
        let raw = serde_json::to_string(user)?;
        fs::write(&self.path, raw)?;
        debug!(path = %self.path.display(), "session snapshot written");
        Ok(())
    }

    /// Remove the persisted record. Removing an absent record is a no-op.
    pub fn clear(&self) -> Result<(), SnapshotError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use lenta_types::models::avatar_url_for;

    fn user() -> User {
        User {
            id: 1,
            email: "anna@example.ru".into(),
            username: "anna_designer".into(),
            display_name: "Анна Иванова".into(),
            bio: String::new(),
            avatar_url: avatar_url_for("anna"),
            is_verified: false,
            last_seen: Utc::now(),
        }
    }

    fn snapshot_in(dir: &tempfile::TempDir) -> Snapshot {
        Snapshot::new(dir.path().join("lenta_session.json"))
    }

    #[test]
    fn save_then_load_reproduces_the_record() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = snapshot_in(&dir);
        let user = user();
        snapshot.save(&user).unwrap();
        assert_eq!(snapshot.load().unwrap(), Some(user));
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(snapshot_in(&dir).load().unwrap().is_none());
    }

    #[test]
    fn malformed_record_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = snapshot_in(&dir);
        fs::write(snapshot.path(), "{not json").unwrap();
        assert!(matches!(
            snapshot.load(),
            Err(SnapshotError::Malformed(_))
        ));
    }

    #[test]
    fn clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = snapshot_in(&dir);
        snapshot.save(&user()).unwrap();
        snapshot.clear().unwrap();
        snapshot.clear().unwrap();
        assert!(snapshot.load().unwrap().is_none());
    }

    #[test]
    fn timestamps_serialize_as_iso8601() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = snapshot_in(&dir);
        snapshot.save(&user()).unwrap();
        let raw = fs::read_to_string(snapshot.path()).unwrap();
        // chrono's serde emits RFC 3339 / ISO 8601 strings
        assert!(raw.contains("\"last_seen\":\""));
    }
}
