//! Snapshot persistence for formation state.
//!
//! A [`SnapshotStore`] saves a whole [`Formation`] under a named slot and
//! loads it back as a *new value* — the caller replaces its held instance,
//! there is no in-place restore. Both directions are all-or-nothing: a
//! failed save leaves the previous slot content intact, a failed load
//! returns an error without producing a partial formation.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::formation::Formation;

/// A failure while saving or loading a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The underlying file operation failed.
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// The slot content could not be encoded or decoded.
    #[error("snapshot encoding failed: {0}")]
    Codec(#[from] serde_json::Error),
}

/// Save/restore capability for formation state.
pub trait SnapshotStore {
    /// Persists the formation under a named slot, replacing its previous
    /// content.
    fn save(&self, slot: &str, formation: &Formation) -> Result<(), SnapshotError>;

    /// Loads the formation stored under a named slot.
    fn load(&self, slot: &str) -> Result<Formation, SnapshotError>;
}

/// JSON-on-disk snapshot store rooted at an injected directory.
#[derive(Debug, Clone)]
pub struct JsonSnapshotStore {
    dir: PathBuf,
}

impl JsonSnapshotStore {
    /// Creates a store writing into `dir`. The directory is created on
    /// first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Base directory of this store.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{slot}.json"))
    }
}

impl SnapshotStore for JsonSnapshotStore {
    fn save(&self, slot: &str, formation: &Formation) -> Result<(), SnapshotError> {
        fs::create_dir_all(&self.dir)?;
        let payload = serde_json::to_vec_pretty(formation)?;

        // Write-then-rename so a failed write never clobbers the slot.
        let path = self.slot_path(slot);
        let tmp = self.dir.join(format!("{slot}.json.tmp"));
        fs::write(&tmp, payload)?;
        fs::rename(&tmp, &path)?;
        debug!(slot, path = %path.display(), "saved snapshot");
        Ok(())
    }

    fn load(&self, slot: &str) -> Result<Formation, SnapshotError> {
        let path = self.slot_path(slot);
        let bytes = fs::read(&path)?;
        let formation = serde_json::from_slice(&bytes)?;
        debug!(slot, path = %path.display(), "loaded snapshot");
        Ok(formation)
    }
}
