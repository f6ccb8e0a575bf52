use anyhow::{Context, Result};
use movetrack_core::{ListenerError, Snapshot, SnapshotListener};
use movetrack_types::MovementRecord;
use std::fs;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Load the movement list from a snapshot file.
///
/// A missing file is an empty list; a malformed one is an error.
pub fn load(path: &Path) -> Result<Vec<MovementRecord>> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "snapshot file not found, starting empty");
        return Ok(Vec::new());
    }

    let file = fs::File::open(path)
        .with_context(|| format!("Failed to open snapshot {}", path.display()))?;
    let records: Vec<MovementRecord> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Invalid snapshot file {}", path.display()))?;
    Ok(records)
}

/// Write a snapshot as a pretty JSON array (newest first)
pub fn save(path: &Path, snapshot: &Snapshot) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let content = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, content + "\n")
        .with_context(|| format!("Failed to write snapshot {}", path.display()))?;
    tracing::debug!(path = %path.display(), count = snapshot.len(), "snapshot saved");
    Ok(())
}

/// Listener that writes every new snapshot to disk before the store adopts it.
///
/// A failed write rejects the snapshot, so the file and the store never disagree.
pub struct SnapshotWriter {
    path: PathBuf,
}

impl SnapshotWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SnapshotListener for SnapshotWriter {
    fn on_snapshot(&self, snapshot: &Snapshot) -> std::result::Result<(), ListenerError> {
        save(&self.path, snapshot).map_err(|e| ListenerError::new(format!("{:#}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use movetrack_core::{Assigner, MovementStore};
    use movetrack_types::RawMovement;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty() -> Result<()> {
        let temp_dir = TempDir::new()?;
        assert!(load(&temp_dir.path().join("none.json"))?.is_empty());
        Ok(())
    }

    #[test]
    fn test_save_then_load_keeps_order() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("movements.json");

        let mut store = MovementStore::new(Assigner::default());
        for plate in ["A", "B", "C"] {
            let raw = RawMovement {
                license_plate: plate.to_string(),
                ..Default::default()
            };
            store.add_one(raw, "tester")?;
        }
        save(&path, &store.snapshot())?;

        let loaded = load(&path)?;
        assert_eq!(loaded.as_slice(), store.snapshot().records());
        Ok(())
    }

    #[test]
    fn test_writer_persists_each_snapshot() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("out").join("movements.json");

        let mut store = MovementStore::new(Assigner::default());
        store.subscribe(SnapshotWriter::new(&path));
        store.add_one(RawMovement::default(), "tester")?;
        store.add_one(RawMovement::default(), "tester")?;

        assert_eq!(load(&path)?.len(), 2);
        Ok(())
    }

    #[test]
    fn test_malformed_file_is_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "{ not json")?;
        assert!(load(&path).is_err());
        Ok(())
    }
}
