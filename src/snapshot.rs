//! Snapshot persistence for the relationship store.
//!
//! One pretty-printed JSON document per snapshot, using the store's
//! serialized shape. Reading returns exactly what was stored; session owners
//! reconcile afterwards if the roster may have drifted since the snapshot
//! was taken.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use crate::model::RelationshipStore;

/// Write the store as a JSON document at `path`.
pub fn write_snapshot(store: &RelationshipStore, path: &Path) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, store)?;
    writer.flush()
}

/// Read a store back from a snapshot written by [`write_snapshot`].
///
/// Snapshots with duplicate or empty faction names are rejected at the serde
/// boundary and surface here as `InvalidData` errors.
pub fn read_snapshot(path: &Path) -> io::Result<RelationshipStore> {
    let reader = BufReader::new(File::open(path)?);
    let store = serde_json::from_reader(reader)?;
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RelationshipKind, RelationshipStore};

    #[test]
    fn snapshot_round_trip() {
        let mut store = RelationshipStore::with_factions(["Red", "Blue", "Green"]).unwrap();
        store
            .set_relationship_mutual("Red", "Blue", RelationshipKind::Hostile)
            .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("factions.json");
        write_snapshot(&store, &path).unwrap();

        let loaded = read_snapshot(&path).unwrap();
        assert_eq!(loaded, store);
        assert_eq!(loaded.relationship("Red", "Blue"), RelationshipKind::Hostile);
    }

    #[test]
    fn read_does_not_reconcile() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sparse.json");
        std::fs::write(&path, r#"{"factions":[{"name":"Red"},{"name":"Blue"}]}"#).unwrap();

        let loaded = read_snapshot(&path).unwrap();
        // Tables come back exactly as stored, still sparse.
        assert!(loaded.faction("Red").unwrap().relationships.0.is_empty());
        assert_eq!(loaded.relationship("Red", "Blue"), RelationshipKind::Neutral);
    }

    #[test]
    fn read_rejects_duplicate_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"factions":[{"name":"Red"},{"name":"Red"}]}"#).unwrap();

        let err = read_snapshot(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_snapshot(&dir.path().join("absent.json")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
