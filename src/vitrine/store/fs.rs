use std::fs;
use std::path::{Path, PathBuf};

use super::RecordStore;
use crate::error::{Result, VitrineError};
use crate::model::AssetRecord;

/// File-backed catalog: a single JSON array of records, read and written
/// whole.
#[derive(Debug, Clone)]
pub struct FileStore {
    catalog_path: PathBuf,
}

impl FileStore {
    pub fn new(catalog_path: impl Into<PathBuf>) -> Self {
        Self {
            catalog_path: catalog_path.into(),
        }
    }

    pub fn catalog_path(&self) -> &Path {
        &self.catalog_path
    }

    pub fn exists(&self) -> bool {
        self.catalog_path.exists()
    }

    /// Write the full catalog, creating parent directories as needed.
    pub fn save_all(&self, records: &[AssetRecord]) -> Result<()> {
        if let Some(parent) = self.catalog_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(VitrineError::Io)?;
            }
        }
        let content = serde_json::to_string_pretty(records).map_err(VitrineError::Serialization)?;
        fs::write(&self.catalog_path, content).map_err(VitrineError::Io)?;
        Ok(())
    }
}

impl RecordStore for FileStore {
    fn load_all(&self) -> Result<Vec<AssetRecord>> {
        if !self.catalog_path.exists() {
            return Err(VitrineError::Catalog(format!(
                "no catalog at {} (run `vitrine init` to create one)",
                self.catalog_path.display()
            )));
        }
        let content = fs::read_to_string(&self.catalog_path).map_err(VitrineError::Io)?;
        let records: Vec<AssetRecord> =
            serde_json::from_str(&content).map_err(VitrineError::Serialization)?;
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures;

    #[test]
    fn save_and_load_round_trip_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("catalog.json"));

        let records = fixtures::sample_run(7);
        store.save_all(&records).unwrap();

        let loaded = store.load_all().unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join(".vitrine").join("catalog.json"));

        store.save_all(&fixtures::sample_run(1)).unwrap();
        assert!(store.exists());
    }

    #[test]
    fn missing_catalog_is_a_catalog_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("absent.json"));

        let err = store.load_all().unwrap_err();
        assert!(matches!(err, VitrineError::Catalog(_)));
        assert!(err.to_string().contains("vitrine init"));
    }

    #[test]
    fn corrupt_catalog_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, "{ not json").unwrap();

        let err = FileStore::new(&path).load_all().unwrap_err();
        assert!(matches!(err, VitrineError::Serialization(_)));
    }
}
