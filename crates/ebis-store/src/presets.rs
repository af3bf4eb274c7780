//! Preset store for named record templates
//!
//! A preset is a delivery record with its lock state, saved under a name.
//! Plants keep one preset per mix design so that only the waybill-specific
//! fields need to change between shipments. Presets are templates, not a
//! log of submitted records.

use ebis_domain::{DeliveryRecord, FieldLocks};
use ebis_types::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// A saved record template with its lock state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preset {
    pub record: DeliveryRecord,
    #[serde(default)]
    pub locks: FieldLocks,
}

/// Persistent store for presets, one JSON file per user
pub struct PresetStore {
    store_path: PathBuf,
    presets: HashMap<String, Preset>,
}

impl PresetStore {
    /// Create or load a preset store under the given directory
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join("presets.json");

        let presets = if store_path.exists() {
            let file = File::open(&store_path)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).unwrap_or_default()
        } else {
            HashMap::new()
        };

        Ok(Self { store_path, presets })
    }

    fn save_to_disk(&self) -> Result<()> {
        let file = File::create(&self.store_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.presets)?;
        Ok(())
    }

    /// Save a preset under a name, replacing any existing one
    pub fn save(&mut self, name: &str, preset: Preset) -> Result<()> {
        self.presets.insert(name.to_string(), preset);
        self.save_to_disk()
    }

    /// Get a preset by name
    pub fn get(&self, name: &str) -> Result<&Preset> {
        self.presets
            .get(name)
            .ok_or_else(|| Error::PresetNotFound(name.to_string()))
    }

    /// All preset names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.presets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Remove a preset by name, returning whether it existed
    pub fn remove(&mut self, name: &str) -> Result<bool> {
        let removed = self.presets.remove(name).is_some();
        if removed {
            self.save_to_disk()?;
        }
        Ok(removed)
    }

    pub fn count(&self) -> usize {
        self.presets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ebis_domain::Field;
    use tempfile::tempdir;

    fn sample_preset() -> Preset {
        let mut locks = FieldLocks::new();
        locks.lock(Field::TaxNumber);
        Preset {
            record: DeliveryRecord::default(),
            locks,
        }
    }

    #[test]
    fn save_and_reload() {
        let dir = tempdir().unwrap();

        {
            let mut store = PresetStore::open(dir.path().to_path_buf()).unwrap();
            store.save("c50-normal", sample_preset()).unwrap();
            assert_eq!(store.count(), 1);
        }

        let store = PresetStore::open(dir.path().to_path_buf()).unwrap();
        let preset = store.get("c50-normal").unwrap();
        assert_eq!(preset.record.strength_class, "C50");
        assert!(preset.locks.is_locked(Field::TaxNumber));
    }

    #[test]
    fn missing_preset_is_an_error() {
        let dir = tempdir().unwrap();
        let store = PresetStore::open(dir.path().to_path_buf()).unwrap();
        assert!(matches!(
            store.get("nope"),
            Err(Error::PresetNotFound(name)) if name == "nope"
        ));
    }

    #[test]
    fn names_are_sorted() {
        let dir = tempdir().unwrap();
        let mut store = PresetStore::open(dir.path().to_path_buf()).unwrap();
        store.save("zemin", sample_preset()).unwrap();
        store.save("asma-kat", sample_preset()).unwrap();
        assert_eq!(store.names(), vec!["asma-kat", "zemin"]);
    }

    #[test]
    fn remove_deletes_from_disk() {
        let dir = tempdir().unwrap();
        let mut store = PresetStore::open(dir.path().to_path_buf()).unwrap();
        store.save("tmp", sample_preset()).unwrap();
        assert!(store.remove("tmp").unwrap());
        assert!(!store.remove("tmp").unwrap());

        let reloaded = PresetStore::open(dir.path().to_path_buf()).unwrap();
        assert_eq!(reloaded.count(), 0);
    }
}
