use super::{matches, AddressRepository};
use crate::error::{AddrBookError, Result};
use crate::model::{Address, AddressPatch, AddressRecord, Field};
use chrono::Utc;
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

const DATA_FILENAME: &str = "addresses.json";

/// File-backed repository: every record lives in `addresses.json` (a JSON
/// array, insertion order) under the data directory. Each operation is
/// load-mutate-save; the file is created lazily on first insert.
pub struct FileRepository {
    root: PathBuf,
}

impl FileRepository {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn data_file(&self) -> PathBuf {
        self.root.join(DATA_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(AddrBookError::Io)?;
        }
        Ok(())
    }

    fn load(&self) -> Result<Vec<AddressRecord>> {
        let data_file = self.data_file();
        if !data_file.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(data_file).map_err(AddrBookError::Io)?;
        let records: Vec<AddressRecord> =
            serde_json::from_str(&content).map_err(AddrBookError::Serialization)?;
        Ok(records)
    }

    fn save(&self, records: &[AddressRecord]) -> Result<()> {
        self.ensure_dir()?;
        let content =
            serde_json::to_string_pretty(records).map_err(AddrBookError::Serialization)?;
        fs::write(self.data_file(), content).map_err(AddrBookError::Io)?;
        Ok(())
    }
}

impl AddressRepository for FileRepository {
    fn insert(&mut self, address: Address) -> Result<AddressRecord> {
        let mut records = self.load()?;
        let record = AddressRecord::new(address);
        records.push(record.clone());
        self.save(&records)?;
        Ok(record)
    }

    fn find_by(&self, predicates: &[(Field, String)]) -> Result<Vec<AddressRecord>> {
        let records = self.load()?;
        Ok(records
            .into_iter()
            .filter(|record| matches(record, predicates))
            .collect())
    }

    fn find_all(&self) -> Result<Vec<AddressRecord>> {
        self.load()
    }

    fn update(&mut self, id: Uuid, patch: &AddressPatch) -> Result<AddressRecord> {
        let mut records = self.load()?;
        let record = records
            .iter_mut()
            .find(|record| record.metadata.id == id)
            .ok_or(AddrBookError::AddressNotFound(id))?;

        patch.apply(&mut record.address);
        record.metadata.updated_at = Utc::now();
        let updated = record.clone();
        self.save(&records)?;
        Ok(updated)
    }

    fn delete(&mut self, id: Uuid) -> Result<()> {
        let mut records = self.load()?;
        let before = records.len();
        records.retain(|record| record.metadata.id != id);
        if records.len() == before {
            return Err(AddrBookError::AddressNotFound(id));
        }
        self.save(&records)?;
        Ok(())
    }
}
