use super::{matches, AddressRepository};
use crate::error::{AddrBookError, Result};
use crate::model::{Address, AddressPatch, AddressRecord, Field};
use chrono::Utc;
use uuid::Uuid;

/// In-memory repository. No persistence; used by unit tests and anything else
/// that wants a throwaway backend.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    records: Vec<AddressRecord>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl AddressRepository for InMemoryRepository {
    fn insert(&mut self, address: Address) -> Result<AddressRecord> {
        let record = AddressRecord::new(address);
        self.records.push(record.clone());
        Ok(record)
    }

    fn find_by(&self, predicates: &[(Field, String)]) -> Result<Vec<AddressRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|record| matches(record, predicates))
            .cloned()
            .collect())
    }

    fn find_all(&self) -> Result<Vec<AddressRecord>> {
        Ok(self.records.clone())
    }

    fn update(&mut self, id: Uuid, patch: &AddressPatch) -> Result<AddressRecord> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.metadata.id == id)
            .ok_or(AddrBookError::AddressNotFound(id))?;

        patch.apply(&mut record.address);
        record.metadata.updated_at = Utc::now();
        Ok(record.clone())
    }

    fn delete(&mut self, id: Uuid) -> Result<()> {
        let before = self.records.len();
        self.records.retain(|record| record.metadata.id != id);
        if self.records.len() == before {
            return Err(AddrBookError::AddressNotFound(id));
        }
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct RepoFixture {
        pub repo: InMemoryRepository,
    }

    impl Default for RepoFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl RepoFixture {
        pub fn new() -> Self {
            Self {
                repo: InMemoryRepository::new(),
            }
        }

        pub fn with_address(mut self, street: &str, city: &str, state: &str, zip: &str) -> Self {
            self.repo
                .insert(Address::new(
                    street.to_string(),
                    city.to_string(),
                    state.to_string(),
                    zip.to_string(),
                ))
                .unwrap();
            self
        }
    }
}
