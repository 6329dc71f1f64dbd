//! # Storage Layer
//!
//! The [`AddressRepository`] trait is the seam between the address book and
//! whatever actually holds the records. Abstracting it buys us:
//! - testing against [`memory::InMemoryRepository`] without touching disk
//! - swapping the backend (a hosted document store, say) without changing
//!   any command or selection logic
//!
//! ## Contract
//!
//! - `find_by` ANDs its predicates; matching is exact and case-sensitive.
//!   Zero matches is `Ok(vec![])`, never an error.
//! - Result order is whatever the backend yields, fixed for the duration of
//!   one call. Both shipped backends keep records in a `Vec`, so the order is
//!   insertion order.
//! - Identity is assigned by the repository at `insert` and is the only valid
//!   key for `update`/`delete`; both return `AddressNotFound` for an unknown
//!   id.

use crate::error::Result;
use crate::model::{Address, AddressPatch, AddressRecord, Field};
use uuid::Uuid;

pub mod fs;
pub mod memory;

pub trait AddressRepository {
    /// Insert a new address. Assigns a fresh identity.
    fn insert(&mut self, address: Address) -> Result<AddressRecord>;

    /// All records matching every predicate, in backend order.
    fn find_by(&self, predicates: &[(Field, String)]) -> Result<Vec<AddressRecord>>;

    /// All records, in backend order.
    fn find_all(&self) -> Result<Vec<AddressRecord>>;

    /// Apply the `Some` fields of the patch to the record with this id.
    fn update(&mut self, id: Uuid, patch: &AddressPatch) -> Result<AddressRecord>;

    /// Remove the record with this id.
    fn delete(&mut self, id: Uuid) -> Result<()>;
}

pub(crate) fn matches(record: &AddressRecord, predicates: &[(Field, String)]) -> bool {
    predicates
        .iter()
        .all(|(field, value)| record.address.get(*field) == value)
}
