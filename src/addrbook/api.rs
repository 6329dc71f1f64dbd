//! # API Facade
//!
//! Thin entry point over the command layer and the selection engine. It
//! owns the repository handle and dispatches; no business logic or I/O
//! lives here. Generic over [`AddressRepository`] so the same facade runs
//! against the file store in production and the in-memory store in tests.

use crate::commands;
use crate::error::Result;
use crate::model::{Address, AddressPatch, Field};
use crate::repo::AddressRepository;
use crate::select::{self, Chooser, Selection};
use uuid::Uuid;

pub struct AddressBookApi<R: AddressRepository> {
    repo: R,
}

impl<R: AddressRepository> AddressBookApi<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn add_address(&mut self, address: Address) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.repo, address)
    }

    pub fn list_addresses(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.repo)
    }

    pub fn search_addresses(&self, field: Field, value: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.repo, field, value)
    }

    /// Resolve a zip + street pair to exactly one record, consulting the
    /// chooser only when the pair is ambiguous.
    pub fn select_address<C: Chooser>(
        &self,
        chooser: &mut C,
        zip_code: &str,
        street: &str,
    ) -> Result<Selection> {
        select::select(&self.repo, chooser, zip_code, street)
    }

    pub fn update_address(&mut self, id: Uuid, patch: &AddressPatch) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.repo, id, patch)
    }

    pub fn delete_address(&mut self, id: Uuid, confirmed: bool) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.repo, id, confirmed)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
