//! # Addrbook Architecture
//!
//! Addrbook is a UI-agnostic address book library with a menu-driven CLI
//! client on top. The layering follows one rule: from [`api`] inward, code
//! takes Rust arguments and returns Rust types. It never writes to
//! stdout/stderr and never assumes a terminal.
//!
//! - **CLI layer** (`main.rs` plus the binary-only `args`/`print`/`prompt`
//!   modules): the menu loop, table rendering, and stdin prompting. The only
//!   place that knows about terminals and exit codes.
//! - **API layer** ([`api`]): a thin facade, generic over the storage
//!   backend, dispatching to commands and the selection engine.
//! - **Command layer** ([`commands`]): one pure module per operation,
//!   returning `Result<CmdResult>` (messages plus record lists).
//! - **Selection engine** ([`select`]): resolves a zip + street pair to
//!   exactly one record, disambiguating through the `Chooser` seam when the
//!   pair matches several.
//! - **Storage layer** ([`repo`]): the `AddressRepository` trait, with a
//!   JSON-file backend for production and an in-memory one for tests.
//!
//! Interaction mid-operation (the disambiguation prompt, the deletion
//! confirmation) crosses the boundary through traits and flags rather than
//! direct reads, which keeps the zero-mutation guarantees around aborted
//! updates and refused deletions unit-testable.

pub mod api;
pub mod commands;
pub mod error;
pub mod model;
pub mod repo;
pub mod select;
