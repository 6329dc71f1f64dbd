//! # Selection Engine
//!
//! Resolves a composite key (zip code + street) to exactly one address
//! record, or to a defined failure. This is the only branching logic in the
//! program worth the name:
//!
//! 1. Query the repository with `zip_code == zip AND street == street`.
//! 2. Zero matches → [`Selection::NotFound`].
//! 3. One match → [`Selection::Resolved`], with no user interaction.
//! 4. Two or more → hand the candidates, in repository order, to the
//!    [`Chooser`]; parse its reply as an integer and validate it against
//!    `[1, count]`. Bad input becomes [`Selection::Invalid`], never a panic
//!    and never a mutation.
//!
//! The `Chooser` seam keeps the engine free of terminal assumptions: the
//! binary wires in a stdin-backed implementation, tests script their replies.

use crate::error::Result;
use crate::model::{AddressRecord, Field};
use crate::repo::AddressRepository;
use std::fmt;

/// Supplies the user's raw reply when a lookup is ambiguous.
///
/// Implementations present `candidates` as a 1-based list in the given order
/// and return whatever line the user typed. Parsing and validation stay in
/// the engine.
pub trait Chooser {
    fn choose(&mut self, candidates: &[AddressRecord]) -> Result<String>;
}

/// Outcome of a selection. `NotFound` and `Invalid` are ordinary values, not
/// errors: the caller reports them and aborts the current operation.
#[derive(Debug, Clone)]
pub enum Selection {
    Resolved(AddressRecord),
    NotFound,
    Invalid(ChoiceError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChoiceError {
    NotAnInteger(String),
    OutOfRange { given: i64, max: usize },
}

impl fmt::Display for ChoiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChoiceError::NotAnInteger(input) => {
                write!(f, "Invalid selection \"{}\". Expected an integer.", input.trim())
            }
            ChoiceError::OutOfRange { given, max } => {
                write!(f, "Selection {} was out of range [1-{}].", given, max)
            }
        }
    }
}

pub fn select<R, C>(repo: &R, chooser: &mut C, zip_code: &str, street: &str) -> Result<Selection>
where
    R: AddressRepository,
    C: Chooser,
{
    let mut candidates = repo.find_by(&[
        (Field::ZipCode, zip_code.to_string()),
        (Field::Street, street.to_string()),
    ])?;

    match candidates.len() {
        0 => Ok(Selection::NotFound),
        1 => Ok(Selection::Resolved(candidates.swap_remove(0))),
        count => {
            let reply = chooser.choose(&candidates)?;
            let choice: i64 = match reply.trim().parse() {
                Ok(n) => n,
                Err(_) => return Ok(Selection::Invalid(ChoiceError::NotAnInteger(reply))),
            };

            // 0 would alias the last entry through the 1-based offset below;
            // it is rejected along with the rest of the out-of-range inputs.
            if choice < 1 || choice as usize > count {
                return Ok(Selection::Invalid(ChoiceError::OutOfRange {
                    given: choice,
                    max: count,
                }));
            }

            Ok(Selection::Resolved(candidates.swap_remove(choice as usize - 1)))
        }
    }
}
