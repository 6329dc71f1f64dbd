use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::AddressPatch;
use crate::repo::AddressRepository;
use uuid::Uuid;

/// Apply a partial edit to an already-resolved record. An empty patch is a
/// no-op: the repository is not called at all.
pub fn run<R: AddressRepository>(
    repo: &mut R,
    id: Uuid,
    patch: &AddressPatch,
) -> Result<CmdResult> {
    if patch.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("No fields changed."));
        return Ok(result);
    }

    let record = repo.update(id, patch)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Address updated: {}",
        record.address.street
    )));
    Ok(result.with_affected(vec![record]))
}
