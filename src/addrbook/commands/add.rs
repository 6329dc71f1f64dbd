use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Address;
use crate::repo::AddressRepository;

pub fn run<R: AddressRepository>(repo: &mut R, address: Address) -> Result<CmdResult> {
    let record = repo.insert(address)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Address added: {}",
        record.address.street
    )));
    Ok(result.with_affected(vec![record]))
}
