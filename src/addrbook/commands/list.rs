use crate::commands::CmdResult;
use crate::error::Result;
use crate::repo::AddressRepository;

pub fn run<R: AddressRepository>(repo: &R) -> Result<CmdResult> {
    let records = repo.find_all()?;
    Ok(CmdResult::default().with_listed(records))
}
