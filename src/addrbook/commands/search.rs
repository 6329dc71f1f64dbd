use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Field;
use crate::repo::AddressRepository;

pub fn run<R: AddressRepository>(repo: &R, field: Field, value: &str) -> Result<CmdResult> {
    let records = repo.find_by(&[(field, value.to_string())])?;
    Ok(CmdResult::default().with_listed(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::memory::fixtures::RepoFixture;

    fn fixture() -> RepoFixture {
        RepoFixture::new()
            .with_address("Main St", "Ames", "IA", "50010")
            .with_address("Oak Ave", "Boone", "IA", "50036")
            .with_address("Main St", "Boone", "NE", "68001")
    }

    #[test]
    fn matches_one_field_exactly() {
        let result = run(&fixture().repo, Field::City, "Boone").unwrap();
        assert_eq!(result.listed.len(), 2);
        assert!(result.listed.iter().all(|r| r.address.city == "Boone"));
    }

    #[test]
    fn no_match_is_an_empty_listing_not_an_error() {
        let result = run(&fixture().repo, Field::State, "WY").unwrap();
        assert!(result.listed.is_empty());
        assert!(result.messages.is_empty());
    }

    #[test]
    fn search_is_case_sensitive() {
        let result = run(&fixture().repo, Field::City, "boone").unwrap();
        assert!(result.listed.is_empty());
    }
}
