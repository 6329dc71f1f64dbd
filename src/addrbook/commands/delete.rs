use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::repo::AddressRepository;
use uuid::Uuid;

/// Replies that count as a yes at the deletion prompt, compared
/// case-insensitively. The "affimative" spelling is intentional; users
/// type what they have always typed.
const AFFIRMATIVE_TOKENS: [&str; 7] = [
    "y",
    "yes",
    "si",
    "sí",
    "affimative",
    "activate address shredder",
    "murder it",
];

pub fn is_affirmative(reply: &str) -> bool {
    let reply = reply.trim().to_lowercase();
    AFFIRMATIVE_TOKENS.iter().any(|token| *token == reply)
}

/// Delete an already-resolved record, but only when confirmed. A refusal
/// performs no repository call.
pub fn run<R: AddressRepository>(repo: &mut R, id: Uuid, confirmed: bool) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if !confirmed {
        result.add_message(CmdMessage::info("Address was spared."));
        return Ok(result);
    }

    repo.delete(id)?;
    result.add_message(CmdMessage::success("Address was deleted."));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::memory::fixtures::RepoFixture;
    use crate::repo::AddressRepository;

    #[test]
    fn refusal_leaves_the_record_in_place() {
        let mut fixture = RepoFixture::new().with_address("Main St", "Ames", "IA", "50010");
        let id = fixture.repo.find_all().unwrap()[0].metadata.id;

        run(&mut fixture.repo, id, false).unwrap();

        assert_eq!(fixture.repo.find_all().unwrap().len(), 1);
    }

    #[test]
    fn confirmation_removes_the_record() {
        let mut fixture = RepoFixture::new().with_address("Main St", "Ames", "IA", "50010");
        let id = fixture.repo.find_all().unwrap()[0].metadata.id;

        run(&mut fixture.repo, id, true).unwrap();

        assert!(fixture.repo.find_all().unwrap().is_empty());
    }

    #[test]
    fn every_affirmative_token_confirms() {
        for token in [
            "y",
            "yes",
            "si",
            "sí",
            "affimative",
            "activate address shredder",
            "murder it",
        ] {
            assert!(is_affirmative(token), "token {:?} should confirm", token);
        }
    }

    #[test]
    fn affirmatives_are_case_insensitive() {
        assert!(is_affirmative("Y"));
        assert!(is_affirmative("YES"));
        assert!(is_affirmative("Sí"));
        assert!(is_affirmative("MURDER IT"));
    }

    #[test]
    fn anything_else_declines() {
        for reply in ["n", "no", "", "yep", "affirmative", "delete", "0"] {
            assert!(!is_affirmative(reply), "reply {:?} should decline", reply);
        }
    }
}
