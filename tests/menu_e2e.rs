use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn addrbook_in(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("addrbook").unwrap();
    cmd.arg("--data-dir").arg(data_dir);
    cmd
}

fn script(lines: &[&str]) -> String {
    let mut s = lines.join("\n");
    s.push('\n');
    s
}

#[test]
fn add_then_list_shows_the_address() {
    let dir = tempfile::tempdir().unwrap();

    addrbook_in(dir.path())
        .write_stdin(script(&[
            "1",
            "123 Main St",
            "Springfield",
            "IL",
            "62704",
            "5",
            "", // dismiss the table pause
            "0",
        ]))
        .assert()
        .success()
        .stdout(predicates::str::contains("Address added"))
        .stdout(predicates::str::contains("123 Main St"))
        .stdout(predicates::str::contains("Springfield"));
}

#[test]
fn ambiguous_update_disambiguates_by_option_number() {
    let dir = tempfile::tempdir().unwrap();

    // Two records share zip + street; pick the second and rename its city.
    addrbook_in(dir.path())
        .write_stdin(script(&[
            "1", "Main St", "Ames", "IA", "12345",
            "1", "Main St", "Boone", "IA", "12345",
            "2", "12345", "Main St",
            "2", // Opt 2 = the Boone record
            ".", "Nevada", ".", ".",
            "5", "",
            "0",
        ]))
        .assert()
        .success()
        .stdout(predicates::str::contains("Opt"))
        .stdout(predicates::str::contains("There were more than one addresses found"))
        .stdout(predicates::str::contains("Address updated"))
        .stdout(predicates::str::contains("Nevada"));
}

#[test]
fn choice_of_zero_aborts_the_update() {
    let dir = tempfile::tempdir().unwrap();

    addrbook_in(dir.path())
        .write_stdin(script(&[
            "1", "Main St", "Ames", "IA", "12345",
            "1", "Main St", "Boone", "IA", "12345",
            "2", "12345", "Main St",
            "0", // not a valid option: the flow aborts before any edit prompt
            "0",
        ]))
        .assert()
        .success()
        .stdout(predicates::str::contains("out of range [1-2]"))
        .stdout(predicates::str::contains("Edit fields").not());
}

#[test]
fn refused_delete_spares_the_address() {
    let dir = tempfile::tempdir().unwrap();

    addrbook_in(dir.path())
        .write_stdin(script(&[
            "1", "Oak Ave", "Ames", "IA", "50010",
            "3", "50010", "Oak Ave",
            "n",
            "5", "",
            "0",
        ]))
        .assert()
        .success()
        .stdout(predicates::str::contains("Address was spared."))
        .stdout(predicates::str::contains("Oak Ave"));
}

#[test]
fn confirmed_delete_removes_the_address() {
    let dir = tempfile::tempdir().unwrap();

    addrbook_in(dir.path())
        .write_stdin(script(&[
            "1", "Oak Ave", "Ames", "IA", "50010",
            "3", "50010", "Oak Ave",
            "murder it",
            "5",
            "0",
        ]))
        .assert()
        .success()
        .stdout(predicates::str::contains("Address was deleted."))
        .stdout(predicates::str::contains("No addresses found."));
}

#[test]
fn update_with_no_matches_reports_not_found() {
    let dir = tempfile::tempdir().unwrap();

    addrbook_in(dir.path())
        .write_stdin(script(&["2", "00000", "Nowhere", "0"]))
        .assert()
        .success()
        .stdout(predicates::str::contains("No matches found!"));
}

#[test]
fn search_by_city_finds_and_misses() {
    let dir = tempfile::tempdir().unwrap();

    addrbook_in(dir.path())
        .write_stdin(script(&[
            "1", "Main St", "Ames", "IA", "50010",
            "4", "2", "Ames", "",
            "4", "2", "Nowhere",
            "0",
        ]))
        .assert()
        .success()
        .stdout(predicates::str::contains("Main St"))
        .stdout(predicates::str::contains(
            "No addresses were found matching your search.",
        ));
}

#[test]
fn unknown_menu_input_redisplays_the_menu() {
    let dir = tempfile::tempdir().unwrap();

    let output = addrbook_in(dir.path())
        .write_stdin(script(&["9", "0"]))
        .assert()
        .success()
        .stdout(predicates::str::contains("Invalid selection."));

    // The menu is shown again after the bad input.
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    assert!(stdout.matches("Available Operations:").count() >= 2);
}
