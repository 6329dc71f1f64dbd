use crate::print;
use addrbook::error::{AddrBookError, Result};
use addrbook::model::{AddressPatch, AddressRecord};
use addrbook::select::Chooser;
use std::io::{self, Write};

/// The reply that leaves a field unchanged during an update. A UI convention
/// only: below the prompt layer edits are `Option`s, not sentinels.
const NO_CHANGE: &str = ".";

pub(crate) fn prompt(label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout().flush().map_err(AddrBookError::Io)?;

    let mut input = String::new();
    let read = io::stdin().read_line(&mut input).map_err(AddrBookError::Io)?;
    if read == 0 {
        return Err(AddrBookError::Store("unexpected end of input".to_string()));
    }
    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}

pub(crate) fn pause() -> Result<()> {
    prompt("Press enter to continue...")?;
    println!();
    Ok(())
}

fn edited_field(label: &str) -> Result<Option<String>> {
    let value = prompt(label)?;
    if value == NO_CHANGE {
        Ok(None)
    } else {
        Ok(Some(value))
    }
}

pub(crate) fn prompt_patch() -> Result<AddressPatch> {
    let patch = AddressPatch {
        street: edited_field("Street: ")?,
        city: edited_field("City: ")?,
        state: edited_field("State: ")?,
        zip_code: edited_field("Zip Code: ")?,
    };
    println!();
    Ok(patch)
}

/// Stdin-backed disambiguation: shows the numbered table, reads one line.
pub(crate) struct StdinChooser;

impl Chooser for StdinChooser {
    fn choose(&mut self, candidates: &[AddressRecord]) -> Result<String> {
        print::print_address_table(candidates, true);
        println!(
            "There were more than one addresses found. Please choose which address you would like to select"
        );
        let reply = prompt("Option: ")?;
        println!();
        Ok(reply)
    }
}
