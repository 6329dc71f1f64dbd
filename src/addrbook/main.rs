use addrbook::api::AddressBookApi;
use addrbook::commands::delete::is_affirmative;
use addrbook::error::{AddrBookError, Result};
use addrbook::model::{Address, AddressRecord, Field};
use addrbook::repo::fs::FileRepository;
use addrbook::repo::AddressRepository;
use addrbook::select::Selection;
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;

mod args;
mod print;
mod prompt;

use args::Cli;
use print::{print_address, print_address_table, print_messages};
use prompt::{pause, prompt, prompt_patch, StdinChooser};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let repo = FileRepository::new(resolve_data_dir(&cli)?);
    let mut api = AddressBookApi::new(repo);

    loop {
        print_menu();
        let selection = prompt("Select Operation: ")?;
        println!();

        match selection.as_str() {
            "1" => handle_add(&mut api)?,
            "2" => handle_update(&mut api)?,
            "3" => handle_delete(&mut api)?,
            "4" => handle_search(&api)?,
            "5" => handle_list(&api)?,
            "0" => break,
            _ => {
                println!("Invalid selection.");
                println!();
            }
        }
    }

    Ok(())
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    let proj_dirs = ProjectDirs::from("com", "addrbook", "addrbook")
        .ok_or_else(|| AddrBookError::Store("could not determine a data directory".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn print_menu() {
    println!("Available Operations:");
    println!("1 Add an address");
    println!("2 Update an address");
    println!("3 Delete an address");
    println!("4 Search for an address");
    println!("5 Display all addresses");
    println!("0 Exit program");
    println!();
}

fn handle_add<R: AddressRepository>(api: &mut AddressBookApi<R>) -> Result<()> {
    let street = prompt("Street: ")?;
    let city = prompt("City: ")?;
    let state = prompt("State: ")?;
    let zip_code = prompt("Zip Code: ")?;
    println!();

    let result = api.add_address(Address::new(street, city, state, zip_code))?;
    print_messages(&result.messages);
    println!();
    Ok(())
}

/// Shared front half of update and delete: prompt for the composite key and
/// run it through the selection engine. `None` means the operation is over
/// (the reason has already been printed).
fn select_record<R: AddressRepository>(
    api: &AddressBookApi<R>,
) -> Result<Option<AddressRecord>> {
    let zip_code = prompt("Zip Code: ")?;
    let street = prompt("Street: ")?;
    println!();

    match api.select_address(&mut StdinChooser, &zip_code, &street)? {
        Selection::Resolved(record) => Ok(Some(record)),
        Selection::NotFound => {
            println!("No matches found!");
            println!();
            Ok(None)
        }
        Selection::Invalid(reason) => {
            println!("{}", reason);
            println!();
            Ok(None)
        }
    }
}

fn handle_update<R: AddressRepository>(api: &mut AddressBookApi<R>) -> Result<()> {
    let Some(record) = select_record(api)? else {
        return Ok(());
    };

    println!("Selected Address:");
    print_address(&record);
    println!();

    println!("Edit fields. Use \".\" to signify no change.");
    let patch = prompt_patch()?;

    let result = api.update_address(record.metadata.id, &patch)?;
    print_messages(&result.messages);
    println!();
    Ok(())
}

fn handle_delete<R: AddressRepository>(api: &mut AddressBookApi<R>) -> Result<()> {
    let Some(record) = select_record(api)? else {
        return Ok(());
    };

    println!("Selected Address:");
    print_address(&record);
    println!();

    let reply = prompt("Are you sure you want to delete this address? (Y/N): ")?;
    println!();

    let result = api.delete_address(record.metadata.id, is_affirmative(&reply))?;
    print_messages(&result.messages);
    println!();
    Ok(())
}

fn handle_search<R: AddressRepository>(api: &AddressBookApi<R>) -> Result<()> {
    println!("Search by");
    println!("1 Zip Code");
    println!("2 City");
    println!("3 State");
    println!("4 Street Address");
    println!("0 Return to Main Menu");
    println!();
    let selection = prompt("Option: ")?;
    println!();

    let field = match selection.as_str() {
        "1" => Field::ZipCode,
        "2" => Field::City,
        "3" => Field::State,
        "4" => Field::Street,
        "0" => return Ok(()),
        _ => {
            println!("Invalid selection.");
            println!();
            return Ok(());
        }
    };

    let value = prompt(&format!("{}: ", field.label()))?;
    println!();

    let result = api.search_addresses(field, &value)?;
    if result.listed.is_empty() {
        println!("No addresses were found matching your search.");
        println!();
    } else {
        print_address_table(&result.listed, false);
        pause()?;
    }
    Ok(())
}

fn handle_list<R: AddressRepository>(api: &AddressBookApi<R>) -> Result<()> {
    let result = api.list_addresses()?;
    if result.listed.is_empty() {
        println!("No addresses found.");
        println!();
    } else {
        print_address_table(&result.listed, false);
        pause()?;
    }
    Ok(())
}
