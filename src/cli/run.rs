use crate::{
    cli::{prompt, prompt_fields, show_menu},
    logging::init_logging,
    prelude::{
        AppError, Contact, ContactManager, ContactStore, JsonStorage,
        command::{Cli, MenuChoice},
    },
};
use clap::Parser;
use dotenv::dotenv;
use log::{debug, warn};
use std::io::{self, BufRead, Write};

pub const FILE_NOT_FOUND_NOTICE: &str = "File not found. Starting with an empty contact list.";
pub const NOT_FOUND: &str = "Contact not found.";

/// How the menu loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellExit {
    Saved,
    EndOfInput,
}

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();
    let cli = Cli::parse();

    let _logger = init_logging(&cli.log_level)?;

    let storage = JsonStorage::new(cli.file);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    let mut manager = open_contacts(&storage, &mut output)?;
    run_shell(&mut manager, &storage, &mut input, &mut output)?;
    Ok(())
}

/// Loads the address book, telling the user when there is no file yet.
pub fn open_contacts<W: Write>(
    storage: &JsonStorage,
    output: &mut W,
) -> Result<ContactManager, AppError> {
    if !storage.exists()? {
        writeln!(output, "{}", FILE_NOT_FOUND_NOTICE)?;
    }

    let mut manager = ContactManager::new();
    manager.load_from(storage)?;
    Ok(manager)
}

/// Runs the menu until the user saves and exits or the input ends.
///
/// Store misses and duplicate keys are reported to the user and the loop carries
/// on. Only I/O and persistence failures are returned.
pub fn run_shell<R: BufRead, W: Write>(
    manager: &mut ContactManager,
    storage: &dyn ContactStore,
    input: &mut R,
    output: &mut W,
) -> Result<ShellExit, AppError> {
    loop {
        show_menu(output)?;

        let Some(action) = prompt(input, output, "Choose an option: ")? else {
            return Ok(end_of_input());
        };

        let choice = match action.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(e) => {
                debug!("{}", e);
                writeln!(output, "Invalid choice. Please try again.")?;
                continue;
            }
        };

        match choice {
            MenuChoice::AddContact => {
                let Some([first_name, last_name, phone, email]) = prompt_fields(
                    input,
                    output,
                    ["First Name: ", "Last Name: ", "Phone: ", "Email: "],
                )?
                else {
                    return Ok(end_of_input());
                };

                let new_contact = Contact {
                    first_name,
                    last_name,
                    phone,
                    email,
                };

                match manager.add(new_contact) {
                    Ok(()) => writeln!(output, "Contact added successfully.")?,
                    Err(e @ AppError::DuplicateContact(_)) => {
                        writeln!(output, "{}", e)?;
                        writeln!(output, "Please try again.")?;
                    }
                    Err(e) => return Err(e),
                }
            }

            MenuChoice::ViewContacts => {
                for contact in manager.list() {
                    writeln!(output, "{}", contact)?;
                }
            }

            MenuChoice::EditContact => {
                let Some([first_name, last_name, new_first, new_last, new_phone, new_email]) =
                    prompt_fields(
                        input,
                        output,
                        [
                            "First Name of the contact to edit: ",
                            "Last Name of the contact to edit: ",
                            "New First Name: ",
                            "New Last Name: ",
                            "New Phone: ",
                            "New Email: ",
                        ],
                    )?
                else {
                    return Ok(end_of_input());
                };

                let new_fields = Contact {
                    first_name: new_first,
                    last_name: new_last,
                    phone: new_phone,
                    email: new_email,
                };

                if manager.edit(&first_name, &last_name, new_fields) {
                    writeln!(output, "Contact updated successfully.")?;
                } else {
                    writeln!(output, "{}", NOT_FOUND)?;
                }
            }

            MenuChoice::DeleteContact => {
                let Some([first_name, last_name]) = prompt_fields(
                    input,
                    output,
                    [
                        "First Name of the contact to delete: ",
                        "Last Name of the contact to delete: ",
                    ],
                )?
                else {
                    return Ok(end_of_input());
                };

                if manager.delete(&first_name, &last_name) {
                    writeln!(output, "Contact deleted successfully.")?;
                } else {
                    writeln!(output, "{}", NOT_FOUND)?;
                }
            }

            MenuChoice::SearchContact => {
                let Some([first_name, last_name]) =
                    prompt_fields(input, output, ["First Name: ", "Last Name: "])?
                else {
                    return Ok(end_of_input());
                };

                match manager.find(&first_name, &last_name) {
                    Some(contact) => writeln!(output, "{}", contact)?,
                    None => writeln!(output, "{}", NOT_FOUND)?,
                }
            }

            MenuChoice::SaveAndExit => {
                manager.save_to(storage)?;
                writeln!(output, "Contacts saved. Exiting...")?;
                output.flush()?;
                return Ok(ShellExit::Saved);
            }
        }
    }
}

fn end_of_input() -> ShellExit {
    warn!("input closed before Save and Exit, changes were not saved");
    ShellExit::EndOfInput
}
