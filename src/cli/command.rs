use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;

use crate::errors::AppError;
use crate::logging::DEFAULT_LOG_LEVEL;
use crate::storage::DEFAULT_STORAGE_PATH;

#[derive(Parser, Debug)]
#[command(name = "contact-ease", version, about = "ContactEase interactive address book")]
pub struct Cli {
    /// JSON file the contacts are loaded from and saved to
    #[arg(long, env = "CONTACTS_FILE", default_value = DEFAULT_STORAGE_PATH)]
    pub file: PathBuf,

    /// Log filter written to stderr (trace, debug, info, warn, error)
    #[arg(long, env = "CONTACTS_LOG", default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

/// Entries of the interactive menu, numbered as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddContact,
    ViewContacts,
    EditContact,
    DeleteContact,
    SearchContact,
    SaveAndExit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::AddContact,
        MenuChoice::ViewContacts,
        MenuChoice::EditContact,
        MenuChoice::DeleteContact,
        MenuChoice::SearchContact,
        MenuChoice::SaveAndExit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::AddContact => "1. Add Contact",
            MenuChoice::ViewContacts => "2. View Contacts",
            MenuChoice::EditContact => "3. Edit Contact",
            MenuChoice::DeleteContact => "4. Delete Contact",
            MenuChoice::SearchContact => "5. Search Contact",
            MenuChoice::SaveAndExit => "6. Save and Exit",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = AppError;

    fn from_str(action: &str) -> Result<Self, Self::Err> {
        match action.trim() {
            "1" => Ok(MenuChoice::AddContact),
            "2" => Ok(MenuChoice::ViewContacts),
            "3" => Ok(MenuChoice::EditContact),
            "4" => Ok(MenuChoice::DeleteContact),
            "5" => Ok(MenuChoice::SearchContact),
            "6" => Ok(MenuChoice::SaveAndExit),
            _ => Err(AppError::ParseCommand(action.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn file_defaults_to_contacts_json() {
        let cli = Cli::parse_from(["contact-ease"]);

        assert_eq!(cli.file, PathBuf::from("contacts.json"));
    }

    #[test]
    fn file_flag_overrides_default() {
        let cli = Cli::parse_from(["contact-ease", "--file", "/tmp/book.json"]);

        assert_eq!(cli.file, PathBuf::from("/tmp/book.json"));
    }

    #[test]
    fn parses_every_menu_number() {
        for (number, choice) in (1..=6).zip(MenuChoice::ALL) {
            assert_eq!(number.to_string().parse::<MenuChoice>().ok(), Some(choice));
        }
        assert_eq!(" 2 ".parse::<MenuChoice>().ok(), Some(MenuChoice::ViewContacts));
    }

    #[test]
    fn rejects_anything_else() {
        for bad in ["", "0", "7", "one", "1 2"] {
            assert!(matches!(bad.parse::<MenuChoice>(), Err(AppError::ParseCommand(_))));
        }
    }
}
