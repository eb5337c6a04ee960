pub mod stores;

use crate::prelude::{AppError, Contact};
use std::fs::{self, OpenOptions};
use std::io::{Read, Write};
use std::path::Path;

pub use stores::JsonStorage;

pub const DEFAULT_STORAGE_PATH: &str = "contacts.json";

/// Whole-collection persistence for the address book.
///
/// `load` returns contacts in stored order, `save` replaces everything stored.
pub trait ContactStore {
    fn load(&self) -> Result<Vec<Contact>, AppError>;

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError>;
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
