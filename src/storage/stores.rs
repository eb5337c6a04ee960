use super::*;

use log::{info, warn};
use std::path::PathBuf;

/// Keeps the address book as one JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    pub path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn exists(&self) -> Result<bool, AppError> {
        Ok(fs::exists(&self.path)?)
    }
}

impl Default for JsonStorage {
    fn default() -> Self {
        Self::new(DEFAULT_STORAGE_PATH)
    }
}

impl ContactStore for JsonStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        if !self.exists()? {
            warn!(
                "{} does not exist, starting with an empty contact list",
                self.path.display()
            );
            return Ok(Vec::new());
        }

        let mut file = OpenOptions::new().read(true).open(&self.path)?;
        let mut data = String::new();
        file.read_to_string(&mut data)?;

        // An empty file is malformed too; only a missing file means "no contacts".
        let contacts: Vec<Contact> = serde_json::from_str(&data)?;

        info!("loaded {} contacts from {}", contacts.len(), self.path.display());
        Ok(contacts)
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let json_contacts = serde_json::to_string(contacts)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;
        file.write_all(json_contacts.as_bytes())?;
        file.flush()?;

        info!("saved {} contacts to {}", contacts.len(), self.path.display());
        Ok(())
    }
}
