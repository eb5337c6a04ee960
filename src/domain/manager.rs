use super::*;

use log::debug;

/// In-memory address book.
///
/// Contacts are kept in insertion order, which is also the listing order.
/// Lookups are a linear scan on the (first name, last name) key.
#[derive(Debug, Default, Clone)]
pub struct ContactManager {
    mem: Vec<Contact>,
}

impl ContactManager {
    pub fn new() -> Self {
        Self { mem: Vec::new() }
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self { mem: contacts }
    }

    /// Appends `contact` unless its key is already taken.
    pub fn add(&mut self, contact: Contact) -> Result<(), AppError> {
        if self.find(&contact.first_name, &contact.last_name).is_some() {
            debug!("rejected duplicate contact {}", contact.full_name());
            return Err(AppError::DuplicateContact(contact.full_name()));
        }

        self.mem.push(contact);
        Ok(())
    }

    pub fn find(&self, first_name: &str, last_name: &str) -> Option<&Contact> {
        self.mem.iter().find(|c| c.has_key(first_name, last_name))
    }

    fn position(&self, first_name: &str, last_name: &str) -> Option<usize> {
        self.mem.iter().position(|c| c.has_key(first_name, last_name))
    }

    /// Overwrites every field of the contact stored under the given key.
    ///
    /// The new key is not checked against the rest of the book, so an edit can
    /// leave two contacts sharing a key. `find` then returns the earlier one.
    pub fn edit(&mut self, first_name: &str, last_name: &str, new_fields: Contact) -> bool {
        match self.position(first_name, last_name) {
            Some(index) => {
                let contact = &mut self.mem[index];
                contact.first_name = new_fields.first_name;
                contact.last_name = new_fields.last_name;
                contact.phone = new_fields.phone;
                contact.email = new_fields.email;
                true
            }
            None => {
                debug!("edit missed {} {}", first_name, last_name);
                false
            }
        }
    }

    pub fn delete(&mut self, first_name: &str, last_name: &str) -> bool {
        match self.position(first_name, last_name) {
            Some(index) => {
                self.mem.remove(index);
                true
            }
            None => {
                debug!("delete missed {} {}", first_name, last_name);
                false
            }
        }
    }

    pub fn list(&self) -> &[Contact] {
        &self.mem
    }

    pub fn len(&self) -> usize {
        self.mem.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mem.is_empty()
    }

    /// Replaces the whole book with what `storage` holds.
    pub fn load_from(&mut self, storage: &dyn ContactStore) -> Result<(), AppError> {
        self.mem = storage.load()?;
        Ok(())
    }

    pub fn save_to(&self, storage: &dyn ContactStore) -> Result<(), AppError> {
        storage.save(&self.mem)
    }
}
