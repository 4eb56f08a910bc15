use std::cell::RefCell;
use std::io;

use super::{AppError, Contact, ContactStore};

/// Keeps contacts in memory only. `failing()` builds a store whose saves
/// always fail, for exercising error paths.
#[derive(Debug, Default)]
pub struct MemStorage {
    pub data: RefCell<Vec<Contact>>,
    fail_saves: bool,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            data: RefCell::new(contacts),
            fail_saves: false,
        }
    }

    pub fn failing(contacts: Vec<Contact>) -> Self {
        Self {
            data: RefCell::new(contacts),
            fail_saves: true,
        }
    }
}

impl ContactStore for MemStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.data.borrow().clone())
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        if self.fail_saves {
            return Err(AppError::Io(io::Error::other("memory store is read-only")));
        }

        *self.data.borrow_mut() = contacts.to_vec();
        Ok(())
    }

    fn get_medium(&self) -> &str {
        "mem"
    }
}
