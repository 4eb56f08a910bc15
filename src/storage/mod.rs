pub mod memory;
pub mod stores;

use crate::prelude::{AppError, Contact};
use std::fs;
use std::path::Path;

pub use memory::MemStorage;
pub use stores::JsonStorage;

/// Where the contact list lives between runs.
pub trait ContactStore {
    fn load(&self) -> Result<Vec<Contact>, AppError>;

    /// Replaces everything previously stored with `contacts`.
    fn save(&self, contacts: &[Contact]) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
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
