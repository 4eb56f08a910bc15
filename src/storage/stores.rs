use super::*;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

pub struct JsonStorage {
    pub medium: String,
    pub path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            medium: "json".to_string(),
            path: path.into(),
        }
    }
}

impl ContactStore for JsonStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        if !fs::exists(&self.path)? {
            tracing::debug!(path = %self.path.display(), "no contact file yet, starting empty");
            return Ok(Vec::new());
        }

        let data = fs::read_to_string(&self.path)?;

        // serde_json will give an error if data is empty
        if data.trim().is_empty() {
            return Ok(Vec::new());
        }

        let contacts: Vec<Contact> = serde_json::from_str(&data)?;

        tracing::debug!(path = %self.path.display(), count = contacts.len(), "loaded contacts");
        Ok(contacts)
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let data = to_pretty_json(contacts)?;

        // Write next to the target and rename over it, so a crash mid-write
        // leaves the previous file in place.
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(&data)?;

        // The temp file starts out owner-only; keep the mode the contact
        // file already had.
        if fs::exists(&self.path)? {
            fs::set_permissions(file.path(), fs::metadata(&self.path)?.permissions())?;
        }

        file.as_file().sync_all()?;
        file.persist(&self.path)?;

        tracing::debug!(path = %self.path.display(), count = contacts.len(), "saved contacts");
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}

/// Four-space indented JSON array with non-ASCII left as is.
pub fn to_pretty_json(contacts: &[Contact]) -> Result<Vec<u8>, AppError> {
    let mut data = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut data, PrettyFormatter::with_indent(b"    "));
    contacts.serialize(&mut serializer)?;
    data.push(b'\n');
    Ok(data)
}
