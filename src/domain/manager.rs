use super::*;

/// The contact book: an ordered list of contacts mirrored to a
/// [`ContactStore`].
///
/// Contacts are addressed by their position in insertion order. Every
/// mutation is written through to the store before it returns, and is undone
/// in memory if that write fails, so the list and the store never disagree.
///
/// Mutations take `&mut self`, which keeps a single writer per process. Two
/// processes sharing one contact file are not coordinated: the last save wins.
pub struct ContactManager {
    mem: Vec<Contact>,
    pub storage: Box<dyn ContactStore>,
}

impl ContactManager {
    pub fn new(storage: Box<dyn ContactStore>) -> Result<Self, AppError> {
        let mut manager = Self {
            mem: Vec::new(),
            storage,
        };
        manager.load()?;
        Ok(manager)
    }

    pub fn load(&mut self) -> Result<(), AppError> {
        self.mem = self.storage.load()?;
        Ok(())
    }

    pub fn save(&self) -> Result<(), AppError> {
        self.storage.save(&self.mem)
    }

    pub fn contact_list(&self) -> &[Contact] {
        &self.mem
    }

    pub fn get(&self, index: usize) -> Option<&Contact> {
        self.mem.get(index)
    }

    pub fn len(&self) -> usize {
        self.mem.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mem.is_empty()
    }

    pub fn add_contact(&mut self, contact: Contact) -> Result<(), AppError> {
        self.mem.push(contact);

        if let Err(err) = self.save() {
            self.mem.pop();
            return Err(err);
        }

        tracing::info!(index = self.mem.len() - 1, "contact added");
        Ok(())
    }

    /// Contacts whose population equals `population`, ignoring case. A
    /// contact without a population only matches the empty string.
    pub fn search_by_population(&self, population: &str) -> Vec<&Contact> {
        self.search_by_population_indexed(population)
            .into_iter()
            .map(|(_, contact)| contact)
            .collect()
    }

    /// Same matches as [`Self::search_by_population`], each paired with its
    /// position in the list.
    pub fn search_by_population_indexed(&self, population: &str) -> Vec<(usize, &Contact)> {
        self.mem
            .iter()
            .enumerate()
            .filter(|(_, contact)| contact.lives_in(population))
            .collect()
    }

    /// Merges `patch` into the contact at `index` and saves.
    ///
    /// An index past the end is ignored and reported as `Ok(false)`, not as
    /// an error.
    pub fn edit_contact(&mut self, index: usize, patch: ContactPatch) -> Result<bool, AppError> {
        if index >= self.mem.len() {
            tracing::warn!(index, len = self.mem.len(), "edit ignored, no contact at index");
            return Ok(false);
        }

        let previous = self.mem[index].clone();
        self.mem[index].apply(patch);

        if let Err(err) = self.save() {
            self.mem[index] = previous;
            return Err(err);
        }

        tracing::info!(index, "contact updated");
        Ok(true)
    }

    /// Removes the contact at `index` and saves. Later contacts move down
    /// one position. An index past the end is ignored (`Ok(false)`).
    pub fn delete_contact(&mut self, index: usize) -> Result<bool, AppError> {
        if index >= self.mem.len() {
            tracing::warn!(index, len = self.mem.len(), "delete ignored, no contact at index");
            return Ok(false);
        }

        let removed = self.mem.remove(index);

        if let Err(err) = self.save() {
            self.mem.insert(index, removed);
            return Err(err);
        }

        tracing::info!(index, "contact deleted");
        Ok(true)
    }
}
