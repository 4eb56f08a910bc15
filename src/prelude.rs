pub use crate::cli::{command, run_app};
pub use crate::config;
pub use crate::domain::{
    contact::{self, Contact, ContactPatch},
    manager::ContactManager,
};
pub use crate::errors::AppError;
pub use crate::storage::{self, ContactStore, JsonStorage, MemStorage};
