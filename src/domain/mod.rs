pub mod contact;
pub mod manager;

use crate::errors::AppError;
use crate::storage::ContactStore;

pub use contact::{Contact, ContactPatch};
pub use manager::ContactManager;
