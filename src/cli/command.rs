use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::{Contact, ContactPatch};
use crate::errors::AppError;

#[derive(Parser, Debug)]
#[command(name = "parish-rolodex", version, about = "Parish contact book")]
pub struct Cli {
    /// JSON file the contacts are kept in (default: $CONTACTS_FILE or contacts.json)
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        #[command(flatten)]
        fields: ContactForm,
    },
    /// List every contact with its index
    List,
    /// Find contacts by population (case-insensitive)
    Search {
        /// Population to look for
        #[arg(long, alias = "locality")]
        population: String,
    },
    /// Edit the contact at an index
    /// Only the fields given are changed
    Edit {
        /// Index shown by `list`
        #[arg(long, allow_negative_numbers = true)]
        index: i64,

        #[command(flatten)]
        fields: ContactForm,
    },
    /// Delete the contact at an index
    /// Contacts after it move up one index
    Delete {
        /// Index shown by `list`
        #[arg(long, allow_negative_numbers = true)]
        index: i64,
    },
}

/// Contact fields as given on the command line.
#[derive(Args, Debug, Default, Clone)]
pub struct ContactForm {
    /// Contact name
    #[arg(long)]
    pub name: Option<String>,

    /// Contact phone number
    #[arg(long)]
    pub phone: Option<String>,

    /// Contact email address
    #[arg(long)]
    pub email: Option<String>,

    /// Town or locality
    #[arg(long, alias = "locality")]
    pub population: Option<String>,

    /// Unit
    #[arg(long)]
    pub unit: Option<String>,

    /// Moderator name
    #[arg(long)]
    pub moderator: Option<String>,

    /// Moderator phone number
    #[arg(long)]
    pub moderator_phone: Option<String>,

    /// Deanery
    #[arg(long)]
    pub deanery: Option<String>,

    /// Dean name
    #[arg(long)]
    pub dean: Option<String>,

    /// Dean phone number
    #[arg(long)]
    pub dean_phone: Option<String>,

    /// Animator name
    #[arg(long)]
    pub animator: Option<String>,

    /// Animator phone number
    #[arg(long)]
    pub animator_phone: Option<String>,
}

impl ContactForm {
    /// Builds a new contact. Values are trimmed; a form with nothing but
    /// blanks is rejected.
    pub fn into_contact(self) -> Result<Contact, AppError> {
        let patch = self.into_patch();

        let has_content = patched_values(&patch)
            .into_iter()
            .any(|value| value.is_some_and(|v| !v.is_empty()));

        if !has_content {
            return Err(AppError::Validation(
                "Contact form is empty, provide at least one field".to_string(),
            ));
        }

        let mut contact = Contact::default();
        contact.apply(patch);
        Ok(contact)
    }

    pub fn into_patch(self) -> ContactPatch {
        let trim = |value: Option<String>| value.map(|v| v.trim().to_string());

        ContactPatch {
            name: trim(self.name),
            phone: trim(self.phone),
            email: trim(self.email),
            population: trim(self.population),
            unit: trim(self.unit),
            moderator: trim(self.moderator),
            moderator_phone: trim(self.moderator_phone),
            deanery: trim(self.deanery),
            dean: trim(self.dean),
            dean_phone: trim(self.dean_phone),
            animator: trim(self.animator),
            animator_phone: trim(self.animator_phone),
        }
    }
}

fn patched_values(patch: &ContactPatch) -> [Option<&str>; 12] {
    [
        patch.name.as_deref(),
        patch.phone.as_deref(),
        patch.email.as_deref(),
        patch.population.as_deref(),
        patch.unit.as_deref(),
        patch.moderator.as_deref(),
        patch.moderator_phone.as_deref(),
        patch.deanery.as_deref(),
        patch.dean.as_deref(),
        patch.dean_phone.as_deref(),
        patch.animator.as_deref(),
        patch.animator_phone.as_deref(),
    ]
}
