use crate::{
    cli::{
        command::{Cli, Commands},
        display_contact,
    },
    config,
    prelude::{AppError, ContactManager, JsonStorage},
};
use clap::Parser;
use std::io::{self, Write};

pub fn run_app() -> Result<(), AppError> {
    let cli = Cli::parse();

    let file = cli.file.unwrap_or_else(config::storage_path_from_env);

    let mut manager = ContactManager::new(Box::new(JsonStorage::new(&file)))?;

    tracing::debug!(
        file = %file.display(),
        medium = manager.storage.get_medium(),
        count = manager.len(),
        "contact book opened"
    );

    let stdout = io::stdout();
    execute(cli.command, &mut manager, &mut stdout.lock())
}

/// Runs one command against `manager`, writing user-facing output to `out`.
pub fn execute(
    command: Commands,
    manager: &mut ContactManager,
    out: &mut impl Write,
) -> Result<(), AppError> {
    match command {
        Commands::Add { fields } => {
            let new_contact = fields.into_contact()?;

            manager.add_contact(new_contact)?;

            writeln!(out, "Contact added successfully")?;
            Ok(())
        }

        // Listing contacts
        Commands::List => {
            if manager.is_empty() {
                writeln!(out, "No contacts yet")?;
                return Ok(());
            }

            for (i, contact) in manager.contact_list().iter().enumerate() {
                writeln!(out, "{}", display_contact(i, contact))?;
            }
            Ok(())
        }

        Commands::Search { population } => {
            let found = manager.search_by_population_indexed(&population);

            if found.is_empty() {
                writeln!(out, "No contacts found in {}", population)?;
                return Ok(());
            }

            writeln!(out, "Contacts in {}:", population)?;

            // Show the list index so results can be edited or deleted
            for (i, contact) in found {
                writeln!(out, "{}", display_contact(i, contact))?;
            }
            Ok(())
        }

        Commands::Edit { index, fields } => {
            let updated = match usize::try_from(index) {
                Ok(position) => manager.edit_contact(position, fields.into_patch())?,
                Err(_) => {
                    tracing::warn!(index, "edit ignored, negative index");
                    false
                }
            };

            if updated {
                writeln!(out, "Contact updated successfully")?;
            } else {
                writeln!(out, "No contact at index {}", index)?;
            }
            Ok(())
        }

        Commands::Delete { index } => {
            let deleted = match usize::try_from(index) {
                Ok(position) => manager.delete_contact(position)?,
                Err(_) => {
                    tracing::warn!(index, "delete ignored, negative index");
                    false
                }
            };

            if deleted {
                writeln!(out, "Contact deleted successfully")?;
            } else {
                writeln!(out, "No contact at index {}", index)?;
            }
            Ok(())
        }
    }
}
