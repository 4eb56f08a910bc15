pub mod command;
pub mod run;

pub use run::{execute, run_app};

use crate::domain::Contact;

/// Multi-line rendering of a contact, headed by its index. Empty fields are
/// skipped.
pub fn display_contact(index: usize, contact: &Contact) -> String {
    let mut output = format!(
        "{index:>3}. {}",
        contact.name.as_deref().filter(|n| !n.is_empty()).unwrap_or("(no name)")
    );

    for (label, value) in contact.labelled_fields().into_iter().skip(1) {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            output.push_str(&format!("\n     {label}: {value}"));
        }
    }

    for (key, value) in &contact.extra {
        match value.as_str() {
            Some(text) => output.push_str(&format!("\n     {key}: {text}")),
            None => output.push_str(&format!("\n     {key}: {value}")),
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_present_fields_only() {
        let contact = Contact {
            name: Some("Ana".to_string()),
            phone: Some("600111222".to_string()),
            email: Some("".to_string()),
            population: Some("Sevilla".to_string()),
            ..Default::default()
        };

        assert_eq!(
            display_contact(0, &contact),
            "  0. Ana\n     Phone: 600111222\n     Population: Sevilla"
        );
    }

    #[test]
    fn displays_placeholder_without_name() {
        let contact = Contact {
            dean: Some("Don Pedro".to_string()),
            ..Default::default()
        };

        assert_eq!(
            display_contact(12, &contact),
            " 12. (no name)\n     Dean: Don Pedro"
        );
    }
}
