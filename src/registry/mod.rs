//! Command Registry - phrases and contacts a transcript can resolve to
//!
//! The registry is built once at startup (from config or the built-in
//! defaults) and is read-only afterwards. Construction normalizes phrases
//! and contact names to lowercase and rejects duplicates, so the resolver
//! never has to deal with ambiguous entries.
//!
//! Example default entries:
//! - "gmail" -> opens https://gmail.com
//! - "whatsapp" -> launches whatsapp://send?text=Hello%20World
//! - contact "safi" -> dialed via "call safi"

mod action;
mod defaults;

pub use action::{is_app_scheme, ActionSpec, CommandEntry, ContactEntry, APP_SCHEME_PREFIXES};
pub use defaults::{default_commands, default_contacts, DEFAULT_COMMANDS, DEFAULT_CONTACTS};

use std::collections::HashMap;

use thiserror::Error;

/// Errors raised while building a registry
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Command phrase must not be empty")]
    EmptyPhrase,

    #[error("Duplicate command phrase: {0}")]
    DuplicatePhrase(String),

    #[error("Contact name must not be empty")]
    EmptyContactName,

    #[error("Duplicate contact name: {0}")]
    DuplicateContact(String),

    #[error("Invalid phone number for contact '{name}': {number}")]
    InvalidPhoneNumber { name: String, number: String },
}

/// Immutable registry of command phrases and contacts
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    /// Command entries in registry order (the fuzzy tie-break order)
    commands: Vec<CommandEntry>,

    /// Lowercase contact name -> phone number (digits)
    contacts: HashMap<String, String>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self {
            commands: default_commands(),
            contacts: default_contacts()
                .into_iter()
                .map(|c| (c.name, c.phone_number))
                .collect(),
        }
    }
}

impl CommandRegistry {
    /// Build a registry, normalizing and validating every entry
    pub fn new<I>(commands: Vec<CommandEntry>, contacts: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = ContactEntry>,
    {
        let mut normalized: Vec<CommandEntry> = Vec::with_capacity(commands.len());
        for entry in commands {
            let phrase = normalize_key(&entry.phrase);
            if phrase.is_empty() {
                return Err(RegistryError::EmptyPhrase);
            }
            if normalized.iter().any(|e| e.phrase == phrase) {
                return Err(RegistryError::DuplicatePhrase(phrase));
            }
            normalized.push(CommandEntry::with_target(phrase, entry.target));
        }

        let mut contact_map = HashMap::new();
        for contact in contacts {
            let name = normalize_key(&contact.name);
            if name.is_empty() {
                return Err(RegistryError::EmptyContactName);
            }
            let number = contact.phone_number.trim().to_string();
            if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
                return Err(RegistryError::InvalidPhoneNumber {
                    name,
                    number: contact.phone_number,
                });
            }
            if contact_map.insert(name.clone(), number).is_some() {
                return Err(RegistryError::DuplicateContact(name));
            }
        }

        Ok(Self {
            commands: normalized,
            contacts: contact_map,
        })
    }

    /// Look up a contact's phone number (case and surrounding whitespace ignored)
    pub fn resolve_contact(&self, name: &str) -> Option<&str> {
        self.contacts.get(&normalize_key(name)).map(|s| s.as_str())
    }

    /// All command entries in registry order
    pub fn all_commands(&self) -> &[CommandEntry] {
        &self.commands
    }

    /// Contacts sorted by name, for display
    pub fn contacts(&self) -> Vec<ContactEntry> {
        let mut contacts: Vec<ContactEntry> = self
            .contacts
            .iter()
            .map(|(name, number)| ContactEntry {
                name: name.clone(),
                phone_number: number.clone(),
            })
            .collect();
        contacts.sort_by(|a, b| a.name.cmp(&b.name));
        contacts
    }
}

/// Lowercase, trim and collapse inner whitespace
pub(crate) fn normalize_key(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests;
