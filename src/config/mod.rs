//! Configuration loading and management

mod io;
mod settings;
mod template;

pub use settings::{PlatformSettings, RecognitionSettings, Settings};
pub use template::DEFAULT_CONFIG;

use std::collections::BTreeMap;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::registry::{
    CommandEntry, CommandRegistry, ContactEntry, DEFAULT_COMMANDS, DEFAULT_CONTACTS,
};
use crate::resolver::{CommandResolver, PlatformProfile};
use crate::session::ListeningSession;

/// A configured command phrase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandConfig {
    /// Spoken phrase (matched case-insensitively, with fuzzy tolerance)
    pub phrase: String,

    /// URL to open; `whatsapp://` and `instagram://` links launch the app
    pub url: String,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub settings: Settings,

    /// Contact name -> phone number (digits)
    #[serde(default = "default_contact_map")]
    pub contacts: BTreeMap<String, String>,

    /// Command phrases, in match priority order
    #[serde(default = "default_command_list", rename = "command")]
    pub commands: Vec<CommandConfig>,
}

fn default_contact_map() -> BTreeMap<String, String> {
    DEFAULT_CONTACTS
        .iter()
        .map(|(name, number)| (name.to_string(), number.to_string()))
        .collect()
}

fn default_command_list() -> Vec<CommandConfig> {
    DEFAULT_COMMANDS
        .iter()
        .map(|(phrase, url)| CommandConfig {
            phrase: phrase.to_string(),
            url: url.to_string(),
        })
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            contacts: default_contact_map(),
            commands: default_command_list(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    /// Check settings ranges and registry invariants
    pub fn validate(&self) -> Result<()> {
        let threshold = self.settings.match_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            bail!(
                "settings.match_threshold must be between 0.0 and 1.0 (got {})",
                threshold
            );
        }
        self.to_registry()?;
        Ok(())
    }

    /// Build the immutable command registry
    pub fn to_registry(&self) -> Result<CommandRegistry> {
        let commands = self
            .commands
            .iter()
            .map(|c| CommandEntry::new(c.phrase.clone(), &c.url))
            .collect();
        let contacts = self.contacts.iter().map(|(name, number)| ContactEntry {
            name: name.clone(),
            phone_number: number.clone(),
        });

        CommandRegistry::new(commands, contacts).context("Invalid command registry in config")
    }

    /// Build a resolver with the configured registry and matching settings
    pub fn resolver(&self) -> Result<CommandResolver> {
        Ok(CommandResolver::new(self.to_registry()?)
            .with_threshold(self.settings.match_threshold)
            .with_whatsapp_message(self.settings.whatsapp_message.clone()))
    }

    pub fn platform(&self) -> PlatformProfile {
        self.settings.platform.profile()
    }

    pub fn fallback_delay(&self) -> Duration {
        Duration::from_millis(self.settings.app_fallback_delay_ms)
    }

    /// Build an idle listening session with the configured options
    pub fn session(&self) -> ListeningSession {
        ListeningSession::new((&self.settings.recognition).into())
            .with_welcome_message(self.settings.welcome_message.clone())
    }
}
