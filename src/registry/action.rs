//! ActionSpec and CommandEntry types
//!
//! This module defines what a recognized command resolves to, and the
//! phrase entries the registry is built from.

use serde::{Deserialize, Serialize};

/// URL scheme prefixes that launch a native app instead of a web page
pub const APP_SCHEME_PREFIXES: &[&str] = &["whatsapp://", "instagram://"];

/// Resolved, platform-independent description of what should happen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionSpec {
    /// Navigate to an absolute URL in a new browsing context
    OpenUrl { url: String },

    /// Navigate the current context to an app deep link
    ///
    /// When `fallback_url` is set, the host re-checks after a delay and opens
    /// the fallback if the app never took over.
    OpenAppScheme {
        scheme: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fallback_url: Option<String>,
    },

    /// Invoke the telephone dial intent
    DialNumber { phone_number: String },

    /// Invoke the platform contact picker
    LaunchContactPicker,
}

impl ActionSpec {
    pub fn open_url(url: impl Into<String>) -> Self {
        ActionSpec::OpenUrl { url: url.into() }
    }

    pub fn app_scheme(scheme: impl Into<String>) -> Self {
        ActionSpec::OpenAppScheme {
            scheme: scheme.into(),
            fallback_url: None,
        }
    }

    pub fn dial(phone_number: impl Into<String>) -> Self {
        ActionSpec::DialNumber {
            phone_number: phone_number.into(),
        }
    }

    /// Classify a configured command URL
    ///
    /// App-scheme URLs become `OpenAppScheme` (without fallback), everything
    /// else is opened as a web page.
    pub fn from_url(url: &str) -> Self {
        if is_app_scheme(url) {
            Self::app_scheme(url)
        } else {
            Self::open_url(url)
        }
    }
}

impl std::fmt::Display for ActionSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionSpec::OpenUrl { url } => write!(f, "open-url {}", url),
            ActionSpec::OpenAppScheme {
                scheme,
                fallback_url: Some(fallback),
            } => write!(f, "open-app {} (fallback {})", scheme, fallback),
            ActionSpec::OpenAppScheme { scheme, .. } => write!(f, "open-app {}", scheme),
            ActionSpec::DialNumber { phone_number } => write!(f, "dial tel:{}", phone_number),
            ActionSpec::LaunchContactPicker => write!(f, "contact-picker"),
        }
    }
}

/// Returns true if the URL uses one of the known app schemes
pub fn is_app_scheme(url: &str) -> bool {
    let url_lower = url.to_lowercase();
    APP_SCHEME_PREFIXES
        .iter()
        .any(|prefix| url_lower.starts_with(prefix))
}

/// A phrase that triggers an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEntry {
    /// Lowercase, trimmed trigger phrase (unique within a registry)
    pub phrase: String,

    /// What the phrase resolves to
    pub target: ActionSpec,
}

impl CommandEntry {
    /// Create a new entry from a phrase and its configured URL
    pub fn new(phrase: impl Into<String>, url: &str) -> Self {
        Self {
            phrase: phrase.into(),
            target: ActionSpec::from_url(url),
        }
    }

    /// Create an entry with an explicit target
    pub fn with_target(phrase: impl Into<String>, target: ActionSpec) -> Self {
        Self {
            phrase: phrase.into(),
            target,
        }
    }

    /// Number of whitespace-separated words in the phrase
    pub fn word_count(&self) -> usize {
        self.phrase.split_whitespace().count().max(1)
    }
}

/// A contact that can be dialed by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEntry {
    pub name: String,
    pub phone_number: String,
}
