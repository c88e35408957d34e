//! Command Resolver - classifies a transcript into an action
//!
//! Resolution is a pure function of (transcript, platform). Rules are tried
//! in priority order and the first one that applies wins:
//!
//! 1. `call <name>`: dial a registered contact (never falls through to fuzzy)
//! 2. `whatsapp...`: app scheme on mobile, WhatsApp Web elsewhere
//! 3. `instagram...`: app scheme with a timed web fallback on mobile
//! 4. `contact...`: contact picker on Android-class devices only
//! 5. anything else: fuzzy match against the registered phrases

mod fuzzy;
mod platform;

pub use fuzzy::{normalized_distance, FuzzyMatch, FuzzyMatcher, DEFAULT_MATCH_THRESHOLD};
pub use platform::PlatformProfile;

use serde::Serialize;
use tracing::debug;

use crate::registry::{normalize_key, ActionSpec, CommandRegistry};

const CALL_KEYWORD: &str = "call";
const WHATSAPP_KEYWORD: &str = "whatsapp";
const INSTAGRAM_KEYWORD: &str = "instagram";
const CONTACT_KEYWORD: &str = "contact";

const WHATSAPP_APP_URL: &str = "whatsapp://send?text=";
const WHATSAPP_WEB_URL: &str = "https://web.whatsapp.com/send?text=";
pub const INSTAGRAM_APP_SCHEME: &str = "instagram://app";
pub const INSTAGRAM_WEB_URL: &str = "https://www.instagram.com";

/// Default text pre-filled in WhatsApp share links
pub const DEFAULT_WHATSAPP_MESSAGE: &str = "Hello World";

/// Outcome of resolving one transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Resolution {
    Action { action: ActionSpec },
    Unresolved { reason: Unresolved },
}

impl Resolution {
    pub fn is_unresolved(&self) -> bool {
        matches!(self, Resolution::Unresolved { .. })
    }

    /// True when the action needs a second evaluation after a delay
    pub fn requires_recheck(&self) -> bool {
        matches!(
            self,
            Resolution::Action {
                action: ActionSpec::OpenAppScheme {
                    fallback_url: Some(_),
                    ..
                }
            }
        )
    }
}

impl From<ActionSpec> for Resolution {
    fn from(action: ActionSpec) -> Self {
        Resolution::Action { action }
    }
}

impl From<Unresolved> for Resolution {
    fn from(reason: Unresolved) -> Self {
        Resolution::Unresolved { reason }
    }
}

/// Why a transcript produced no action
///
/// None of these are errors: the session keeps listening either way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Unresolved {
    /// Empty or whitespace-only transcript
    Empty,
    /// `call` with nothing after it
    MissingContactName,
    /// `call <name>` where the name is not registered
    UnknownContact { name: String },
    /// The capability is not available on this platform
    UnsupportedPlatform { capability: String },
    /// Nothing in the registry was close enough
    NoMatch,
}

/// Coarse failure class for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnresolvedKind {
    UnsupportedPlatform,
    Unrecognized,
    LookupMiss,
}

impl Unresolved {
    pub fn kind(&self) -> UnresolvedKind {
        match self {
            Unresolved::Empty | Unresolved::MissingContactName | Unresolved::NoMatch => {
                UnresolvedKind::Unrecognized
            }
            Unresolved::UnknownContact { .. } => UnresolvedKind::LookupMiss,
            Unresolved::UnsupportedPlatform { .. } => UnresolvedKind::UnsupportedPlatform,
        }
    }
}

impl std::fmt::Display for Unresolved {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unresolved::Empty => write!(f, "Empty transcript"),
            Unresolved::MissingContactName => write!(f, "No contact name after 'call'"),
            Unresolved::UnknownContact { name } => {
                write!(f, "Name not found in contact list: {}", name)
            }
            Unresolved::UnsupportedPlatform { capability } => {
                write!(f, "{} is not supported on this platform", capability)
            }
            Unresolved::NoMatch => write!(f, "Command not recognized"),
        }
    }
}

/// Resolves transcripts against a registry
#[derive(Debug, Clone)]
pub struct CommandResolver {
    registry: CommandRegistry,
    matcher: FuzzyMatcher,
    whatsapp_message: String,
}

impl Default for CommandResolver {
    fn default() -> Self {
        Self::new(CommandRegistry::default())
    }
}

impl CommandResolver {
    pub fn new(registry: CommandRegistry) -> Self {
        Self {
            registry,
            matcher: FuzzyMatcher::default(),
            whatsapp_message: DEFAULT_WHATSAPP_MESSAGE.to_string(),
        }
    }

    /// Set the maximum normalized distance for fuzzy matches
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.matcher = FuzzyMatcher::new(threshold);
        self
    }

    /// Set the text pre-filled in WhatsApp share links
    pub fn with_whatsapp_message(mut self, message: impl Into<String>) -> Self {
        self.whatsapp_message = message.into();
        self
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn matcher(&self) -> &FuzzyMatcher {
        &self.matcher
    }

    /// Classify a transcript into exactly one action or an unresolved reason
    pub fn resolve(&self, transcript: &str, platform: &PlatformProfile) -> Resolution {
        let text = normalize_key(transcript);
        if text.is_empty() {
            return Unresolved::Empty.into();
        }

        if let Some(name) = strip_keyword(&text, CALL_KEYWORD) {
            return self.resolve_call(name);
        }

        if text.starts_with(WHATSAPP_KEYWORD) {
            return self.resolve_whatsapp(platform).into();
        }

        if text.starts_with(INSTAGRAM_KEYWORD) {
            return resolve_instagram(platform).into();
        }

        if text.starts_with(CONTACT_KEYWORD) {
            if platform.android {
                return ActionSpec::LaunchContactPicker.into();
            }
            debug!("Contact picker requested on {} platform", platform);
            return Unresolved::UnsupportedPlatform {
                capability: "Contact picker".to_string(),
            }
            .into();
        }

        match self.matcher.best_match(&text, self.registry.all_commands()) {
            Some(m) => {
                debug!(
                    "Fuzzy matched '{}' to '{}' (distance {:.3})",
                    text, m.entry.phrase, m.distance
                );
                m.entry.target.clone().into()
            }
            None => Unresolved::NoMatch.into(),
        }
    }

    fn resolve_call(&self, name: &str) -> Resolution {
        if name.is_empty() {
            return Unresolved::MissingContactName.into();
        }
        match self.registry.resolve_contact(name) {
            Some(number) => ActionSpec::dial(number).into(),
            None => Unresolved::UnknownContact {
                name: name.to_string(),
            }
            .into(),
        }
    }

    fn resolve_whatsapp(&self, platform: &PlatformProfile) -> ActionSpec {
        let text = urlencoding::encode(&self.whatsapp_message);
        if platform.mobile {
            ActionSpec::app_scheme(format!("{}{}", WHATSAPP_APP_URL, text))
        } else {
            ActionSpec::open_url(format!("{}{}", WHATSAPP_WEB_URL, text))
        }
    }
}

fn resolve_instagram(platform: &PlatformProfile) -> ActionSpec {
    if platform.mobile {
        ActionSpec::OpenAppScheme {
            scheme: INSTAGRAM_APP_SCHEME.to_string(),
            fallback_url: Some(INSTAGRAM_WEB_URL.to_string()),
        }
    } else {
        ActionSpec::open_url(INSTAGRAM_WEB_URL)
    }
}

/// Returns the rest of the text if it starts with `keyword` as a whole word
fn strip_keyword<'a>(text: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = text.strip_prefix(keyword)?;
    if rest.is_empty() {
        Some(rest)
    } else if rest.starts_with(char::is_whitespace) {
        Some(rest.trim())
    } else {
        None
    }
}
