//! Settings configuration types

use serde::{Deserialize, Serialize};

use crate::resolver::{PlatformProfile, DEFAULT_MATCH_THRESHOLD, DEFAULT_WHATSAPP_MESSAGE};
use crate::session::{RecognitionOptions, DEFAULT_WELCOME_MESSAGE};

/// General settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Maximum normalized edit distance for a fuzzy phrase match (0.0-1.0)
    /// 0.0 only accepts exact phrases, 1.0 accepts anything
    #[serde(default = "default_match_threshold")]
    pub match_threshold: f64,

    /// How long to wait for an app deep link to take over before opening
    /// the web fallback (milliseconds)
    #[serde(default = "default_app_fallback_delay_ms")]
    pub app_fallback_delay_ms: u64,

    /// Text pre-filled in WhatsApp share links
    #[serde(default = "default_whatsapp_message")]
    pub whatsapp_message: String,

    /// Spoken when listening starts (empty = silent)
    #[serde(default = "default_welcome_message")]
    pub welcome_message: String,

    /// Speech recognition settings
    #[serde(default)]
    pub recognition: RecognitionSettings,

    /// Platform capabilities
    #[serde(default)]
    pub platform: PlatformSettings,
}

fn default_match_threshold() -> f64 {
    DEFAULT_MATCH_THRESHOLD
}

fn default_app_fallback_delay_ms() -> u64 {
    2000
}

fn default_whatsapp_message() -> String {
    DEFAULT_WHATSAPP_MESSAGE.to_string()
}

fn default_welcome_message() -> String {
    DEFAULT_WELCOME_MESSAGE.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            match_threshold: default_match_threshold(),
            app_fallback_delay_ms: default_app_fallback_delay_ms(),
            whatsapp_message: default_whatsapp_message(),
            welcome_message: default_welcome_message(),
            recognition: RecognitionSettings::default(),
            platform: PlatformSettings::default(),
        }
    }
}

/// Speech recognition settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognitionSettings {
    /// Language tag for recognition (en-US, de-DE, etc.)
    #[serde(default = "default_language")]
    pub language: String,

    /// Keep listening across utterances
    #[serde(default = "default_continuous")]
    pub continuous: bool,
}

fn default_language() -> String {
    "en-US".to_string()
}

fn default_continuous() -> bool {
    true
}

impl Default for RecognitionSettings {
    fn default() -> Self {
        Self {
            language: default_language(),
            continuous: default_continuous(),
        }
    }
}

impl From<&RecognitionSettings> for RecognitionOptions {
    fn from(settings: &RecognitionSettings) -> Self {
        RecognitionOptions {
            language: settings.language.clone(),
            continuous: settings.continuous,
        }
    }
}

/// Platform capability settings
///
/// Explicit flags win over user-agent detection. With nothing set, the
/// platform is treated as desktop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformSettings {
    /// Treat the device as mobile-class (prefer app schemes)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<bool>,

    /// Treat the device as Android-like (enables the contact picker)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android: Option<bool>,

    /// Browser user agent to detect the above from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl PlatformSettings {
    /// Build the capability profile
    pub fn profile(&self) -> PlatformProfile {
        let mut profile = self
            .user_agent
            .as_deref()
            .map(PlatformProfile::from_user_agent)
            .unwrap_or_default();

        if let Some(mobile) = self.mobile {
            profile.mobile = mobile;
        }
        if let Some(android) = self.android {
            profile.android = android;
        }
        // Android-class devices are always mobile-class
        if profile.android {
            profile.mobile = true;
        }
        profile
    }
}
