//! Action executors - the host side that actually performs resolved actions
//!
//! The dispatcher only decides *what* to do. An `ActionExecutor` does it:
//! opening URLs, following app deep links, dialing, showing the contact
//! picker, and speaking the welcome message.

mod dry_run;
mod recording;
mod system;

pub use dry_run::DryRunExecutor;
pub use recording::{ExecutedAction, RecordingExecutor};
pub use system::SystemExecutor;

use async_trait::async_trait;
use thiserror::Error;

use crate::registry::ActionSpec;

/// Errors raised by an executor
#[derive(Debug, Error)]
pub enum ExecutorError {
    #[error("Failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Trait for host integrations that carry out actions
#[async_trait]
pub trait ActionExecutor: Send + Sync {
    /// Open an absolute URL in a new browsing context
    async fn open_url(&self, url: &str) -> Result<(), ExecutorError>;

    /// Navigate to a custom URL scheme (app deep link)
    async fn open_app_scheme(&self, scheme: &str) -> Result<(), ExecutorError>;

    /// Start a phone call to `phone_number`
    async fn dial(&self, phone_number: &str) -> Result<(), ExecutorError>;

    /// Show the platform contact picker
    async fn launch_contact_picker(&self) -> Result<(), ExecutorError>;

    /// Speak `text` via text-to-speech
    async fn speak(&self, text: &str) -> Result<(), ExecutorError>;

    /// Carry out a resolved action
    ///
    /// Fallback URLs on app-scheme actions are not followed here; the
    /// dispatcher schedules them.
    async fn execute(&self, action: &ActionSpec) -> Result<(), ExecutorError> {
        match action {
            ActionSpec::OpenUrl { url } => self.open_url(url).await,
            ActionSpec::OpenAppScheme { scheme, .. } => self.open_app_scheme(scheme).await,
            ActionSpec::DialNumber { phone_number } => self.dial(phone_number).await,
            ActionSpec::LaunchContactPicker => self.launch_contact_picker().await,
        }
    }
}
