//! In-memory executor that records every action it is asked to perform.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{ActionExecutor, ExecutorError};

/// An action as seen by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutedAction {
    OpenUrl(String),
    OpenAppScheme(String),
    Dial(String),
    ContactPicker,
    Speak(String),
}

/// Records actions in call order
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    actions: Mutex<Vec<ExecutedAction>>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything executed so far
    pub fn actions(&self) -> Vec<ExecutedAction> {
        self.actions
            .lock()
            .map(|actions| actions.clone())
            .unwrap_or_default()
    }

    /// Remove and return everything executed so far
    pub fn take(&self) -> Vec<ExecutedAction> {
        self.actions
            .lock()
            .map(|mut actions| std::mem::take(&mut *actions))
            .unwrap_or_default()
    }

    fn record(&self, action: ExecutedAction) {
        if let Ok(mut actions) = self.actions.lock() {
            actions.push(action);
        }
    }
}

#[async_trait]
impl ActionExecutor for RecordingExecutor {
    async fn open_url(&self, url: &str) -> Result<(), ExecutorError> {
        self.record(ExecutedAction::OpenUrl(url.to_string()));
        Ok(())
    }

    async fn open_app_scheme(&self, scheme: &str) -> Result<(), ExecutorError> {
        self.record(ExecutedAction::OpenAppScheme(scheme.to_string()));
        Ok(())
    }

    async fn dial(&self, phone_number: &str) -> Result<(), ExecutorError> {
        self.record(ExecutedAction::Dial(phone_number.to_string()));
        Ok(())
    }

    async fn launch_contact_picker(&self) -> Result<(), ExecutorError> {
        self.record(ExecutedAction::ContactPicker);
        Ok(())
    }

    async fn speak(&self, text: &str) -> Result<(), ExecutorError> {
        self.record(ExecutedAction::Speak(text.to_string()));
        Ok(())
    }
}
