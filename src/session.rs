//! Listening session: the start/stop toggle around speech recognition.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::executor::{ActionExecutor, ExecutorError};

/// Spoken when listening starts
pub const DEFAULT_WELCOME_MESSAGE: &str = "Hey you there, Happy to see you back- Please speak...";

/// Listening state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListenState {
    /// Not listening
    #[default]
    Idle,
    /// Speech recognition is running and transcripts are dispatched
    Listening,
}

impl ListenState {
    pub fn is_listening(&self) -> bool {
        matches!(self, ListenState::Listening)
    }
}

impl std::fmt::Display for ListenState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListenState::Idle => write!(f, "Idle"),
            ListenState::Listening => write!(f, "Listening"),
        }
    }
}

/// Options passed to the speech-recognition capability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognitionOptions {
    /// BCP 47 language tag (e.g. "en-US")
    pub language: String,
    /// Keep recognizing after the first utterance
    pub continuous: bool,
}

impl Default for RecognitionOptions {
    fn default() -> Self {
        Self {
            language: "en-US".to_string(),
            continuous: true,
        }
    }
}

/// Tracks whether the assistant is listening
#[derive(Debug, Clone)]
pub struct ListeningSession {
    state: ListenState,
    options: RecognitionOptions,
    welcome_message: String,
}

impl Default for ListeningSession {
    fn default() -> Self {
        Self::new(RecognitionOptions::default())
    }
}

impl ListeningSession {
    pub fn new(options: RecognitionOptions) -> Self {
        Self {
            state: ListenState::Idle,
            options,
            welcome_message: DEFAULT_WELCOME_MESSAGE.to_string(),
        }
    }

    pub fn with_welcome_message(mut self, message: impl Into<String>) -> Self {
        self.welcome_message = message.into();
        self
    }

    pub fn state(&self) -> ListenState {
        self.state
    }

    pub fn options(&self) -> &RecognitionOptions {
        &self.options
    }

    /// Start listening and greet the user
    ///
    /// Returns `false` if the session was already listening.
    pub async fn start<E>(&mut self, executor: &E) -> Result<bool, ExecutorError>
    where
        E: ActionExecutor + ?Sized,
    {
        if self.state.is_listening() {
            return Ok(false);
        }

        self.state = ListenState::Listening;
        info!(
            "Listening started (language: {}, continuous: {})",
            self.options.language, self.options.continuous
        );

        if !self.welcome_message.is_empty() {
            executor.speak(&self.welcome_message).await?;
        }
        Ok(true)
    }

    /// Stop listening. Returns `false` if the session was already idle.
    pub fn stop(&mut self) -> bool {
        if !self.state.is_listening() {
            return false;
        }
        self.state = ListenState::Idle;
        info!("Listening stopped");
        true
    }

    /// Flip between listening and idle, returning the new state
    pub async fn toggle<E>(&mut self, executor: &E) -> Result<ListenState, ExecutorError>
    where
        E: ActionExecutor + ?Sized,
    {
        if self.state.is_listening() {
            self.stop();
        } else {
            self.start(executor).await?;
        }
        Ok(self.state)
    }
}
