//! Transcript buffer filled by the speech-recognition stream.

use chrono::{DateTime, Local};

/// Append-only text for the utterance currently being recognized
#[derive(Debug, Clone, Default)]
pub struct TranscriptBuffer {
    text: String,
}

impl TranscriptBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append recognized text, separating fragments with a space
    pub fn push(&mut self, fragment: &str) {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            return;
        }
        if !self.text.is_empty() {
            self.text.push(' ');
        }
        self.text.push_str(fragment);
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Take the buffered text, leaving the buffer empty
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }
}

/// The most recent command, kept for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastCommand {
    /// Lowercased transcript
    pub text: String,
    pub received_at: DateTime<Local>,
}
