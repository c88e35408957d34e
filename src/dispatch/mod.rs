//! Dispatcher - runs resolve -> act -> clear for each utterance
//!
//! Transcripts arrive one at a time and are processed to completion before
//! the next one. The only background work is the app-launch fallback timer,
//! which is aborted when a newer command arrives.

mod fallback;
mod transcript;

pub use fallback::{
    AlwaysVisible, AppLaunchAttempt, AppLaunchState, SharedVisibility, VisibilitySource,
    DEFAULT_FALLBACK_DELAY,
};
pub use transcript::{LastCommand, TranscriptBuffer};

use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::executor::{ActionExecutor, ExecutorError};
use crate::registry::ActionSpec;
use crate::resolver::{CommandResolver, PlatformProfile, Resolution, Unresolved};

/// What happened to one utterance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Normalized transcript that was resolved
    pub transcript: String,
    pub resolution: Resolution,
}

/// Owns the transcript buffer and drives the executor
pub struct Dispatcher<E: ActionExecutor + 'static> {
    resolver: CommandResolver,
    platform: PlatformProfile,
    executor: Arc<E>,
    visibility: Arc<dyn VisibilitySource>,
    fallback_delay: Duration,
    transcript: TranscriptBuffer,
    last_command: Option<LastCommand>,
    pending_fallback: Option<JoinHandle<AppLaunchState>>,
}

impl<E: ActionExecutor + 'static> Dispatcher<E> {
    pub fn new(resolver: CommandResolver, platform: PlatformProfile, executor: Arc<E>) -> Self {
        Self {
            resolver,
            platform,
            executor,
            visibility: Arc::new(AlwaysVisible),
            fallback_delay: DEFAULT_FALLBACK_DELAY,
            transcript: TranscriptBuffer::new(),
            last_command: None,
            pending_fallback: None,
        }
    }

    /// Set where page visibility is read from for app-launch fallbacks
    pub fn with_visibility(mut self, visibility: Arc<dyn VisibilitySource>) -> Self {
        self.visibility = visibility;
        self
    }

    /// Set how long to wait before checking whether an app took over
    pub fn with_fallback_delay(mut self, delay: Duration) -> Self {
        self.fallback_delay = delay;
        self
    }

    pub fn platform(&self) -> &PlatformProfile {
        &self.platform
    }

    pub fn executor(&self) -> &Arc<E> {
        &self.executor
    }

    /// Current (not yet dispatched) transcript text
    pub fn transcript(&self) -> &str {
        self.transcript.as_str()
    }

    pub fn last_command(&self) -> Option<&LastCommand> {
        self.last_command.as_ref()
    }

    pub fn has_pending_fallback(&self) -> bool {
        self.pending_fallback
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Append recognized text to the current transcript
    pub fn push_transcript(&mut self, fragment: &str) {
        self.transcript.push(fragment);
    }

    /// Push a complete utterance and dispatch it
    pub async fn handle_utterance(&mut self, text: &str) -> Result<DispatchOutcome, ExecutorError> {
        self.push_transcript(text);
        self.dispatch().await
    }

    /// Resolve and execute the buffered transcript, then clear the buffer
    ///
    /// Unresolved transcripts are logged, not returned as errors. Only a
    /// failing executor produces an `Err`; the buffer is cleared either way,
    /// and an app-scheme fallback is scheduled even when the launch failed.
    pub async fn dispatch(&mut self) -> Result<DispatchOutcome, ExecutorError> {
        let transcript = self.transcript.take().trim().to_lowercase();

        if !transcript.is_empty() {
            debug!("Transcript received: {}", transcript);
            self.cancel_pending_fallback();
            self.last_command = Some(LastCommand {
                text: transcript.clone(),
                received_at: Local::now(),
            });
        }

        let resolution = self.resolver.resolve(&transcript, &self.platform);

        match &resolution {
            Resolution::Action { action } => {
                info!("Command '{}' -> {}", transcript, action);
                let executed = self.executor.execute(action).await;

                // A scheme that failed to launch still gets its web fallback
                if let ActionSpec::OpenAppScheme {
                    scheme,
                    fallback_url: Some(fallback_url),
                } = action
                {
                    self.schedule_fallback(scheme, fallback_url);
                }
                executed?;
            }
            Resolution::Unresolved {
                reason: Unresolved::Empty,
            } => {}
            Resolution::Unresolved { reason } => {
                info!("Command '{}' ignored: {}", transcript, reason);
            }
        }

        Ok(DispatchOutcome {
            transcript,
            resolution,
        })
    }

    /// Wait for the pending app-launch fallback (if any) to finish
    ///
    /// Returns the attempt's final state, or `None` when nothing was pending
    /// or the timer was aborted.
    pub async fn settle(&mut self) -> Option<AppLaunchState> {
        let handle = self.pending_fallback.take()?;
        match handle.await {
            Ok(state) => Some(state),
            Err(e) => {
                debug!("App fallback task did not complete: {}", e);
                None
            }
        }
    }

    fn schedule_fallback(&mut self, scheme: &str, fallback_url: &str) {
        let mut attempt =
            AppLaunchAttempt::new(scheme, fallback_url, Instant::now(), self.fallback_delay);
        let executor = Arc::clone(&self.executor);
        let visibility = Arc::clone(&self.visibility);

        debug!(
            "Checking app launch of {} in {}ms",
            scheme,
            self.fallback_delay.as_millis()
        );

        self.pending_fallback = Some(tokio::spawn(async move {
            tokio::time::sleep_until(attempt.deadline()).await;

            match attempt.check(Instant::now(), visibility.is_visible()) {
                Some(action) => {
                    info!("App did not open, falling back to {}", attempt.fallback_url());
                    if let Err(e) = executor.execute(&action).await {
                        warn!("Fallback for {} failed: {}", attempt.scheme(), e);
                    }
                }
                None => debug!("App launch confirmed for {}", attempt.scheme()),
            }

            attempt.state()
        }));
    }

    fn cancel_pending_fallback(&mut self) {
        if let Some(handle) = self.pending_fallback.take() {
            if !handle.is_finished() {
                debug!("Cancelling stale app fallback");
                handle.abort();
            }
        }
    }
}

impl<E: ActionExecutor + 'static> Drop for Dispatcher<E> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending_fallback.take() {
            handle.abort();
        }
    }
}
