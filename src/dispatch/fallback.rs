//! App-launch fallback state machine
//!
//! Launching an app scheme gives no success signal. If the app opens, the
//! host page goes to the background; if the scheme is not handled, the page
//! stays visible. `AppLaunchAttempt` records the launch and decides, once
//! the delay has passed, whether to open the web fallback.
//!
//! ```text
//! AttemptingApp --(deadline, page hidden)--> Confirmed
//!               --(deadline, page visible)-> FellBack
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::time::Instant;

use crate::registry::ActionSpec;

/// Default wait before checking whether the app took over
pub const DEFAULT_FALLBACK_DELAY: Duration = Duration::from_millis(2000);

/// Whether the host page is currently visible to the user
pub trait VisibilitySource: Send + Sync {
    fn is_visible(&self) -> bool;
}

/// Visibility flag shared with the host (e.g. set from a visibility-change event)
#[derive(Debug, Clone)]
pub struct SharedVisibility {
    visible: Arc<AtomicBool>,
}

impl Default for SharedVisibility {
    fn default() -> Self {
        Self::new(true)
    }
}

impl SharedVisibility {
    pub fn new(visible: bool) -> Self {
        Self {
            visible: Arc::new(AtomicBool::new(visible)),
        }
    }

    pub fn set_visible(&self, visible: bool) {
        self.visible.store(visible, Ordering::SeqCst);
    }
}

impl VisibilitySource for SharedVisibility {
    fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }
}

/// A host that never goes to the background (e.g. a terminal)
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysVisible;

impl VisibilitySource for AlwaysVisible {
    fn is_visible(&self) -> bool {
        true
    }
}

/// App-launch states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppLaunchState {
    /// Scheme fired, waiting for the deadline
    AttemptingApp,
    /// The page went to the background: the app opened
    Confirmed,
    /// The page stayed visible: the fallback URL was used
    FellBack,
}

impl AppLaunchState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, AppLaunchState::AttemptingApp)
    }
}

impl std::fmt::Display for AppLaunchState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppLaunchState::AttemptingApp => write!(f, "AttemptingApp"),
            AppLaunchState::Confirmed => write!(f, "Confirmed"),
            AppLaunchState::FellBack => write!(f, "FellBack"),
        }
    }
}

/// One app-scheme launch with a timed web fallback
#[derive(Debug, Clone)]
pub struct AppLaunchAttempt {
    scheme: String,
    fallback_url: String,
    deadline: Instant,
    state: AppLaunchState,
}

impl AppLaunchAttempt {
    pub fn new(
        scheme: impl Into<String>,
        fallback_url: impl Into<String>,
        started_at: Instant,
        delay: Duration,
    ) -> Self {
        Self {
            scheme: scheme.into(),
            fallback_url: fallback_url.into(),
            deadline: started_at + delay,
            state: AppLaunchState::AttemptingApp,
        }
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn fallback_url(&self) -> &str {
        &self.fallback_url
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    pub fn state(&self) -> AppLaunchState {
        self.state
    }

    /// Re-evaluate the attempt at `now`
    ///
    /// Returns the fallback action exactly once, on the transition to
    /// `FellBack`. Terminal states never change again.
    pub fn check(&mut self, now: Instant, page_visible: bool) -> Option<ActionSpec> {
        if self.state.is_terminal() || now < self.deadline {
            return None;
        }

        if page_visible {
            self.state = AppLaunchState::FellBack;
            Some(ActionSpec::open_url(self.fallback_url.clone()))
        } else {
            self.state = AppLaunchState::Confirmed;
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attempt(start: Instant) -> AppLaunchAttempt {
        AppLaunchAttempt::new(
            "instagram://app",
            "https://www.instagram.com",
            start,
            DEFAULT_FALLBACK_DELAY,
        )
    }

    #[test]
    fn test_waits_until_deadline() {
        let start = Instant::now();
        let mut a = attempt(start);

        assert_eq!(a.check(start + Duration::from_millis(1999), true), None);
        assert_eq!(a.state(), AppLaunchState::AttemptingApp);
    }

    #[test]
    fn test_falls_back_when_page_still_visible() {
        let start = Instant::now();
        let mut a = attempt(start);

        let action = a.check(start + DEFAULT_FALLBACK_DELAY, true);
        assert_eq!(action, Some(ActionSpec::open_url("https://www.instagram.com")));
        assert_eq!(a.state(), AppLaunchState::FellBack);

        // Fallback fires only once
        assert_eq!(a.check(start + Duration::from_secs(10), true), None);
        assert_eq!(a.state(), AppLaunchState::FellBack);
    }

    #[test]
    fn test_confirmed_when_page_hidden() {
        let start = Instant::now();
        let mut a = attempt(start);

        assert_eq!(a.check(start + Duration::from_millis(2500), false), None);
        assert_eq!(a.state(), AppLaunchState::Confirmed);

        // Coming back to the page later does not trigger the fallback
        assert_eq!(a.check(start + Duration::from_secs(5), true), None);
        assert_eq!(a.state(), AppLaunchState::Confirmed);
    }

    #[test]
    fn test_shared_visibility() {
        let visibility = SharedVisibility::default();
        let handle = visibility.clone();
        assert!(visibility.is_visible());

        handle.set_visible(false);
        assert!(!visibility.is_visible());
    }
}
