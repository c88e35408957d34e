//! Integration tests for the dispatcher: resolve -> execute -> clear
//!
//! Time is paused, so the app-launch fallback timer runs deterministically.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use voxdial::dispatch::{AppLaunchState, SharedVisibility};
use voxdial::executor::{ExecutedAction, ExecutorError, RecordingExecutor};
use voxdial::{
    ActionExecutor, ActionSpec, CommandResolver, Dispatcher, PlatformProfile, Resolution,
    Unresolved,
};

fn dispatcher(platform: PlatformProfile) -> Dispatcher<RecordingExecutor> {
    Dispatcher::new(
        CommandResolver::default(),
        platform,
        Arc::new(RecordingExecutor::new()),
    )
}

/// Executor with no app handlers and no phone: schemes and dialing fail
#[derive(Default)]
struct NoAppsExecutor {
    inner: RecordingExecutor,
}

fn launch_error(program: &str) -> ExecutorError {
    ExecutorError::Spawn {
        program: program.to_string(),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "no handler"),
    }
}

#[async_trait]
impl ActionExecutor for NoAppsExecutor {
    async fn open_url(&self, url: &str) -> Result<(), ExecutorError> {
        self.inner.open_url(url).await
    }

    async fn open_app_scheme(&self, scheme: &str) -> Result<(), ExecutorError> {
        Err(launch_error(scheme))
    }

    async fn dial(&self, phone_number: &str) -> Result<(), ExecutorError> {
        Err(launch_error(&format!("tel:{}", phone_number)))
    }

    async fn launch_contact_picker(&self) -> Result<(), ExecutorError> {
        self.inner.launch_contact_picker().await
    }

    async fn speak(&self, text: &str) -> Result<(), ExecutorError> {
        self.inner.speak(text).await
    }
}

fn no_apps_dispatcher(platform: PlatformProfile) -> Dispatcher<NoAppsExecutor> {
    Dispatcher::new(
        CommandResolver::default(),
        platform,
        Arc::new(NoAppsExecutor::default()),
    )
}

#[tokio::test]
async fn test_call_dials_registered_contact() {
    let mut d = dispatcher(PlatformProfile::desktop());

    let outcome = d.handle_utterance("Call Safi").await.unwrap();

    assert_eq!(outcome.transcript, "call safi");
    assert_eq!(outcome.resolution, ActionSpec::dial("7992217849").into());
    assert_eq!(
        d.executor().actions(),
        vec![ExecutedAction::Dial("7992217849".to_string())]
    );
}

#[tokio::test]
async fn test_unknown_contact_takes_no_action() {
    let mut d = dispatcher(PlatformProfile::desktop());

    let outcome = d.handle_utterance("call youtube").await.unwrap();

    assert!(outcome.resolution.is_unresolved());
    assert!(d.executor().actions().is_empty());
}

#[tokio::test]
async fn test_gmail_opens_url() {
    let mut d = dispatcher(PlatformProfile::desktop());

    d.handle_utterance("gmail").await.unwrap();

    assert_eq!(
        d.executor().actions(),
        vec![ExecutedAction::OpenUrl("https://gmail.com".to_string())]
    );
}

#[tokio::test]
async fn test_whatsapp_depends_on_platform() {
    let mut mobile = dispatcher(PlatformProfile::mobile());
    mobile.handle_utterance("whatsapp").await.unwrap();
    assert_eq!(
        mobile.executor().actions(),
        vec![ExecutedAction::OpenAppScheme(
            "whatsapp://send?text=Hello%20World".to_string()
        )]
    );

    let mut desktop = dispatcher(PlatformProfile::desktop());
    desktop.handle_utterance("whatsapp").await.unwrap();
    assert_eq!(
        desktop.executor().actions(),
        vec![ExecutedAction::OpenUrl(
            "https://web.whatsapp.com/send?text=Hello%20World".to_string()
        )]
    );
}

#[tokio::test(start_paused = true)]
async fn test_instagram_falls_back_when_page_stays_visible() {
    let visibility = SharedVisibility::new(true);
    let mut d = dispatcher(PlatformProfile::mobile()).with_visibility(Arc::new(visibility.clone()));

    d.handle_utterance("instagram").await.unwrap();
    assert!(d.has_pending_fallback());

    assert_eq!(d.settle().await, Some(AppLaunchState::FellBack));
    assert_eq!(
        d.executor().actions(),
        vec![
            ExecutedAction::OpenAppScheme("instagram://app".to_string()),
            ExecutedAction::OpenUrl("https://www.instagram.com".to_string()),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_instagram_confirmed_when_app_takes_over() {
    let visibility = SharedVisibility::new(true);
    let mut d = dispatcher(PlatformProfile::mobile()).with_visibility(Arc::new(visibility.clone()));

    d.handle_utterance("instagram").await.unwrap();

    // Halfway through the delay nothing has happened yet
    tokio::time::advance(Duration::from_millis(1000)).await;
    assert_eq!(d.executor().actions().len(), 1);

    // The app opened and backgrounded the page
    visibility.set_visible(false);

    assert_eq!(d.settle().await, Some(AppLaunchState::Confirmed));
    assert_eq!(
        d.executor().actions(),
        vec![ExecutedAction::OpenAppScheme("instagram://app".to_string())]
    );
}

#[tokio::test(start_paused = true)]
async fn test_instagram_on_desktop_opens_website_directly() {
    let mut d = dispatcher(PlatformProfile::desktop());

    d.handle_utterance("instagram").await.unwrap();

    assert!(!d.has_pending_fallback());
    assert_eq!(d.settle().await, None);
    assert_eq!(
        d.executor().actions(),
        vec![ExecutedAction::OpenUrl("https://www.instagram.com".to_string())]
    );
}

#[tokio::test(start_paused = true)]
async fn test_new_command_cancels_stale_fallback() {
    let mut d = dispatcher(PlatformProfile::mobile());

    d.handle_utterance("instagram").await.unwrap();
    d.handle_utterance("gmail").await.unwrap();

    assert!(!d.has_pending_fallback());
    tokio::time::sleep(Duration::from_secs(5)).await;

    assert_eq!(
        d.executor().actions(),
        vec![
            ExecutedAction::OpenAppScheme("instagram://app".to_string()),
            ExecutedAction::OpenUrl("https://gmail.com".to_string()),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_custom_fallback_delay() {
    let mut d = dispatcher(PlatformProfile::mobile()).with_fallback_delay(Duration::from_millis(500));

    d.handle_utterance("instagram").await.unwrap();
    tokio::time::sleep(Duration::from_millis(600)).await;

    assert_eq!(d.executor().actions().len(), 2);
    assert_eq!(d.settle().await, Some(AppLaunchState::FellBack));
}

#[tokio::test]
async fn test_contact_picker_on_android_only() {
    let mut android = dispatcher(PlatformProfile::android());
    android.handle_utterance("contacts").await.unwrap();
    assert_eq!(android.executor().actions(), vec![ExecutedAction::ContactPicker]);

    let mut desktop = dispatcher(PlatformProfile::desktop());
    let outcome = desktop.handle_utterance("contacts").await.unwrap();
    assert!(matches!(
        outcome.resolution,
        Resolution::Unresolved {
            reason: Unresolved::UnsupportedPlatform { .. }
        }
    ));
    assert!(desktop.executor().actions().is_empty());
}

#[tokio::test]
async fn test_unrecognized_clears_transcript() {
    let mut d = dispatcher(PlatformProfile::desktop());

    let outcome = d.handle_utterance("xyz123").await.unwrap();

    assert_eq!(outcome.resolution, Unresolved::NoMatch.into());
    assert!(d.executor().actions().is_empty());
    assert_eq!(d.transcript(), "");
    assert_eq!(d.last_command().map(|c| c.text.as_str()), Some("xyz123"));
}

#[tokio::test]
async fn test_fragments_are_joined_before_dispatch() {
    let mut d = dispatcher(PlatformProfile::desktop());

    d.push_transcript("call");
    d.push_transcript("AMMI");
    assert_eq!(d.transcript(), "call AMMI");

    let outcome = d.dispatch().await.unwrap();
    assert_eq!(outcome.resolution, ActionSpec::dial("7903780528").into());
    assert_eq!(d.transcript(), "");
}

#[tokio::test]
async fn test_empty_transcript_is_a_no_op() {
    let mut d = dispatcher(PlatformProfile::desktop());
    d.handle_utterance("gmail").await.unwrap();

    let outcome = d.handle_utterance("   ").await.unwrap();

    assert_eq!(outcome.resolution, Unresolved::Empty.into());
    // The last command still shows the previous utterance
    assert_eq!(d.last_command().map(|c| c.text.as_str()), Some("gmail"));
    assert_eq!(d.executor().actions().len(), 1);
}

#[tokio::test]
async fn test_same_transcript_twice_gives_same_action() {
    let mut d = dispatcher(PlatformProfile::desktop());

    let first = d.handle_utterance("youtub").await.unwrap();
    let second = d.handle_utterance("youtub").await.unwrap();

    assert_eq!(first.resolution, second.resolution);
    assert_eq!(
        d.executor().take(),
        vec![
            ExecutedAction::OpenUrl("https://youtube-dupl.onrender.com/".to_string()),
            ExecutedAction::OpenUrl("https://youtube-dupl.onrender.com/".to_string()),
        ]
    );
    assert!(d.executor().actions().is_empty());
}

#[tokio::test]
async fn test_executor_failure_is_returned_and_clears_transcript() {
    let mut d = no_apps_dispatcher(PlatformProfile::desktop());

    let result = d.handle_utterance("call safi").await;

    assert!(matches!(result, Err(ExecutorError::Spawn { .. })));
    assert_eq!(d.transcript(), "");
    assert_eq!(d.last_command().map(|c| c.text.as_str()), Some("call safi"));
    assert!(!d.has_pending_fallback());

    // The next utterance is handled normally
    d.handle_utterance("gmail").await.unwrap();
    assert_eq!(
        d.executor().inner.actions(),
        vec![ExecutedAction::OpenUrl("https://gmail.com".to_string())]
    );
}

#[tokio::test(start_paused = true)]
async fn test_failed_app_launch_still_falls_back_to_website() {
    let mut d = no_apps_dispatcher(PlatformProfile::mobile());

    let result = d.handle_utterance("instagram").await;

    assert!(result.is_err());
    assert_eq!(d.transcript(), "");
    assert!(d.has_pending_fallback());

    assert_eq!(d.settle().await, Some(AppLaunchState::FellBack));
    assert_eq!(
        d.executor().inner.actions(),
        vec![ExecutedAction::OpenUrl("https://www.instagram.com".to_string())]
    );
}
