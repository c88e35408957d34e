//! Executor that hands actions to the operating system's URL handler.

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use super::{ActionExecutor, ExecutorError};

/// Intent URL for the Android contact list
const CONTACT_PICKER_URL: &str = "content://contacts/people/";

/// Opens URLs, schemes and `tel:` links with the platform opener
#[derive(Debug, Clone, Default)]
pub struct SystemExecutor;

impl SystemExecutor {
    pub fn new() -> Self {
        Self
    }

    fn open(&self, target: &str) -> Result<(), ExecutorError> {
        let (program, args) = opener_command(target);
        debug!("Spawning {} {:?}", program, args);

        Command::new(program)
            .args(&args)
            .spawn()
            .map(|_| ())
            .map_err(|source| ExecutorError::Spawn {
                program: program.to_string(),
                source,
            })
    }
}

#[cfg(target_os = "macos")]
fn opener_command(target: &str) -> (&'static str, Vec<String>) {
    ("open", vec![target.to_string()])
}

#[cfg(target_os = "windows")]
fn opener_command(target: &str) -> (&'static str, Vec<String>) {
    (
        "cmd",
        vec![
            "/C".to_string(),
            "start".to_string(),
            String::new(),
            target.to_string(),
        ],
    )
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(target: &str) -> (&'static str, Vec<String>) {
    ("xdg-open", vec![target.to_string()])
}

#[cfg(target_os = "macos")]
fn speech_command(text: &str) -> (&'static str, Vec<String>) {
    ("say", vec![text.to_string()])
}

#[cfg(target_os = "windows")]
fn speech_command(text: &str) -> (&'static str, Vec<String>) {
    let script = format!(
        "Add-Type -AssemblyName System.Speech; \
         (New-Object System.Speech.Synthesis.SpeechSynthesizer).Speak('{}')",
        text.replace('\'', "''")
    );
    ("powershell", vec!["-NoProfile".to_string(), "-Command".to_string(), script])
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn speech_command(text: &str) -> (&'static str, Vec<String>) {
    ("espeak", vec![text.to_string()])
}

#[async_trait]
impl ActionExecutor for SystemExecutor {
    async fn open_url(&self, url: &str) -> Result<(), ExecutorError> {
        info!("Opening {}", url);
        self.open(url)
    }

    async fn open_app_scheme(&self, scheme: &str) -> Result<(), ExecutorError> {
        info!("Launching app link {}", scheme);
        self.open(scheme)
    }

    async fn dial(&self, phone_number: &str) -> Result<(), ExecutorError> {
        info!("Dialing {}", phone_number);
        self.open(&format!("tel:{}", phone_number))
    }

    async fn launch_contact_picker(&self) -> Result<(), ExecutorError> {
        info!("Opening contact picker");
        self.open(CONTACT_PICKER_URL)
    }

    async fn speak(&self, text: &str) -> Result<(), ExecutorError> {
        let (program, args) = speech_command(text);
        Command::new(program)
            .args(&args)
            .spawn()
            .map(|_| ())
            .map_err(|source| ExecutorError::Spawn {
                program: program.to_string(),
                source,
            })
    }
}
