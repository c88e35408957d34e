//! Listen command implementation
//!
//! Stands in for the speech-recognition stream: every stdin line is one
//! recognized utterance.

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use voxdial::executor::{DryRunExecutor, SystemExecutor};
use voxdial::{ActionExecutor, Config, Dispatcher, PlatformProfile, Resolution, Unresolved};

use crate::PlatformArgs;

/// Start a listening session over stdin
pub async fn listen_command(
    config_path: Option<&Path>,
    platform_args: &PlatformArgs,
    dry_run: bool,
) -> Result<()> {
    let config = Config::load(config_path)?;
    let platform = super::platform_profile(&config, platform_args);

    if dry_run {
        run_session(&config, platform, Arc::new(DryRunExecutor)).await
    } else {
        run_session(&config, platform, Arc::new(SystemExecutor::new())).await
    }
}

async fn run_session<E: ActionExecutor + 'static>(
    config: &Config,
    platform: PlatformProfile,
    executor: Arc<E>,
) -> Result<()> {
    let mut session = config.session();
    let mut dispatcher = Dispatcher::new(config.resolver()?, platform, Arc::clone(&executor))
        .with_fallback_delay(config.fallback_delay());

    if let Err(e) = session.start(executor.as_ref()).await {
        warn!("Failed to speak welcome message: {}", e);
    }

    eprintln!(
        "Listening ({}, {}). One command per line, Ctrl-D to stop.",
        session.options().language,
        dispatcher.platform()
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines
        .next_line()
        .await
        .context("Failed to read transcript from stdin")?
    {
        let outcome = match dispatcher.handle_utterance(&line).await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("Action failed: {}", e);
                continue;
            }
        };

        if let Resolution::Unresolved { reason } = &outcome.resolution {
            if *reason != Unresolved::Empty {
                eprintln!("No action: {}", reason);
            }
        }

        if !session.options().continuous && !outcome.transcript.is_empty() {
            break;
        }
    }

    if let Some(state) = dispatcher.settle().await {
        info!("Pending app launch finished: {}", state);
    }
    session.stop();

    if let Some(last) = dispatcher.last_command() {
        eprintln!(
            "Last command: {} ({})",
            last.text,
            last.received_at.format("%H:%M:%S")
        );
    }

    Ok(())
}
