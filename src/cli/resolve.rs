//! Resolve command implementation

use anyhow::Result;
use std::path::Path;

use voxdial::{Config, Resolution};

use crate::PlatformArgs;

/// Resolve one transcript and print the outcome
pub fn resolve_command(
    config_path: Option<&Path>,
    transcript: &str,
    platform_args: &PlatformArgs,
    json: bool,
) -> Result<()> {
    let config = Config::load(config_path)?;
    let resolver = config.resolver()?;
    let platform = super::platform_profile(&config, platform_args);

    let resolution = resolver.resolve(transcript, &platform);

    if json {
        println!("{}", serde_json::to_string_pretty(&resolution)?);
        return Ok(());
    }

    match &resolution {
        Resolution::Action { action } => {
            println!("{}", action);
            if resolution.requires_recheck() {
                println!(
                    "  (web fallback after {}ms if the app does not open)",
                    config.settings.app_fallback_delay_ms
                );
            }
        }
        Resolution::Unresolved { reason } => {
            println!("No action: {}", reason);
        }
    }

    Ok(())
}
