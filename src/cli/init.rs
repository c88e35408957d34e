//! Init command implementation

use anyhow::{bail, Result};
use std::path::PathBuf;

use voxdial::Config;

/// Write the default configuration
/// By default creates the global config at ~/.voxdial/config.toml
/// Use --config to specify a custom path
pub fn init_command(config_path: Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = config_path.unwrap_or_else(Config::global_config_path);

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    Config::write_default(&config_path)?;
    println!("Created: {}", config_path.display());

    Ok(())
}
