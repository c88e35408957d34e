//! Configuration file I/O operations

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use super::{Config, DEFAULT_CONFIG};

impl Config {
    /// Get the global config directory path (~/.voxdial/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".voxdial")
    }

    /// Get the global config file path (~/.voxdial/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Load and validate configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to load config file: {}", path.display()))
    }

    /// Save configuration to a file with atomic write and file locking.
    ///
    /// An exclusive lock on a sibling `.lock` file serializes writers, and
    /// the content goes through a temp file + rename so readers never see a
    /// partial file.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;
        write_locked(path, &content)
    }

    /// Write the commented default config to `path`
    pub fn write_default(path: &Path) -> Result<()> {
        write_locked(path, DEFAULT_CONFIG)
    }

    /// Load the config at `path`, or the global config when `None`.
    ///
    /// The global config is created with defaults if it does not exist yet.
    /// An explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        let global_path = Self::global_config_path();
        if !global_path.exists() {
            Self::auto_init(&global_path)?;
        }
        Self::from_file(&global_path)
    }

    /// Write the default config to `path` unless another process beat us to it
    fn auto_init(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let lock_file = acquire_lock(path)?;

        // Re-check after acquiring the lock
        if path.exists() {
            return Ok(());
        }

        write_atomic(path, DEFAULT_CONFIG)?;
        drop(lock_file);

        tracing::info!("Auto-initialized config: {}", path.display());
        Ok(())
    }
}

/// Write `content` to `path` under the config lock
fn write_locked(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create config directory: {}", parent.display())
        })?;
    }

    // Lock is released when the guard is dropped
    let _lock = acquire_lock(path)?;
    write_atomic(path, content)
}

fn acquire_lock(path: &Path) -> Result<std::fs::File> {
    let lock_path = path.with_extension("toml.lock");
    let lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&lock_path)
        .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;

    lock_file
        .lock_exclusive()
        .with_context(|| "Failed to acquire config lock")?;

    Ok(lock_file)
}

fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let temp_path = path.with_extension("toml.tmp");
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

    temp_file
        .write_all(content.as_bytes())
        .with_context(|| "Failed to write config content")?;

    temp_file
        .sync_all()
        .with_context(|| "Failed to sync config file")?;

    std::fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename config file: {}", path.display()))?;

    Ok(())
}
