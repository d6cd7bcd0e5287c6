//! Path management for fiscal-cli
//!
//! Resolves where the settings file lives.
//!
//! ## Path Resolution Order
//!
//! 1. `FISCAL_CLI_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/fiscal-cli` or `~/.config/fiscal-cli`
//! 3. Windows: `%APPDATA%\fiscal-cli`

use std::path::PathBuf;

use crate::error::FiscalError;

/// Manages all paths used by fiscal-cli
#[derive(Debug, Clone)]
pub struct FiscalPaths {
    /// Base directory for all fiscal-cli data
    base_dir: PathBuf,
}

impl FiscalPaths {
    /// Create a new FiscalPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, FiscalError> {
        let base_dir = if let Ok(custom) = std::env::var("FISCAL_CLI_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create FiscalPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/fiscal-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the config directory (same as base for simplicity)
    pub fn config_dir(&self) -> PathBuf {
        self.base_dir.clone()
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), FiscalError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FiscalError::Io(format!("failed to create config directory: {}", e)))?;
        Ok(())
    }

    /// Check if fiscal-cli has been initialized (settings file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, FiscalError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME").map(|home| PathBuf::from(home).join(".config"))
        })
        .map_err(|_| FiscalError::Config("could not determine home directory".into()))?;
    Ok(config_base.join("fiscal-cli"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, FiscalError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| FiscalError::Config("could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("fiscal-cli"))
}
