//! Path management for spendtrack
//!
//! ## Path Resolution Order
//!
//! 1. `SPENDTRACK_DATA_DIR` environment variable (if set)
//! 2. The platform config directory reported by `directories`
//!    (`~/.config/spendtrack` on Linux, `%APPDATA%\spendtrack` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::SpendError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "SPENDTRACK_DATA_DIR";

/// Manages all paths used by spendtrack
#[derive(Debug, Clone)]
pub struct SpendPaths {
    /// Base directory for all spendtrack data
    base_dir: PathBuf,
}

impl SpendPaths {
    /// Create a new SpendPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, SpendError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create SpendPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to transactions.json
    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    /// Get the path to budgets.json
    pub fn budgets_file(&self) -> PathBuf {
        self.data_dir().join("budgets.json")
    }

    /// Get the path to categories.json
    pub fn categories_file(&self) -> PathBuf {
        self.data_dir().join("categories.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), SpendError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SpendError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| SpendError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if spendtrack has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, SpendError> {
    ProjectDirs::from("", "", "spendtrack")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| SpendError::Config("Could not determine a home directory".into()))
}
