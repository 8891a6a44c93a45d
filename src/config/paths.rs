//! Path management for fintrack
//!
//! ## Path Resolution Order
//!
//! 1. `FINTRACK_DATA_DIR` environment variable (if set)
//! 2. The platform data directory (`directories::ProjectDirs`), e.g.
//!    `~/.local/share/fintrack` on Linux

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::FinanceError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "FINTRACK_DATA_DIR";

/// Manages all paths used by fintrack
#[derive(Debug, Clone)]
pub struct FinancePaths {
    /// Base directory for all fintrack data
    base_dir: PathBuf,
}

impl FinancePaths {
    /// Create a new FinancePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no platform data directory can be determined
    /// and `FINTRACK_DATA_DIR` is not set.
    pub fn new() -> Result<Self, FinanceError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create FinancePaths with a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding one file per store key
    pub fn store_dir(&self) -> PathBuf {
        self.base_dir.join("store")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), FinanceError> {
        std::fs::create_dir_all(self.store_dir())
            .map_err(|e| FinanceError::Io(format!("Failed to create store directory: {}", e)))
    }
}

fn resolve_default_path() -> Result<PathBuf, FinanceError> {
    ProjectDirs::from("dev", "fintrack", "fintrack")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            FinanceError::Config(format!(
                "Could not determine a data directory; set {}",
                DATA_DIR_ENV
            ))
        })
}
