//! Configuration for rosterdb
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{Result, RosterError};

/// Main configuration for a rosterdb store
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Text file holding one record per line
    pub data_file: PathBuf,

    // -------------------------------------------------------------------------
    // Collection Configuration
    // -------------------------------------------------------------------------
    /// Upper bound on collection capacity (slots).
    /// `None` means growth is limited only by the allocator.
    pub capacity_limit: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("employees.txt"),
            capacity_limit: None,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check the configuration before a store is opened with it
    pub fn validate(&self) -> Result<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(RosterError::Config("data file path is empty".to_string()));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data file path
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Cap the number of record slots the collection may grow to
    pub fn capacity_limit(mut self, limit: usize) -> Self {
        self.config.capacity_limit = Some(limit);
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
