//! Configuration for tripstore
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{Result, StoreError};

/// Main configuration for a TripPlanner instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Export Configuration
    // -------------------------------------------------------------------------
    /// Destination file for the CSV export
    pub export_path: PathBuf,

    // -------------------------------------------------------------------------
    // Report Configuration
    // -------------------------------------------------------------------------
    /// Symbol printed after budgets in destination reports
    pub currency_symbol: String,

    // -------------------------------------------------------------------------
    // Logging Configuration
    // -------------------------------------------------------------------------
    /// Default tracing filter, used when RUST_LOG is not set
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_path: PathBuf::from("data.csv"),
            currency_symbol: "€".to_string(),
            log_filter: "info,tripstore=debug".to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Reject configurations that cannot be used for export
    pub fn validate(&self) -> Result<()> {
        if self.export_path.as_os_str().is_empty() {
            return Err(StoreError::Config("export path must not be empty".to_string()));
        }
        if self.log_filter.trim().is_empty() {
            return Err(StoreError::Config("log filter must not be empty".to_string()));
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
    /// Set the CSV export file
    pub fn export_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.export_path = path.into();
        self
    }

    /// Set the currency symbol used in reports
    pub fn currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.config.currency_symbol = symbol.into();
        self
    }

    /// Set the default log filter
    pub fn log_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.log_filter = filter.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
