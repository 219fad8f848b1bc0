//! Configuration management for fmconv
//!
//! `ConverterConfig::default()` yields fixed defaults and touches no
//! environment. The command-line host calls [`ConverterConfig::from_env`] to
//! overlay environment variables, then applies its own flags on top.
//!
//! # Environment Variables
//!
//! - `FMCONV_INCLUDE_PYTEST`: Also render the pytest stub (true|false) - default: "false"
//! - `FMCONV_SPEC_FORMAT`: Structured export format (json|yaml) - default: "json"
//! - `FMCONV_OUTPUT_DIR`: Directory artifacts are written to - default: "."
//! - `FMCONV_LOG_LEVEL`: Logging level - default: "info"
//! - `FMCONV_LOG_JSON`: Emit logs as JSON lines (true|false) - default: "false"

use crate::output::{RenderOptions, StructuredFormat};
use std::env;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_INCLUDE_PYTEST: bool = false;
const DEFAULT_OUTPUT_DIR: &str = ".";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_LOG_JSON: bool = false;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    /// Failed to parse configuration value
    #[error("Failed to parse {field}: {error}")]
    ParseError { field: String, error: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    /// Render `test_fm_stub.py` alongside the other artifacts
    pub include_pytest: bool,

    /// Format of the structured export
    pub spec_format: StructuredFormat,

    /// Directory the `convert` command writes artifacts into
    pub output_dir: PathBuf,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Emit logs as JSON lines instead of plain text
    pub log_json: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            include_pytest: DEFAULT_INCLUDE_PYTEST,
            spec_format: StructuredFormat::default(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_json: DEFAULT_LOG_JSON,
        }
    }
}

impl ConverterConfig {
    /// Loads configuration from `FMCONV_*` environment variables
    ///
    /// Unparsable booleans fall back to their defaults. An unknown
    /// `FMCONV_SPEC_FORMAT` is rejected so a typo never silently switches
    /// formats.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let include_pytest = env::var("FMCONV_INCLUDE_PYTEST")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(defaults.include_pytest);

        let spec_format = match env::var("FMCONV_SPEC_FORMAT") {
            Ok(v) => v
                .parse::<StructuredFormat>()
                .map_err(|error| ConfigError::ParseError {
                    field: "FMCONV_SPEC_FORMAT".to_string(),
                    error,
                })?,
            Err(_) => defaults.spec_format,
        };

        let output_dir = env::var("FMCONV_OUTPUT_DIR")
            .ok()
            .map(PathBuf::from)
            .unwrap_or(defaults.output_dir);

        let log_level = env::var("FMCONV_LOG_LEVEL")
            .unwrap_or(defaults.log_level)
            .to_lowercase();

        let log_json = env::var("FMCONV_LOG_JSON")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(defaults.log_json);

        Ok(Self {
            include_pytest,
            spec_format,
            output_dir,
            log_level,
            log_json,
        })
    }

    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationFailed` for an unknown log level or an
    /// empty output directory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Output directory must not be empty".to_string(),
            ));
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        Ok(())
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            include_pytest: self.include_pytest,
            spec_format: self.spec_format,
        }
    }
}
