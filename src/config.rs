//! Configuration management for travel-records
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::RecordsError;
use crate::chart::DEFAULT_TITLE;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordsConfig {
    /// Raw input file locations
    #[serde(default)]
    pub input: InputConfig,
    /// Cleaned output file locations
    #[serde(default)]
    pub output: OutputConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Chart export settings
    #[serde(default)]
    pub chart: ChartConfig,
}

/// Raw input file locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_travelers_input")]
    pub travelers_file: String,
    #[serde(default = "default_trips_input")]
    pub trips_file: String,
}

/// Cleaned output file locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory the cleaned files are written to
    #[serde(default = "default_output_directory")]
    pub directory: String,
    #[serde(default = "default_travelers_output")]
    pub travelers_file: String,
    #[serde(default = "default_trips_output")]
    pub trips_file: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Chart export settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Image width in pixels
    #[serde(default = "default_chart_width")]
    pub width: u32,
    /// Image height in pixels
    #[serde(default = "default_chart_height")]
    pub height: u32,
    /// Title of exported destination charts
    #[serde(default = "default_chart_title")]
    pub title: String,
}

// Default value functions
fn default_travelers_input() -> String {
    "travelers.csv".to_string()
}

fn default_trips_input() -> String {
    "travels.csv".to_string()
}

fn default_output_directory() -> String {
    ".".to_string()
}

fn default_travelers_output() -> String {
    "travelers_cleaned.csv".to_string()
}

fn default_trips_output() -> String {
    "travels_cleaned.csv".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_chart_width() -> u32 {
    600
}

fn default_chart_height() -> u32 {
    300
}

fn default_chart_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            travelers_file: default_travelers_input(),
            trips_file: default_trips_input(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
            travelers_file: default_travelers_output(),
            trips_file: default_trips_output(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: default_chart_width(),
            height: default_chart_height(),
            title: default_chart_title(),
        }
    }
}

impl OutputConfig {
    /// Full path of the cleaned travelers file
    #[must_use]
    pub fn travelers_path(&self) -> PathBuf {
        PathBuf::from(&self.directory).join(&self.travelers_file)
    }

    /// Full path of the cleaned trips file
    #[must_use]
    pub fn trips_path(&self) -> PathBuf {
        PathBuf::from(&self.directory).join(&self.trips_file)
    }
}

impl RecordsConfig {
    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // TRAVEL_RECORDS_CHART__WIDTH=800 overrides chart.width
        builder = builder.add_source(
            Environment::with_prefix("TRAVEL_RECORDS")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: RecordsConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("travel-records").join("config.toml"))
    }

    /// Apply default values to empty configuration fields
    pub fn apply_defaults(&mut self) {
        if self.input.travelers_file.is_empty() {
            self.input.travelers_file = default_travelers_input();
        }
        if self.input.trips_file.is_empty() {
            self.input.trips_file = default_trips_input();
        }
        if self.output.directory.is_empty() {
            self.output.directory = default_output_directory();
        }
        if self.output.travelers_file.is_empty() {
            self.output.travelers_file = default_travelers_output();
        }
        if self.output.trips_file.is_empty() {
            self.output.trips_file = default_trips_output();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.chart.width == 0 {
            self.chart.width = default_chart_width();
        }
        if self.chart.height == 0 {
            self.chart.height = default_chart_height();
        }
        if self.chart.title.is_empty() {
            self.chart.title = default_chart_title();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        for (name, value) in [("width", self.chart.width), ("height", self.chart.height)] {
            if !(200..=4000).contains(&value) {
                return Err(RecordsError::config(format!(
                    "Chart {name} must be between 200 and 4000 pixels, got {value}"
                ))
                .into());
            }
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(RecordsError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(RecordsError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if self.input.travelers_file == self.input.trips_file {
            return Err(RecordsError::config(
                "Travelers and trips inputs must be different files",
            )
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = RecordsConfig::default();
        assert_eq!(config.input.travelers_file, "travelers.csv");
        assert_eq!(config.input.trips_file, "travels.csv");
        assert_eq!(config.output.travelers_file, "travelers_cleaned.csv");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.chart.title, "Traveler Travel Chart");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_output_paths_join_directory() {
        let mut config = RecordsConfig::default();
        config.output.directory = "cleaned".to_string();
        assert_eq!(
            config.output.trips_path(),
            PathBuf::from("cleaned").join("travels_cleaned.csv")
        );
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = RecordsConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_chart_size() {
        let mut config = RecordsConfig::default();
        config.chart.width = 10_000;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Chart width"));
    }

    #[test]
    fn test_apply_defaults_fills_empty_values() {
        let mut config = RecordsConfig::default();
        config.output.trips_file = String::new();
        config.chart.height = 0;
        config.apply_defaults();
        assert_eq!(config.output.trips_file, "travels_cleaned.csv");
        assert_eq!(config.chart.height, 300);
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[input]\ntravelers_file = \"data/people.csv\"\n\n[chart]\nwidth = 800\n"
        )
        .unwrap();

        let config = RecordsConfig::load_from_path(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.input.travelers_file, "data/people.csv");
        assert_eq!(config.input.trips_file, "travels.csv");
        assert_eq!(config.chart.width, 800);
        assert_eq!(config.chart.height, 300);
    }

    #[test]
    fn test_config_path_generation() {
        if let Some(path) = RecordsConfig::get_config_path() {
            assert!(path.to_string_lossy().contains("travel-records"));
            assert!(path.to_string_lossy().contains("config.toml"));
        }
    }
}
