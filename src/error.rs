//! Error types and handling for travel record processing

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for loading, cleaning and exporting travel records
#[derive(Error, Debug)]
pub enum RecordsError {
    /// A required input file does not exist
    #[error("Input file not found: {}", .path.display())]
    MissingInput { path: PathBuf },

    /// Required columns are absent from an input table
    #[error("{dataset} data is missing required columns: {}", .missing.join(", "))]
    Schema {
        dataset: String,
        missing: Vec<String>,
    },

    /// Malformed CSV framing
    #[error("CSV error: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl RecordsError {
    /// Create a new missing input error
    pub fn missing_input<P: Into<PathBuf>>(path: P) -> Self {
        Self::MissingInput { path: path.into() }
    }

    /// Create a new schema error
    pub fn schema<S: Into<String>>(dataset: S, missing: Vec<String>) -> Self {
        Self::Schema {
            dataset: dataset.into(),
            missing,
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            RecordsError::MissingInput { path } => {
                format!("{} not found. Check the file location.", path.display())
            }
            RecordsError::Schema { dataset, missing } => {
                format!(
                    "{dataset} CSV must contain columns: {}",
                    missing.join(", ")
                )
            }
            RecordsError::Csv { .. } => {
                "The CSV file could not be read. Please check its formatting.".to_string()
            }
            RecordsError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            RecordsError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}
