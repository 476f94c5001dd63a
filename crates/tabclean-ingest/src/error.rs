//! Error types for table ingestion.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading or writing source tables.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create or write the output file.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// The file is not well-formed CSV (bad quoting, ragged rows, invalid UTF-8).
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV file is empty or has no valid rows.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// Only the identifier row is present; the descriptive label row is missing.
    #[error("CSV file {path} has no descriptive label row")]
    MissingLabelRow { path: PathBuf },

    // === Schema Errors ===
    /// Not enough columns to skip the key columns and map the rest.
    #[error("CSV file {path} has {found} columns, at least {required} are required")]
    TooFewColumns {
        path: PathBuf,
        found: usize,
        required: usize,
    },

    /// Two or more columns would be renamed to the same identifier.
    #[error("columns {} would all be renamed to `{identifier}`", .labels.join(", "))]
    DuplicateIdentifier {
        identifier: String,
        labels: Vec<String>,
    },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl IngestError {
    /// Classifies an I/O error raised while opening `path`.
    pub(crate) fn open(path: &Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source: err,
            }
        }
    }
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/file.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /path/to/file.csv");
    }

    #[test]
    fn test_too_few_columns_display() {
        let err = IngestError::TooFewColumns {
            path: PathBuf::from("tracts.csv"),
            found: 3,
            required: 7,
        };
        assert_eq!(
            err.to_string(),
            "CSV file tracts.csv has 3 columns, at least 7 are required"
        );
    }

    #[test]
    fn test_duplicate_identifier_display() {
        let err = IngestError::DuplicateIdentifier {
            identifier: "pct_obese".to_string(),
            labels: vec!["Obese Adults".to_string(), "Obesity".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "columns Obese Adults, Obesity would all be renamed to `pct_obese`"
        );
    }

    #[test]
    fn test_open_classifies_not_found() {
        let err = IngestError::open(
            Path::new("missing.csv"),
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        assert!(matches!(err, IngestError::FileNotFound { .. }));

        let err = IngestError::open(
            Path::new("locked.csv"),
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, IngestError::FileRead { .. }));
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("test".into());
        let ingest_err: IngestError = polars_err.into();
        assert!(matches!(ingest_err, IngestError::DataFrame { .. }));
    }
}
