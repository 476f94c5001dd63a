//! Error types for column transformations.

use thiserror::Error;

/// Errors that can occur while transforming a table.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A column requested for removal or lookup does not exist.
    #[error("column '{column}' not found in DataFrame")]
    ColumnNotFound { column: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for transformation operations.
pub type Result<T> = std::result::Result<T, TransformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TransformError::ColumnNotFound {
            column: "obesity_cilow".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "column 'obesity_cilow' not found in DataFrame"
        );
    }
}
