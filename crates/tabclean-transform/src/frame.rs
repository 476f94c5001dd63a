//! DataFrame column helpers shared by the filters and the census.

use polars::prelude::DataFrame;

use crate::error::{Result, TransformError};

/// Returns the column names of a DataFrame in order.
pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect()
}

/// Returns true if `name` contains at least one of `markers`.
///
/// # Examples
///
/// ```
/// use tabclean_transform::matches_any;
///
/// assert!(matches_any("obesity_cilow", &["cilow", "cihigh"]));
/// assert!(!matches_any("obesity", &["cilow", "cihigh"]));
/// ```
pub fn matches_any(name: &str, markers: &[&str]) -> bool {
    markers.iter().any(|marker| name.contains(marker))
}

/// Counts the missing values of a single column.
pub fn missing_count(df: &DataFrame, column: &str) -> Result<usize> {
    df.column(column)
        .map(|col| col.null_count())
        .map_err(|_| TransformError::ColumnNotFound {
            column: column.to_string(),
        })
}

/// Removes the named columns, keeping the others in their original order.
///
/// Every name must exist; an unknown name fails with
/// [`TransformError::ColumnNotFound`] and nothing is dropped.
pub fn drop_columns(df: &DataFrame, names: &[String]) -> Result<DataFrame> {
    if let Some(missing) = names.iter().find(|name| df.column(name).is_err()) {
        return Err(TransformError::ColumnNotFound {
            column: missing.clone(),
        });
    }
    let keep: Vec<String> = column_names(df)
        .into_iter()
        .filter(|name| !names.contains(name))
        .collect();
    Ok(df.select(keep)?)
}
