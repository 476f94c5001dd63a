//! Missing-value census.

use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};
use serde::Serialize;

use crate::error::Result;

/// Name of the column-name column in the census table.
pub const CENSUS_COLUMN: &str = "column";
/// Name of the count column in the census table.
pub const CENSUS_NA_COUNT: &str = "na_count";

/// Missing-value count for one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NullCount {
    pub column: String,
    pub na_count: u64,
}

/// Counts missing values per column, in column order.
pub fn null_counts(df: &DataFrame) -> Vec<NullCount> {
    df.get_columns()
        .iter()
        .map(|col| NullCount {
            column: col.name().to_string(),
            na_count: col.null_count() as u64,
        })
        .collect()
}

/// Builds the census table: one row per input column with its missing count.
///
/// The result has two columns, [`CENSUS_COLUMN`] and [`CENSUS_NA_COUNT`], and
/// lists the input columns in their original order.
pub fn column_na_count_df(df: &DataFrame) -> Result<DataFrame> {
    let counts = null_counts(df);
    let names: Vec<String> = counts.iter().map(|c| c.column.clone()).collect();
    let na_counts: Vec<u64> = counts.iter().map(|c| c.na_count).collect();

    let census = DataFrame::new(vec![
        Series::new(CENSUS_COLUMN.into(), names).into_column(),
        Series::new(CENSUS_NA_COUNT.into(), na_counts).into_column(),
    ])?;
    tracing::debug!(columns = census.height(), "built null census");
    Ok(census)
}
