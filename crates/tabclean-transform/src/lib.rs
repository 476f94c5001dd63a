//! Column filters and missing-value census for wide indicator tables.
//!
//! This crate provides:
//!
//! - **filters**: Drop confidence-interval, numerator/denominator, and sparse race-crosstab columns
//! - **census**: Per-column missing-value counts as a two-column table
//! - **frame**: Column selection helpers (substring matching, checked column drops)
//!
//! Every function takes the input table by reference and returns a new one.

mod census;
mod error;
mod filters;
mod frame;

pub use census::{CENSUS_COLUMN, CENSUS_NA_COUNT, NullCount, column_na_count_df, null_counts};
pub use error::{Result, TransformError};
pub use filters::{RACE_MARKERS, REDUNDANT_MARKERS, drop_ci_num_denom, drop_race_cross_tabs};
pub use frame::{column_names, drop_columns, matches_any, missing_count};
