//! Column filters for wide indicator tables.
//!
//! Published metrics arrive alongside their confidence-interval bounds, the
//! raw numerator and denominator they were derived from, and breakdowns by
//! race. These filters select the columns to remove by name substring.

use polars::prelude::DataFrame;

use crate::error::Result;
use crate::frame::{column_names, drop_columns, matches_any, missing_count};

/// Name fragments of confidence-interval bounds and raw rate inputs.
pub const REDUNDANT_MARKERS: [&str; 4] = ["cilow", "cihigh", "numerator", "denominator"];

/// Name fragments of race-category breakdowns.
pub const RACE_MARKERS: [&str; 3] = ["black", "hispanic", "white"];

/// Drops confidence-interval, numerator and denominator columns.
///
/// A column is dropped when its name contains any of [`REDUNDANT_MARKERS`].
/// The input is left untouched; when nothing matches the result holds the
/// same columns as the input.
pub fn drop_ci_num_denom(df: &DataFrame) -> Result<DataFrame> {
    let drop: Vec<String> = column_names(df)
        .into_iter()
        .filter(|name| matches_any(name, &REDUNDANT_MARKERS))
        .collect();

    tracing::info!(
        dropped = drop.len(),
        remaining = df.width() - drop.len(),
        "dropped CI bound and numerator/denominator columns"
    );
    for name in &drop {
        tracing::debug!(column = %name, "redundant column");
    }

    drop_columns(df, &drop)
}

/// Drops race-crosstab columns that contain missing values.
///
/// A column is dropped only when its name contains any of [`RACE_MARKERS`]
/// and it has at least one missing value. Complete race columns are kept, as
/// is every column without a race marker. The result is an explicit copy of
/// the retained table.
pub fn drop_race_cross_tabs(df: &DataFrame) -> Result<DataFrame> {
    let mut drop = Vec::new();
    for name in column_names(df) {
        if !matches_any(&name, &RACE_MARKERS) {
            continue;
        }
        let missing = missing_count(df, &name)?;
        if missing > 0 {
            tracing::debug!(column = %name, missing, "sparse race crosstab");
            drop.push(name);
        }
    }

    tracing::info!(
        dropped = drop.len(),
        remaining = df.width() - drop.len(),
        "dropped sparse race crosstab columns"
    );

    let retained = drop_columns(df, &drop)?;
    Ok(retained.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{Column, IntoColumn, NamedFrom, Series};

    fn int_df(columns: Vec<(&str, Vec<Option<i32>>)>) -> DataFrame {
        let cols: Vec<Column> = columns
            .into_iter()
            .map(|(name, values)| Series::new(name.into(), values).into_column())
            .collect();
        DataFrame::new(cols).unwrap()
    }

    #[test]
    fn test_drop_ci_num_denom_concrete() {
        let df = int_df(vec![
            ("a_cilow", vec![Some(1), Some(4)]),
            ("b", vec![Some(2), Some(5)]),
            ("c_numerator", vec![Some(3), Some(6)]),
        ]);

        let out = drop_ci_num_denom(&df).unwrap();

        assert_eq!(column_names(&out), vec!["b"]);
        let values: Vec<Option<i32>> = out
            .column("b")
            .unwrap()
            .as_materialized_series()
            .i32()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(values, vec![Some(2), Some(5)]);
    }

    #[test]
    fn test_drop_ci_num_denom_marker_at_start() {
        let df = int_df(vec![
            ("cihigh_obesity", vec![Some(1)]),
            ("denominator", vec![Some(2)]),
            ("obesity", vec![Some(3)]),
        ]);

        let out = drop_ci_num_denom(&df).unwrap();

        assert_eq!(column_names(&out), vec!["obesity"]);
    }

    #[test]
    fn test_drop_ci_num_denom_no_match() {
        let df = int_df(vec![("x", vec![Some(1)]), ("y", vec![None])]);

        let out = drop_ci_num_denom(&df).unwrap();

        assert!(out.equals_missing(&df));
    }

    #[test]
    fn test_drop_race_cross_tabs_only_sparse() {
        let df = int_df(vec![
            ("obesity_black", vec![Some(1), None]),
            ("obesity_white", vec![Some(1), Some(2)]),
            ("obesity_hispanic", vec![None, None]),
            ("obesity", vec![None, Some(2)]),
        ]);

        let out = drop_race_cross_tabs(&df).unwrap();

        assert_eq!(column_names(&out), vec!["obesity_white", "obesity"]);
        assert_eq!(out.height(), 2);
    }

    #[test]
    fn test_drop_race_cross_tabs_leaves_input_untouched() {
        let df = int_df(vec![("black_pct", vec![None]), ("total", vec![Some(1)])]);
        let before = df.clone();

        let mut out = drop_race_cross_tabs(&df).unwrap();
        out.rename("total", "renamed".into()).unwrap();

        assert!(df.equals_missing(&before));
        assert_eq!(column_names(&df), vec!["black_pct", "total"]);
    }
}
