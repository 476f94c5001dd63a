//! Property tests for the column filters and the null census.

use std::collections::BTreeSet;

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use proptest::prelude::*;

use tabclean_transform::{
    CENSUS_COLUMN, CENSUS_NA_COUNT, RACE_MARKERS, REDUNDANT_MARKERS, column_na_count_df,
    column_names, drop_ci_num_denom, drop_race_cross_tabs, matches_any,
};

const TOKENS: &[&str] = &[
    "obesity",
    "rate",
    "pct",
    "black",
    "hispanic",
    "white",
    "cilow",
    "cihigh",
    "numerator",
    "denominator",
];

fn column_name() -> impl Strategy<Value = String> {
    (
        prop::sample::select(TOKENS.to_vec()),
        prop::sample::select(TOKENS.to_vec()),
    )
        .prop_map(|(a, b)| format!("{a}_{b}"))
}

fn table() -> impl Strategy<Value = DataFrame> {
    (prop::collection::btree_set(column_name(), 1..8), 1usize..6).prop_flat_map(
        |(names, rows): (BTreeSet<String>, usize)| {
            let width = names.len();
            (
                Just(names),
                prop::collection::vec(
                    prop::collection::vec(prop::option::of(any::<i32>()), rows),
                    width,
                ),
            )
                .prop_map(|(names, values)| {
                    let cols: Vec<Column> = names
                        .into_iter()
                        .zip(values)
                        .map(|(name, data)| {
                            Series::new(name.as_str().into(), data).into_column()
                        })
                        .collect();
                    DataFrame::new(cols).unwrap()
                })
        },
    )
}

fn same_column(a: &DataFrame, b: &DataFrame, name: &str) -> bool {
    let left = a.column(name).unwrap().as_materialized_series();
    let right = b.column(name).unwrap().as_materialized_series();
    left.equals_missing(right)
}

proptest! {
    #[test]
    fn redundancy_filter_removes_exactly_marked_columns(df in table()) {
        let before = df.clone();
        let out = drop_ci_num_denom(&df).unwrap();

        for name in column_names(&out) {
            prop_assert!(!matches_any(&name, &REDUNDANT_MARKERS));
        }
        for name in column_names(&df) {
            if !matches_any(&name, &REDUNDANT_MARKERS) {
                prop_assert!(same_column(&df, &out, &name));
            }
        }
        if out.width() > 0 {
            prop_assert_eq!(out.height(), df.height());
        }
        prop_assert!(df.equals_missing(&before));
    }

    #[test]
    fn race_filter_keeps_only_complete_race_columns(df in table()) {
        let before = df.clone();
        let out = drop_race_cross_tabs(&df).unwrap();

        for name in column_names(&out) {
            let nulls = df.column(&name).unwrap().null_count();
            prop_assert!(!matches_any(&name, &RACE_MARKERS) || nulls == 0);
            prop_assert!(same_column(&df, &out, &name));
        }
        for name in column_names(&df) {
            if !matches_any(&name, &RACE_MARKERS) {
                prop_assert!(out.column(&name).is_ok());
            }
        }
        prop_assert!(df.equals_missing(&before));
    }

    #[test]
    fn census_has_one_row_per_column(df in table()) {
        let census = column_na_count_df(&df).unwrap();

        prop_assert_eq!(census.height(), df.width());
        let names = census.column(CENSUS_COLUMN).unwrap().as_materialized_series();
        let names = names.str().unwrap();
        let counts = census.column(CENSUS_NA_COUNT).unwrap().as_materialized_series();
        let counts = counts.u64().unwrap();
        for (idx, col) in df.get_columns().iter().enumerate() {
            prop_assert_eq!(names.get(idx), Some(col.name().as_str()));
            prop_assert_eq!(counts.get(idx), Some(col.null_count() as u64));
        }
    }
}
