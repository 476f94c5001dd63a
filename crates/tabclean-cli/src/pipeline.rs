//! Cleaning pipeline stages.
//!
//! The stages run in a fixed order: build the rename map and load the table,
//! rename, drop redundant statistic columns, drop sparse race crosstabs. Each
//! stage takes the previous table by reference and returns a new one.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::{info, info_span};

use tabclean_ingest::{
    RenameMap, apply_rename_map, create_column_dict, read_csv_table, write_csv_table,
};
use tabclean_transform::{
    NullCount, column_names, drop_ci_num_denom, drop_race_cross_tabs, null_counts,
};

use crate::types::{CleanResult, StageSummary};

/// Which column filters to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanOptions {
    /// Drop CI bound and numerator/denominator columns.
    pub drop_redundant: bool,
    /// Drop race-crosstab columns with missing values.
    pub drop_race_crosstabs: bool,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            drop_redundant: true,
            drop_race_crosstabs: true,
        }
    }
}

/// A point in the pipeline at which the table can be inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// As loaded, keyed by descriptive labels.
    Raw,
    /// After applying the rename map.
    Renamed,
    /// After the enabled filters.
    Cleaned,
}

/// Source table and its rename map.
#[derive(Debug)]
pub struct IngestResult {
    pub rename_map: RenameMap,
    pub raw: DataFrame,
}

type FilterFn = fn(&DataFrame) -> tabclean_transform::Result<DataFrame>;

pub fn ingest(path: &Path) -> Result<IngestResult> {
    let span = info_span!("ingest", path = %path.display());
    let _guard = span.enter();
    let rename_map = create_column_dict(path)
        .with_context(|| format!("build rename map: {}", path.display()))?;
    let raw = read_csv_table(path).with_context(|| format!("load table: {}", path.display()))?;
    Ok(IngestResult { rename_map, raw })
}

pub fn rename(raw: &DataFrame, rename_map: &RenameMap) -> Result<(DataFrame, StageSummary)> {
    let span = info_span!("rename");
    let _guard = span.enter();
    let renamed = apply_rename_map(raw, rename_map).context("apply rename map")?;
    let count = column_names(raw)
        .iter()
        .zip(column_names(&renamed).iter())
        .filter(|(before, after)| before != after)
        .count();
    info!(renamed = count, columns = renamed.width(), "renamed columns");
    let summary = StageSummary {
        name: "rename",
        columns_in: raw.width(),
        columns_out: renamed.width(),
        dropped: Vec::new(),
        renamed: count,
    };
    Ok((renamed, summary))
}

/// Runs one column filter and records which columns it removed.
pub fn filter_stage(
    name: &'static str,
    df: &DataFrame,
    run: FilterFn,
) -> Result<(DataFrame, StageSummary)> {
    let span = info_span!("filter", stage = name);
    let _guard = span.enter();
    let out = run(df).with_context(|| format!("{name} stage"))?;
    let kept: BTreeSet<String> = column_names(&out).into_iter().collect();
    let dropped: Vec<String> = column_names(df)
        .into_iter()
        .filter(|column| !kept.contains(column))
        .collect();
    let summary = StageSummary {
        name,
        columns_in: df.width(),
        columns_out: out.width(),
        dropped,
        renamed: 0,
    };
    Ok((out, summary))
}

/// Runs every stage on `path` and returns the cleaned table with its summary.
///
/// Nothing is written; the caller decides where the result goes.
pub fn run_pipeline(path: &Path, options: &CleanOptions) -> Result<CleanResult> {
    let span = info_span!("pipeline", path = %path.display());
    let _guard = span.enter();

    let IngestResult { rename_map, raw } = ingest(path)?;
    let (mut data, summary) = rename(&raw, &rename_map)?;
    let mut stages = vec![summary];

    let filters: [(&'static str, bool, FilterFn); 2] = [
        (
            "redundant",
            options.drop_redundant,
            drop_ci_num_denom as FilterFn,
        ),
        (
            "race crosstab",
            options.drop_race_crosstabs,
            drop_race_cross_tabs as FilterFn,
        ),
    ];
    for (name, enabled, run) in filters {
        if !enabled {
            info!(stage = name, "filter disabled");
            continue;
        }
        let (out, summary) = filter_stage(name, &data, run)?;
        data = out;
        stages.push(summary);
    }

    info!(
        rows = data.height(),
        columns = data.width(),
        "pipeline complete"
    );

    Ok(CleanResult {
        input: path.to_path_buf(),
        output: None,
        rename_map,
        stages,
        data,
    })
}

/// Returns the table as it looks after `stage`.
pub fn table_at_stage(path: &Path, stage: Stage, options: &CleanOptions) -> Result<DataFrame> {
    match stage {
        Stage::Raw => Ok(ingest(path)?.raw),
        Stage::Renamed => {
            let IngestResult { rename_map, raw } = ingest(path)?;
            Ok(rename(&raw, &rename_map)?.0)
        }
        Stage::Cleaned => Ok(run_pipeline(path, options)?.data),
    }
}

/// Builds the rename map of `path` without loading the data rows.
pub fn column_dict(path: &Path) -> Result<RenameMap> {
    create_column_dict(path).with_context(|| format!("build rename map: {}", path.display()))
}

/// Missing-value counts of the table after `stage`, in column order.
///
/// With `only_missing`, columns without any missing value are left out.
pub fn stage_null_counts(
    path: &Path,
    stage: Stage,
    options: &CleanOptions,
    only_missing: bool,
) -> Result<Vec<NullCount>> {
    let df = table_at_stage(path, stage, options)?;
    let mut counts = null_counts(&df);
    if only_missing {
        counts.retain(|count| count.na_count > 0);
    }
    Ok(counts)
}

/// Runs the pipeline and writes the cleaned table.
///
/// `output` defaults to [`default_output_path`]. With `dry_run` nothing is
/// written and the result has no output path.
pub fn clean_to_file(
    input: &Path,
    output: Option<&Path>,
    options: &CleanOptions,
    dry_run: bool,
) -> Result<CleanResult> {
    let span = info_span!("clean", input = %input.display());
    let _guard = span.enter();
    let mut result = run_pipeline(input, options)?;
    if dry_run {
        info!("dry run, skipping output");
        return Ok(result);
    }
    let output = output.map_or_else(|| default_output_path(input), Path::to_path_buf);
    write_csv_table(&mut result.data, &output)
        .with_context(|| format!("write cleaned table: {}", output.display()))?;
    info!(output = %output.display(), "wrote cleaned table");
    result.output = Some(output);
    Ok(result)
}

/// Default output path: `<stem>_clean.csv` next to the input.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "table".to_string());
    input.with_file_name(format!("{stem}_clean.csv"))
}
