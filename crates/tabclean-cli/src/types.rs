//! Result types for the cleaning pipeline.

use std::path::PathBuf;

use polars::prelude::DataFrame;
use tabclean_ingest::RenameMap;

/// Outcome of a full cleaning run.
#[derive(Debug)]
pub struct CleanResult {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub rename_map: RenameMap,
    pub stages: Vec<StageSummary>,
    pub data: DataFrame,
}

impl CleanResult {
    pub fn rows(&self) -> usize {
        self.data.height()
    }

    pub fn dropped_total(&self) -> usize {
        self.stages.iter().map(|stage| stage.dropped.len()).sum()
    }
}

/// Column accounting for one pipeline stage.
#[derive(Debug, Clone)]
pub struct StageSummary {
    pub name: &'static str,
    pub columns_in: usize,
    pub columns_out: usize,
    pub dropped: Vec<String>,
    /// Columns renamed in this stage (rename stage only).
    pub renamed: usize,
}
