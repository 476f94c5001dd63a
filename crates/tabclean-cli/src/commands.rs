//! Subcommand handlers.

use anyhow::{Context, Result};

use tabclean_cli::pipeline::{clean_to_file, column_dict, stage_null_counts};
use tabclean_cli::types::CleanResult;

use crate::cli::{CleanArgs, ColumnsArgs, NullsArgs, OutputFormatArg};
use crate::summary::{print_null_counts, print_rename_map};

pub fn run_columns(args: &ColumnsArgs) -> Result<()> {
    let map = column_dict(&args.input)?;
    match args.format {
        OutputFormatArg::Table => print_rename_map(&map),
        OutputFormatArg::Json => {
            let json = serde_json::to_string_pretty(&map).context("serialize rename map")?;
            println!("{json}");
        }
    }
    Ok(())
}

pub fn run_nulls(args: &NullsArgs) -> Result<()> {
    let counts = stage_null_counts(
        &args.input,
        args.stage.into(),
        &args.filters.options(),
        args.only_missing,
    )?;
    match args.format {
        OutputFormatArg::Table => print_null_counts(&counts),
        OutputFormatArg::Json => {
            let json = serde_json::to_string_pretty(&counts).context("serialize null counts")?;
            println!("{json}");
        }
    }
    Ok(())
}

pub fn run_clean(args: &CleanArgs) -> Result<CleanResult> {
    clean_to_file(
        &args.input,
        args.output.as_deref(),
        &args.filters.options(),
        args.dry_run,
    )
}
