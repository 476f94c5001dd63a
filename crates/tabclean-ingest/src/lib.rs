//! Table ingestion utilities.
//!
//! This crate reads wide indicator datasets that carry two header rows (short
//! identifiers, then descriptive labels) and loads them into Polars DataFrames.
//!
//! # Features
//!
//! - **Header probing**: Read only the two header rows of a CSV file
//! - **Rename maps**: Map descriptive labels to normalized short identifiers
//! - **Table I/O**: Load the full table keyed by descriptive labels, write CSV back
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use tabclean_ingest::{apply_rename_map, create_column_dict, read_csv_table};
//!
//! let path = Path::new("data/tracts.csv");
//! let map = create_column_dict(path)?;
//! let df = apply_rename_map(&read_csv_table(path)?, &map)?;
//! ```

mod error;
mod rename;
mod table;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use table::{HeaderPair, read_csv_table, read_header_pair, write_csv_table};

// === Renaming ===
pub use rename::{
    IDENTIFIER_REPLACEMENTS, RenameMap, SKIPPED_KEY_COLUMNS, apply_rename_map,
    create_column_dict, normalize_identifier,
};
