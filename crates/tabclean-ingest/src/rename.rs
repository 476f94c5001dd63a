//! Column renaming from the dual header convention.
//!
//! The descriptive label row names the columns of a loaded table; the
//! identifier row supplies short replacements. A [`RenameMap`] pairs the two,
//! normalizing each identifier into a lowercase snake-style name.

use std::collections::BTreeMap;
use std::path::Path;

use polars::prelude::DataFrame;
use serde::Serialize;

use crate::error::{IngestError, Result};
use crate::table::{HeaderPair, read_header_pair};

/// Leading geography/date key columns that are never renamed.
pub const SKIPPED_KEY_COLUMNS: usize = 6;

/// Ordered literal substitutions applied to lowercased identifiers.
///
/// Each step sees the output of the previous one, so `" - "` must run before
/// the single-space and single-dash rules.
pub const IDENTIFIER_REPLACEMENTS: [(&str, &str); 10] = [
    (" - ", "_"),
    (" ", "_"),
    ("-", "_"),
    ("/", "_"),
    ("=", "_eqls_"),
    ("(", ""),
    (")", ""),
    ("%", "pct"),
    ("+", "plus"),
    (".", ""),
];

/// Mapping from descriptive label to normalized identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RenameMap {
    entries: BTreeMap<String, String>,
}

impl RenameMap {
    /// Builds the map from an already-read header pair.
    ///
    /// The first [`SKIPPED_KEY_COLUMNS`] columns are skipped. When two columns
    /// share a descriptive label the later column wins.
    pub fn from_header_pair(pair: &HeaderPair, path: &Path) -> Result<Self> {
        let required = SKIPPED_KEY_COLUMNS + 1;
        if pair.width() < required {
            return Err(IngestError::TooFewColumns {
                path: path.to_path_buf(),
                found: pair.width(),
                required,
            });
        }

        let mut map = Self::default();
        for (name, label) in pair.iter().skip(SKIPPED_KEY_COLUMNS) {
            let identifier = normalize_identifier(name);
            if let Some(previous) = map.insert(label, identifier) {
                tracing::debug!(
                    label,
                    previous = %previous,
                    "descriptive label repeated, overwriting"
                );
            }
        }
        Ok(map)
    }

    /// Inserts an entry, returning the identifier it replaced.
    pub fn insert(
        &mut self,
        label: impl Into<String>,
        identifier: impl Into<String>,
    ) -> Option<String> {
        self.entries.insert(label.into(), identifier.into())
    }

    /// Looks up the identifier for a descriptive label.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries.get(label).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(label, identifier)` pairs in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(label, identifier)| (label.as_str(), identifier.as_str()))
    }
}

/// Lowercases an identifier and applies [`IDENTIFIER_REPLACEMENTS`] in order.
///
/// # Examples
///
/// ```
/// use tabclean_ingest::normalize_identifier;
///
/// assert_eq!(normalize_identifier("TotPop"), "totpop");
/// assert_eq!(normalize_identifier("Pct. Unemployed (16+)"), "pct_unemployed_16plus");
/// ```
pub fn normalize_identifier(raw: &str) -> String {
    IDENTIFIER_REPLACEMENTS
        .iter()
        .fold(raw.to_lowercase(), |value, &(from, to)| value.replace(from, to))
}

/// Reads the header rows of `path` and builds its [`RenameMap`].
///
/// Fails with [`IngestError::TooFewColumns`] when the file has no column
/// past the key columns.
pub fn create_column_dict(path: &Path) -> Result<RenameMap> {
    let pair = read_header_pair(path)?;
    let map = RenameMap::from_header_pair(&pair, path)?;
    tracing::info!(
        path = %path.display(),
        mapped = map.len(),
        skipped = SKIPPED_KEY_COLUMNS,
        "built column rename map"
    );
    Ok(map)
}

/// Renames every column whose name is a key of `map`.
///
/// Columns without an entry keep their name. Returns a new DataFrame.
///
/// Fails with [`IngestError::DuplicateIdentifier`] when two columns would end
/// up with the same name, naming every column involved.
pub fn apply_rename_map(df: &DataFrame, map: &RenameMap) -> Result<DataFrame> {
    if map.is_empty() {
        return Ok(df.clone());
    }

    let mut renamed = 0usize;
    let mut names = Vec::with_capacity(df.width());
    let mut sources: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for name in df.get_column_names() {
        let target = match map.get(name.as_str()) {
            Some(identifier) => {
                renamed += 1;
                identifier.to_string()
            }
            None => name.to_string(),
        };
        sources
            .entry(target.clone())
            .or_default()
            .push(name.to_string());
        names.push(target);
    }

    if let Some((identifier, labels)) = sources
        .into_iter()
        .find(|(_, labels)| labels.len() > 1)
    {
        return Err(IngestError::DuplicateIdentifier { identifier, labels });
    }

    let mut out = df.clone();
    out.set_column_names(names)?;
    tracing::debug!(renamed, kept = df.width() - renamed, "applied rename map");
    Ok(out)
}
