//! Integration tests for header mapping and renaming.

use std::io::Write;
use std::path::Path;

use tabclean_ingest::{
    IngestError, apply_rename_map, create_column_dict, read_csv_table, read_header_pair,
};
use tempfile::NamedTempFile;

const KEYS: &str = "state,county,tract,geoid,year,source";
const KEY_LABELS: &str = "State,County,Tract,GEOID,Year,Source";

fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[test]
fn create_column_dict_maps_first_metric_column() {
    let file = create_temp_csv(&format!(
        "{KEYS},TotPop\n{KEY_LABELS},Total Population\nAL,Autauga,0201,01001020100,2019,ACS,1912\n"
    ));

    let map = create_column_dict(file.path()).unwrap();

    assert_eq!(map.len(), 1);
    assert_eq!(map.get("Total Population"), Some("totpop"));
    for label in KEY_LABELS.split(',') {
        assert_eq!(map.get(label), None);
    }
}

#[test]
fn create_column_dict_normalizes_identifiers() {
    let file = create_temp_csv(&format!(
        "{KEYS},Pct. Unemployed (16+),Rate - Adjusted\n\
         {KEY_LABELS},Unemployment,Adjusted Rate\n"
    ));

    let map = create_column_dict(file.path()).unwrap();

    assert_eq!(map.get("Unemployment"), Some("pct_unemployed_16plus"));
    assert_eq!(map.get("Adjusted Rate"), Some("rate_adjusted"));
}

#[test]
fn create_column_dict_renders_in_label_order() {
    let file = create_temp_csv(&format!(
        "{KEYS},TotPop,Obesity_CIlow,Obesity\n\
         {KEY_LABELS},Total Population,Obesity CI Low,Obesity Prevalence\n"
    ));

    let map = create_column_dict(file.path()).unwrap();
    let rendered: Vec<String> = map
        .iter()
        .map(|(label, identifier)| format!("{label} -> {identifier}"))
        .collect();

    insta::assert_snapshot!(rendered.join("\n"), @r"
    Obesity CI Low -> obesity_cilow
    Obesity Prevalence -> obesity
    Total Population -> totpop
    ");
}

#[test]
fn create_column_dict_rejects_six_columns() {
    let file = create_temp_csv(&format!("{KEYS}\n{KEY_LABELS}\n"));

    let result = create_column_dict(file.path());

    assert!(matches!(
        result,
        Err(IngestError::TooFewColumns { found: 6, .. })
    ));
}

#[test]
fn create_column_dict_missing_file() {
    let result = create_column_dict(Path::new("/nonexistent/tracts.csv"));

    assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
}

#[test]
fn header_probe_does_not_require_valid_data_rows() {
    // The third record is ragged; only the first two are read.
    let file = create_temp_csv("a,b\nLabel A,Label B\n1,2,3,4\n");

    let pair = read_header_pair(file.path()).unwrap();

    assert_eq!(pair.names, vec!["a", "b"]);
}

#[test]
fn rename_map_applies_to_loaded_table() {
    let file = create_temp_csv(&format!(
        "{KEYS},TotPop,Pct. Obese\n\
         {KEY_LABELS},Total Population,Obesity\n\
         AL,Autauga,0201,01001020100,2019,ACS,1912,31.2\n"
    ));

    let map = create_column_dict(file.path()).unwrap();
    let df = read_csv_table(file.path()).unwrap();
    let renamed = apply_rename_map(&df, &map).unwrap();

    let names: Vec<&str> = renamed
        .get_column_names()
        .iter()
        .map(|n| n.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "State", "County", "Tract", "GEOID", "Year", "Source", "totpop", "pct_obese"
        ]
    );
    assert_eq!(renamed.height(), 1);

    // The input frame keeps its descriptive labels.
    assert!(df.column("Total Population").is_ok());
}

#[test]
fn rename_map_reports_identifiers_that_normalize_alike() {
    let file = create_temp_csv(&format!(
        "{KEYS},Pct-Obese,pct obese\n\
         {KEY_LABELS},Obese Adults,Obesity\n\
         AL,Autauga,0201,01001020100,2019,ACS,30.1,30.2\n"
    ));

    let map = create_column_dict(file.path()).unwrap();
    assert_eq!(map.get("Obese Adults"), Some("pct_obese"));
    assert_eq!(map.get("Obesity"), Some("pct_obese"));

    let df = read_csv_table(file.path()).unwrap();
    let error = apply_rename_map(&df, &map).unwrap_err();

    assert_eq!(
        error.to_string(),
        "columns Obese Adults, Obesity would all be renamed to `pct_obese`"
    );
}
