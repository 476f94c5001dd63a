use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use tabclean_ingest::RenameMap;
use tabclean_transform::NullCount;

use tabclean_cli::types::{CleanResult, StageSummary};

/// Dropped column names listed per stage before eliding the rest.
const DROPPED_PREVIEW: usize = 6;

pub fn print_clean_summary(result: &CleanResult) {
    println!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }
    println!("Rows: {}", result.rows());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Stage"),
        header_cell("Columns in"),
        header_cell("Renamed"),
        header_cell("Dropped"),
        header_cell("Columns out"),
        header_cell("Dropped columns"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for stage in &result.stages {
        table.add_row(vec![
            Cell::new(stage.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(stage.columns_in),
            count_cell(stage.renamed, Color::Green),
            count_cell(stage.dropped.len(), Color::Yellow),
            Cell::new(stage.columns_out),
            dropped_cell(stage),
        ]);
    }
    let final_width = result.stages.last().map_or(0, |stage| stage.columns_out);
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        count_cell(result.dropped_total(), Color::Yellow).add_attribute(Attribute::Bold),
        Cell::new(final_width).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");
}

pub fn print_rename_map(map: &RenameMap) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Label"), header_cell("Column")]);
    apply_table_style(&mut table);
    for (label, identifier) in map.iter() {
        table.add_row(vec![Cell::new(label), Cell::new(identifier).fg(Color::Blue)]);
    }
    println!("{table}");
    println!("{} columns mapped", map.len());
}

pub fn print_null_counts(counts: &[NullCount]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Column"), header_cell("Missing")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for count in counts {
        table.add_row(vec![
            Cell::new(&count.column),
            count_cell(count.na_count as usize, Color::Red),
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    if table.column_count() >= 6 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(16)),
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
            ColumnConstraint::LowerBoundary(Width::Fixed(9)),
            ColumnConstraint::LowerBoundary(Width::Fixed(9)),
            ColumnConstraint::LowerBoundary(Width::Fixed(11)),
            ColumnConstraint::UpperBoundary(Width::Percentage(50)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn dropped_cell(stage: &StageSummary) -> Cell {
    if stage.dropped.is_empty() {
        return dim_cell("-");
    }
    let hidden = stage.dropped.len().saturating_sub(DROPPED_PREVIEW);
    let mut shown: Vec<String> = stage
        .dropped
        .iter()
        .take(DROPPED_PREVIEW)
        .cloned()
        .collect();
    if hidden > 0 {
        shown.push(format!("(+{hidden} more)"));
    }
    Cell::new(shown.join(", "))
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
