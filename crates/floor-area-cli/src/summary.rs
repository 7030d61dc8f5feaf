use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use floor_area_cli::types::{PairStatus, PairSummary, RunResult};

pub fn print_summary(result: &RunResult) {
    println!("Input: {}", result.input_dir.display());
    if result.dry_run {
        println!("Output: none (dry run)");
    } else {
        println!("Output: {}", result.output_dir.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Key"),
        header_cell("Econ key"),
        header_cell("Scenario"),
        header_cell("Rows"),
        header_cell("Timesteps"),
        header_cell("Districts"),
        header_cell("Output"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Center);

    let mut total_rows = 0usize;
    for pair in &result.pairs {
        total_rows += pair.summary.rows;
        table.add_row(pair_row(pair));
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(format!("{} pairs", result.pairs.len()))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_rows).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    println!("{table}");

    if !result.errors.is_empty() {
        eprintln!("Errors:");
        for error in &result.errors {
            eprintln!("- {error}");
        }
    }
}

fn pair_row(pair: &PairSummary) -> Vec<Cell> {
    let failed = matches!(pair.status, PairStatus::Failed(_));
    let count = |value: usize| {
        if failed {
            dim_cell("-")
        } else {
            Cell::new(value)
        }
    };
    vec![
        Cell::new(&pair.key)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        Cell::new(&pair.econ_key),
        Cell::new(&pair.scenario),
        count(pair.summary.rows),
        count(pair.summary.timesteps),
        count(pair.summary.districts),
        status_cell(&pair.status),
    ]
}

fn status_cell(status: &PairStatus) -> Cell {
    match status {
        PairStatus::Written(_) => Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        PairStatus::Estimated => dim_cell("dry run"),
        PairStatus::Failed(_) => Cell::new("✗")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

pub fn apply_table_style(table: &mut Table) {
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
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

pub fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
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
