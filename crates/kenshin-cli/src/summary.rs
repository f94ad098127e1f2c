use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use kenshin_cli::pipeline::RunSummary;
use kenshin_model::ErrorKind;

pub fn print_summary(summary: &RunSummary) {
    println!("Input: {}", summary.input.display());
    println!("Output: {}", summary.output.display());
    println!("Issue log: {}", summary.issue_log.display());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Records"),
        header_cell("Issues"),
        header_cell("Unmappable chars"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 0..3 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(summary.records).add_attribute(Attribute::Bold),
        count_cell(summary.issue_count(), Color::Yellow),
        count_cell(summary.unmappable, Color::Red),
    ]);
    println!("{table}");
    print_issue_table(summary);
}

fn print_issue_table(summary: &RunSummary) {
    if !summary.has_issues() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Problem"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for kind in ErrorKind::ALL {
        let count = summary.issues.get(&kind).copied().unwrap_or(0);
        if count == 0 {
            continue;
        }
        table.add_row(vec![Cell::new(kind), count_cell(count, Color::Yellow)]);
    }
    println!();
    println!("Issues (details in {}):", summary.issue_log.display());
    println!("{table}");
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
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
        .set_content_arrangement(ContentArrangement::Dynamic);
}

pub fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
