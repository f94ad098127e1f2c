use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use comfy_table::{Cell, CellAlignment, Table};
use tracing::debug;

use kenshin_cli::pipeline::{ConvertOptions, RunSummary, convert, default_output_path};
use kenshin_layout::COLUMNS;
use kenshin_model::Profile;
use kenshin_transform::course::COURSES;

use crate::cli::ConvertArgs;
use crate::summary::{align_column, apply_table_style, dim_cell, header_cell};

pub fn run_convert(args: &ConvertArgs) -> Result<RunSummary> {
    let profile = match &args.profile {
        Some(path) => Profile::load(path).context("load profile")?,
        None => Profile::default(),
    };
    let run_date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let output = match &args.output {
        Some(path) => path.clone(),
        None => {
            let dir = args.output_dir.as_deref().unwrap_or(Path::new("."));
            default_output_path(dir, &profile, run_date)
        }
    };
    debug!(output = %output.display(), %run_date, "resolved run options");

    let options = ConvertOptions {
        input: args.input.clone(),
        output,
        issue_log: args.issue_log.clone(),
        profile,
        run_date,
    };
    convert(&options)
}

pub fn run_columns() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Title"), header_cell("Rule")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, column) in COLUMNS.iter().enumerate() {
        let rule = column.describe();
        let rule = if rule.is_empty() {
            dim_cell("blank")
        } else {
            Cell::new(rule)
        };
        table.add_row(vec![Cell::new(index + 1), Cell::new(column.title), rule]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_courses() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Name"),
        header_cell("Age"),
        header_cell("Destination"),
    ]);
    apply_table_style(&mut table);
    for course in COURSES {
        let names = course.names.join(" / ");
        if course.brackets.is_empty() {
            table.add_row(vec![
                Cell::new(course.code),
                Cell::new(&names),
                dim_cell("-"),
                dim_cell("unregistered"),
            ]);
            continue;
        }
        for bracket in course.brackets {
            let destination = format!(
                "{} {}",
                bracket.destination.code, bracket.destination.name
            );
            table.add_row(vec![
                Cell::new(course.code),
                Cell::new(&names),
                Cell::new(bracket.age),
                Cell::new(destination),
            ]);
        }
    }
    println!("{table}");
    Ok(())
}
