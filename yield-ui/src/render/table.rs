//! Text rendering of the table view.

use yield_core::models::YieldSchedule;
use yield_core::views::{ColumnAlign, TableColumn, TableView};

use crate::utils::format_number;

/// Renders the schedule as an aligned text table.
///
/// Columns follow the table view contract: Period, then Price and Revenue
/// right-aligned; rows in natural schedule order. Column widths grow with
/// the widest cell, two spaces between columns.
pub fn render_table(schedule: &YieldSchedule) -> String {
    let view = TableView::new(schedule);
    let columns = view.columns();

    let rows: Vec<[String; 3]> = view
        .rows()
        .map(|(period, price, revenue)| {
            [
                period.to_string(),
                format_number(price),
                format_number(revenue),
            ]
        })
        .collect();

    let mut widths = [0usize; 3];
    for (i, column) in columns.iter().enumerate() {
        widths[i] = column.header.len();
    }
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let mut out = String::new();
    push_row(
        &mut out,
        [columns[0].header, columns[1].header, columns[2].header],
        &widths,
        columns,
    );
    for row in &rows {
        push_row(
            &mut out,
            [row[0].as_str(), row[1].as_str(), row[2].as_str()],
            &widths,
            columns,
        );
    }
    out
}

fn push_row(
    out: &mut String,
    cells: [&str; 3],
    widths: &[usize; 3],
    columns: &[TableColumn; 3],
) {
    let line: Vec<String> = cells
        .iter()
        .zip(columns.iter().zip(widths.iter()))
        .map(|(cell, (column, width))| pad(cell, *width, column.align))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

fn pad(text: &str, width: usize, align: ColumnAlign) -> String {
    match align {
        ColumnAlign::Left => format!("{text:<width$}"),
        ColumnAlign::Right => format!("{text:>width$}"),
    }
}
