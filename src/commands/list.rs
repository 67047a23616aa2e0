use crate::commands::Out;
use crate::model::{Record, COLUMNS};
use crate::{Config, Result};
use std::fmt::Write;

/// Reads every record and prints them as an aligned table, oldest
/// first. Fails with `StoreMissing` when no store exists yet.
pub async fn list(config: Config) -> Result<Out<Vec<Record>>> {
    let records = config.store().read_all()?;
    println!("{}", render_table(&records));
    Ok(Out::new(
        format!("Listed {} expense(s)", records.len()),
        records,
    ))
}

/// Renders records as a column-aligned text table with a header row.
fn render_table(records: &[Record]) -> String {
    let rows: Vec<[String; 4]> = records
        .iter()
        .map(|r| {
            [
                r.date.clone(),
                r.category.clone(),
                r.amount.to_string(),
                r.description.clone(),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = COLUMNS.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let write_row = |cells: [&str; 4], out: &mut String| {
        for (i, cell) in cells.iter().enumerate() {
            let width = widths[i];
            let _ = write!(out, "{cell:<width$}");
            if i < cells.len() - 1 {
                out.push_str("  ");
            }
        }
        out.push('\n');
    };

    write_row(COLUMNS, &mut out);
    for row in &rows {
        write_row(
            [
                row[0].as_str(),
                row[1].as_str(),
                row[2].as_str(),
                row[3].as_str(),
            ],
            &mut out,
        );
    }
    out
}
