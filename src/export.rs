//! XLSX workbook export: raw records plus per-category totals.

use crate::error::Result;
use crate::model::{Record, COLUMNS};
use crate::report;
use anyhow::Context;
use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Workbook, XlsxError};
use std::path::Path;

/// Sheet holding the verbatim records, store column order.
const EXPENSES_SHEET: &str = "Expenses";

/// Sheet holding one row per distinct category with its summed amount.
const SUMMARY_SHEET: &str = "Summary";

/// Writes `records` to a two-sheet workbook at `path`.
pub(crate) fn write(records: &[Record], path: &Path) -> Result<()> {
    write_workbook(records, path)
        .with_context(|| format!("unable to write workbook to {}", path.display()))?;
    Ok(())
}

fn write_workbook(records: &[Record], path: &Path) -> std::result::Result<(), XlsxError> {
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    sheet.set_name(EXPENSES_SHEET)?;
    for (col, header) in COLUMNS.iter().enumerate() {
        sheet.write_string(0, col as u16, *header)?;
    }
    for (ix, record) in records.iter().enumerate() {
        let row = ix as u32 + 1;
        sheet.write_string(row, 0, &record.date)?;
        sheet.write_string(row, 1, &record.category)?;
        sheet.write_number(row, 2, record.amount.to_f64())?;
        sheet.write_string(row, 3, &record.description)?;
    }

    let sheet = workbook.add_worksheet();
    sheet.set_name(SUMMARY_SHEET)?;
    sheet.write_string(0, 0, "Category")?;
    sheet.write_string(0, 1, "Amount")?;
    for (ix, (category, total)) in report::category_totals(records).iter().enumerate() {
        let row = ix as u32 + 1;
        sheet.write_string(row, 0, category)?;
        sheet.write_number(row, 1, total.to_f64().unwrap_or_default())?;
    }

    workbook.save(path)
}
