//! Excel export for the overdue report

use crate::error::{Error, Result};
use rust_xlsxwriter::{Format, Workbook};
use std::path::{Path, PathBuf};

/// Sheet and header labels, as the office expects them
pub const SHEET_NAME: &str = "Просроченные";
pub const TYPE_HEADER: &str = "Вид мебели";
pub const COUNT_HEADER: &str = "Количество просроченных единиц";

/// Write the overdue report workbook
///
/// One sheet with a bold header row, then one row per furniture type in the
/// given order (callers pass rows already sorted by count descending).
/// Returns the output path on success.
pub fn write_overdue_report(rows: &[(String, u64)], output_path: &Path) -> Result<PathBuf> {
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    sheet
        .set_name(SHEET_NAME)
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();
    sheet
        .write_string_with_format(0, 0, TYPE_HEADER, &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_string_with_format(0, 1, COUNT_HEADER, &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;

    for (row_idx, (kind, count)) in rows.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        sheet
            .write_string(row, 0, kind.as_str())
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 1, *count as f64)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    sheet
        .set_column_width(0, 24)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(1, 34)
        .map_err(|e| Error::Excel(e.to_string()))?;

    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(output_path.to_path_buf())
}
