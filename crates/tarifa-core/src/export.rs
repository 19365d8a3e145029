use crate::error::TarifaError;
use crate::model::{Cell, RecordSet};
use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};
use tracing::info;

pub const SHEET_NAME: &str = "Sheet1";

/// Write the record set as a single-sheet xlsx workbook.
///
/// The first row holds the canonical column names; `None` fields are left
/// as blank cells. Missing parent directories are created.
pub fn write_xlsx(records: &RecordSet, out_path: &Path) -> Result<PathBuf, TarifaError> {
    if let Some(parent) = out_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, name) in records.columns().iter().enumerate() {
        sheet.write_string(0, col as u16, *name)?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = i as u32 + 1;
        for (col, cell) in record.cells().into_iter().enumerate() {
            let col = col as u16;
            match cell {
                Cell::Empty => {}
                Cell::Text(s) => {
                    sheet.write_string(row, col, s)?;
                }
                Cell::Number(n) => {
                    sheet.write_number(row, col, n)?;
                }
            }
        }
    }

    workbook.save(out_path)?;
    info!(path = %out_path.display(), rows = records.len(), "wrote workbook");

    Ok(out_path.to_path_buf())
}
