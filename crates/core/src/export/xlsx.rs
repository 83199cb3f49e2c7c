//! Single-sheet XLSX workbook rendering

use hostatlas_domain::constants::EXPORT_HEADERS;
use hostatlas_domain::{HostAtlasError, Result};
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};

use super::ExportRow;

const ID_COLUMNS: [u16; 2] = [0, 4];

pub(super) fn render(rows: &[ExportRow]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    write_sheet(sheet, rows).map_err(workbook_error)?;
    workbook.save_to_buffer().map_err(workbook_error)
}

fn write_sheet(sheet: &mut Worksheet, rows: &[ExportRow]) -> std::result::Result<(), XlsxError> {
    for (col, header) in (0_u16..).zip(EXPORT_HEADERS) {
        sheet.write_string(0, col, header)?;
    }

    for (line, row) in (1_u32..).zip(rows) {
        for (col, cell) in (0_u16..).zip(row.cells()) {
            write_cell(sheet, line, col, cell)?;
        }
    }
    Ok(())
}

/// Numeric ids are written as numbers; blanks stay empty cells.
fn write_cell(
    sheet: &mut Worksheet,
    line: u32,
    col: u16,
    cell: &str,
) -> std::result::Result<(), XlsxError> {
    if cell.is_empty() {
        return Ok(());
    }
    match cell.parse::<i64>() {
        Ok(number) if ID_COLUMNS.contains(&col) => {
            sheet.write_number(line, col, number as f64)?;
        }
        _ => {
            sheet.write_string(line, col, cell)?;
        }
    }
    Ok(())
}

fn workbook_error(err: XlsxError) -> HostAtlasError {
    HostAtlasError::Internal(format!("failed to build workbook: {err}"))
}
