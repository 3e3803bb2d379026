// src/store/xlsx.rs

use super::{check_header, malformed};
use crate::errors::{AppError, AppResult};
use crate::export::excel_date::date_to_excel_serial;
use crate::models::{COLUMNS, EventRecord, Table};
use crate::utils::date::{ISO_DATE, to_iso};
use calamine::{Data, Reader, Xlsx, XlsxError as ReadError, open_workbook};
use chrono::{NaiveDate, NaiveTime};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError as WriteError};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Spreadsheet tools name the first sheet this way; only its position matters on read.
const SHEET_NAME: &str = "Sheet1";

const STORE_DATE_FORMAT: &str = "yyyy-mm-dd";

/// First serial Excel maps to a real calendar day (1900-03-01).
/// Earlier dates go through the 1900 leap-year bug, so they are kept as text.
const FIRST_SAFE_SERIAL: f64 = 61.0;

/// Read the first worksheet: header row, then one record per non-empty row.
pub(super) fn read(path: &Path) -> AppResult<Table> {
    let mut workbook: Xlsx<BufReader<File>> = open_workbook(path).map_err(|e| match e {
        ReadError::Io(e) => AppError::Io(e),
        other => malformed(path, other.to_string()),
    })?;

    let range = match workbook.worksheet_range_at(0) {
        Some(r) => r.map_err(|e| malformed(path, e.to_string()))?,
        None => return Err(malformed(path, "workbook has no worksheet".to_string())),
    };

    let mut rows = range.rows();

    let mut header: Vec<String> = rows
        .next()
        .map(|r| r.iter().map(cell_text).collect())
        .unwrap_or_default();
    while header.last().is_some_and(|h| h.is_empty()) {
        header.pop();
    }
    let found: Vec<&str> = header.iter().map(String::as_str).collect();
    check_header(path, &found)?;

    let mut records = Vec::new();
    for (i, row) in rows.enumerate() {
        let cells: Vec<String> = row.iter().map(cell_text).collect();

        // blank rows are formatting leftovers, not records
        if cells.iter().all(|c| c.is_empty()) {
            continue;
        }
        if cells.iter().skip(COLUMNS.len()).any(|c| !c.is_empty()) {
            return Err(malformed(
                path,
                format!("row {} has more than {} columns", i + 1, COLUMNS.len()),
            ));
        }

        let field = |n: usize| cells.get(n).map(String::as_str).unwrap_or("");
        records.push(EventRecord::new(
            field(0),
            field(1),
            field(2),
            field(3),
            field(4),
        ));
    }

    Ok(Table::new(records))
}

/// Rewrite the workbook with a single sheet holding the whole table.
pub(super) fn write(path: &Path, table: &Table) -> AppResult<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME).map_err(write_error)?;

    let header_format = Format::new().set_bold();
    let date_format = Format::new().set_num_format(STORE_DATE_FORMAT);

    for (col, header) in COLUMNS.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(write_error)?;
    }

    for (i, r) in table.rows().iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet.write(row, 0, r.sole.as_str()).map_err(write_error)?;
        write_date_cell(worksheet, row, 1, &r.start, &date_format)?;
        write_date_cell(worksheet, row, 2, &r.finish, &date_format)?;
        worksheet.write(row, 3, r.event.as_str()).map_err(write_error)?;
        worksheet.write(row, 4, r.key_point.as_str()).map_err(write_error)?;
    }

    workbook.save(path).map_err(write_error)?;
    Ok(())
}

/// Canonical ISO dates become real date cells; any other text is written as is,
/// so a load/save cycle never changes what the user typed.
fn write_date_cell(
    ws: &mut Worksheet,
    row: u32,
    col: u16,
    text: &str,
    fmt: &Format,
) -> AppResult<()> {
    let serial = NaiveDate::parse_from_str(text, ISO_DATE)
        .ok()
        .filter(|d| to_iso(d) == text)
        .map(|d| date_to_excel_serial(&d))
        .filter(|s| *s >= FIRST_SAFE_SERIAL);

    match serial {
        Some(s) => ws.write_with_format(row, col, s, fmt),
        None => ws.write(row, col, text),
    }
    .map_err(write_error)?;
    Ok(())
}

/// Text form of a cell; date cells come back as ISO (with time when not midnight).
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::DateTime(dt) if dt.is_datetime() => match dt.as_datetime() {
            Some(ndt) if ndt.time() == NaiveTime::MIN => to_iso(&ndt.date()),
            Some(ndt) => ndt.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => cell.to_string(),
        },
        other => other.to_string(),
    }
}

fn write_error(e: WriteError) -> AppError {
    match e {
        WriteError::IoError(e) => AppError::Io(e),
        other => AppError::Other(format!("cannot write workbook: {other}")),
    }
}
