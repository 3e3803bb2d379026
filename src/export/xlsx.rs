// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::{EXCEL_DATE_FORMAT, date_to_excel_serial};
use crate::export::model::get_headers;
use crate::export::notify_export_success;
use crate::models::TimelineRow;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// "dd-mmmm-yyyy" is at most "30-September-2024".
const DATE_CELL_WIDTH: usize = 17;

/// Export XLSX con styling, date vere e auto-larghezza colonne.
pub(crate) fn export_xlsx(rows: &[TimelineRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Timeline").map_err(to_app_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_app_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_app_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Scrittura righe
    // ---------------------------
    for (row_index, r) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 { band1 } else { band2 };

        let text = cell_format(band);
        let date = cell_format(band).set_num_format(EXCEL_DATE_FORMAT);
        let flag = cell_format(band).set_align(FormatAlign::Center);

        write_text(worksheet, row, 0, &r.sole, &text, &mut col_widths)?;
        write_date(worksheet, row, 1, &r.start, &date, &mut col_widths)?;
        write_date(worksheet, row, 2, &r.finish, &date, &mut col_widths)?;
        write_text(worksheet, row, 3, &r.event, &text, &mut col_widths)?;
        write_text(worksheet, row, 4, &r.key_point, &text, &mut col_widths)?;
        worksheet
            .write_with_format(row, 5, r.is_milestone, &flag)
            .map_err(to_app_error)?;
        write_date(worksheet, row, 6, &r.finish_max, &date, &mut col_widths)?;
    }

    // ---------------------------
    // Set column widths
    // ---------------------------
    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    workbook.save(path).map_err(to_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn cell_format(bg: Color) -> Format {
    Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

fn write_text(
    ws: &mut Worksheet,
    row: u32,
    col: u16,
    s: &str,
    fmt: &Format,
    widths: &mut [usize],
) -> AppResult<()> {
    ws.write_with_format(row, col, s, fmt)
        .map_err(to_app_error)?;
    widths[col as usize] = widths[col as usize].max(UnicodeWidthStr::width(s));
    Ok(())
}

fn write_date(
    ws: &mut Worksheet,
    row: u32,
    col: u16,
    d: &chrono::NaiveDate,
    fmt: &Format,
    widths: &mut [usize],
) -> AppResult<()> {
    ws.write_with_format(row, col, date_to_excel_serial(d), fmt)
        .map_err(to_app_error)?;
    widths[col as usize] = widths[col as usize].max(DATE_CELL_WIDTH);
    Ok(())
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
