use super::{check_header, malformed};
use crate::errors::AppResult;
use crate::models::{COLUMNS, EventRecord, Table};
use std::fs;
use std::path::Path;

pub(super) fn read(path: &Path) -> AppResult<Table> {
    let file = fs::File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(file);

    let headers = rdr.headers().map_err(|e| malformed(path, e.to_string()))?;
    let found: Vec<&str> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| if i == 0 { h.trim_start_matches('\u{feff}') } else { h })
        .collect();
    check_header(path, &found)?;

    let mut rows = Vec::new();
    for result in rdr.deserialize::<EventRecord>() {
        let record = result.map_err(|e| malformed(path, e.to_string()))?;
        rows.push(record);
    }

    Ok(Table::new(rows))
}

pub(super) fn write(path: &Path, table: &Table) -> AppResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    wtr.write_record(COLUMNS)?;
    for r in table.rows() {
        wtr.write_record([&r.sole, &r.start, &r.finish, &r.event, &r.key_point])?;
    }

    wtr.flush()?;
    Ok(())
}
