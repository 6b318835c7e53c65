//! Delimited text ingestion.

use crate::cell::Cell;
use crate::table::Table;
use chartpdf_common::{ChartPdfError, Result};
use csv::{ReaderBuilder, Trim};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Reads CSV bytes whose first record is the header row.
pub(crate) fn read_csv(bytes: &[u8]) -> Result<Table> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(bytes);

    let headers: Vec<String> = reader
        .byte_headers()
        .map_err(|e| ChartPdfError::parse_with_source("Failed to read CSV headers", e))?
        .iter()
        .map(|field| String::from_utf8_lossy(field).into_owned())
        .collect();

    if headers.iter().all(String::is_empty) {
        return Err(ChartPdfError::parse("CSV file has no header row"));
    }

    let width = headers.len();
    let mut rows = Vec::new();
    for (index, record) in reader.byte_records().enumerate() {
        let record = record
            .map_err(|e| ChartPdfError::parse_with_source("Failed to parse CSV row", e))?;

        if record.len() > width {
            // Line numbers are 1-based and the header occupies line 1.
            return Err(ChartPdfError::parse(format!(
                "Expected {width} fields in line {}, saw {}",
                index + 2,
                record.len()
            )));
        }

        let mut row: Vec<Cell> = record
            .iter()
            .map(|field| Cell::parse(&String::from_utf8_lossy(field)))
            .collect();
        row.resize(width, Cell::Empty);
        rows.push(row);
    }

    Ok(Table::new(headers, rows))
}
