//! Workbook ingestion via calamine.

use crate::cell::Cell;
use crate::format::SourceFormat;
use crate::table::Table;
use calamine::{Data, Ods, Range, Reader, Xls, Xlsb, Xlsx};
use chartpdf_common::{ChartPdfError, Result};
use std::fmt::Display;
use std::io::Cursor;
use tracing::debug;

/// Reads the first worksheet of a workbook; its first row is the header row.
pub(crate) fn read_spreadsheet(bytes: &[u8], format: SourceFormat) -> Result<Table> {
    let cursor = Cursor::new(bytes);
    let range = match format {
        SourceFormat::Xlsx => first_sheet::<Xlsx<_>>(cursor)?,
        SourceFormat::Xlsb => first_sheet::<Xlsb<_>>(cursor)?,
        SourceFormat::Xls => first_sheet::<Xls<_>>(cursor)?,
        SourceFormat::Ods => first_sheet::<Ods<_>>(cursor)?,
        SourceFormat::Csv => {
            return Err(ChartPdfError::parse("CSV input passed to the workbook reader"));
        }
    };

    debug!(
        format = %format,
        rows = range.height(),
        columns = range.width(),
        "Read first worksheet"
    );

    Ok(table_from_range(&range))
}

fn first_sheet<'a, R>(cursor: Cursor<&'a [u8]>) -> Result<Range<Data>>
where
    R: Reader<Cursor<&'a [u8]>>,
    R::Error: Display,
{
    let mut workbook =
        R::new(cursor).map_err(|e| ChartPdfError::parse(format!("Failed to open workbook: {e}")))?;

    workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ChartPdfError::parse("Workbook has no worksheets"))?
        .map_err(|e| ChartPdfError::parse(format!("Failed to read first worksheet: {e}")))
}

fn table_from_range(range: &Range<Data>) -> Table {
    let mut rows = range.rows();

    let headers: Vec<String> = rows
        .next()
        .map(|header| {
            header
                .iter()
                .enumerate()
                .map(|(index, cell)| match convert(cell) {
                    Cell::Empty => format!("Unnamed: {index}"),
                    other => other.to_string(),
                })
                .collect()
        })
        .unwrap_or_default();

    let rows = rows
        .map(|row| row.iter().map(convert).collect())
        .collect();

    Table::new(headers, rows)
}

#[allow(clippy::cast_precision_loss)]
fn convert(cell: &Data) -> Cell {
    match cell {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::Int(value) => Cell::Number(*value as f64),
        Data::Float(value) => Cell::from_f64(*value),
        Data::Bool(value) => Cell::Bool(*value),
        Data::String(text) => Cell::parse(text),
        other => Cell::Text(other.to_string()),
    }
}
