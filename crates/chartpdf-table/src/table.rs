//! In-memory table and cleaning.

use crate::cell::Cell;
use crate::csv_reader::read_csv;
use crate::format::SourceFormat;
use crate::series::{NumericColumn, Series};
use crate::spreadsheet::read_spreadsheet;
use chartpdf_common::{ChartPdfError, Result};
use tracing::{debug, info};

/// A header row plus rectangular data rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Builds a table, padding or truncating rows to the header width.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, Cell::Empty);
                row
            })
            .collect();
        Self { headers, rows }
    }

    /// Reads an upload, picking the reader from the file name.
    pub fn load(file_name: &str, bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(ChartPdfError::validation_field("Uploaded file is empty", "file"));
        }

        let format = SourceFormat::from_file_name(file_name);
        let table = if format.is_spreadsheet() {
            Self::from_spreadsheet(bytes, format)?
        } else {
            Self::from_csv(bytes)?
        };

        info!(
            file_name,
            format = %format,
            rows = table.len(),
            columns = table.width(),
            "Loaded table"
        );
        Ok(table)
    }

    /// Reads CSV bytes.
    pub fn from_csv(bytes: &[u8]) -> Result<Self> {
        read_csv(bytes)
    }

    /// Reads the first worksheet of a workbook.
    pub fn from_spreadsheet(bytes: &[u8], format: SourceFormat) -> Result<Self> {
        read_spreadsheet(bytes, format)
    }

    /// Column names.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether there are no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Removes every row with a missing cell; returns how many were dropped.
    pub fn drop_incomplete(&mut self) -> usize {
        let before = self.rows.len();
        self.rows.retain(|row| !row.iter().any(Cell::is_empty));
        let dropped = before - self.rows.len();
        if dropped > 0 {
            debug!(dropped, remaining = self.rows.len(), "Dropped incomplete rows");
        }
        dropped
    }

    /// Consuming variant of [`Table::drop_incomplete`].
    #[must_use]
    pub fn cleaned(mut self) -> Self {
        self.drop_incomplete();
        self
    }

    /// Cells of one column, top to bottom.
    pub fn column(&self, index: usize) -> impl Iterator<Item = &Cell> + '_ {
        self.rows.iter().filter_map(move |row| row.get(index))
    }

    /// Every column whose cells are all numeric, in table order.
    pub fn numeric_columns(&self) -> Vec<NumericColumn> {
        if self.is_empty() {
            return Vec::new();
        }

        self.headers
            .iter()
            .enumerate()
            .filter_map(|(index, name)| {
                let values: Option<Vec<f64>> = self
                    .column(index)
                    .map(|cell| match cell {
                        Cell::Number(value) => Some(*value),
                        _ => None,
                    })
                    .collect();
                values.map(|values| NumericColumn {
                    name: name.clone(),
                    values,
                })
            })
            .collect()
    }

    /// The first two columns as labels and numeric values.
    pub fn series(&self) -> Result<Series> {
        if self.width() < 2 {
            return Err(ChartPdfError::validation(format!(
                "At least two columns are required, found {}",
                self.width()
            )));
        }
        if self.is_empty() {
            return Err(ChartPdfError::validation("No complete rows to chart"));
        }

        let x_name = self.headers[0].clone();
        let y_name = self.headers[1].clone();

        let labels: Vec<String> = self.column(0).map(ToString::to_string).collect();

        let x_numeric: Option<Vec<f64>> = self
            .column(0)
            .map(|cell| match cell {
                Cell::Number(value) => Some(*value),
                _ => None,
            })
            .collect();

        let values = self
            .column(1)
            .enumerate()
            .map(|(index, cell)| {
                cell.as_number().ok_or_else(|| {
                    ChartPdfError::validation_field(
                        format!(
                            "Value '{cell}' in column '{y_name}' at row {} is not numeric",
                            index + 1
                        ),
                        y_name.clone(),
                    )
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        Ok(Series {
            x_name,
            y_name,
            labels,
            values,
            x_numeric,
        })
    }
}
