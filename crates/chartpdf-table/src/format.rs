//! Upload format detection.

use chartpdf_common::file_extension;
use std::fmt;

/// Container format of an uploaded table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Comma separated values.
    Csv,
    /// Office Open XML workbook (`.xlsx`, `.xlsm`).
    Xlsx,
    /// Binary Office workbook (`.xlsb`).
    Xlsb,
    /// Legacy binary workbook.
    Xls,
    /// OpenDocument spreadsheet.
    Ods,
}

impl SourceFormat {
    /// Detects the format from the uploaded file name.
    ///
    /// Only a `.csv` extension selects the CSV reader; every other name is
    /// read as a workbook, defaulting to `.xlsx` when the extension is unknown.
    pub fn from_file_name(file_name: &str) -> Self {
        match file_extension(file_name).as_deref() {
            Some("csv") => Self::Csv,
            Some("xls") => Self::Xls,
            Some("xlsb") => Self::Xlsb,
            Some("ods") => Self::Ods,
            _ => Self::Xlsx,
        }
    }

    /// Whether the format is a workbook rather than delimited text.
    pub const fn is_spreadsheet(self) -> bool {
        !matches!(self, Self::Csv)
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
            Self::Xlsb => "xlsb",
            Self::Xls => "xls",
            Self::Ods => "ods",
        };
        f.write_str(name)
    }
}
