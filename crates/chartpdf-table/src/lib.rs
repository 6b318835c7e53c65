//! # ChartPDF Table
//!
//! Reads uploaded CSV and spreadsheet files into an in-memory [`Table`],
//! drops incomplete rows, and extracts the two-column [`Series`] that every
//! chart is drawn from.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cell;
pub mod format;
pub mod series;
pub mod table;

mod csv_reader;
mod spreadsheet;

pub use cell::*;
pub use format::*;
pub use series::*;
pub use table::*;
