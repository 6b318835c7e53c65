//! # ChartPDF PDF
//!
//! Places a rendered chart on a single PDF page.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod composer;

pub use composer::*;
