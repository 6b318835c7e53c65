//! # ChartPDF Common
//!
//! Shared error types, logging setup, and utilities for ChartPDF.
//!
//! This crate provides the foundational types used across all other crates
//! in the ChartPDF workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::*;
pub use logging::*;
pub use utils::*;
