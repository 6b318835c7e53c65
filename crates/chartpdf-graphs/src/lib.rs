//! # ChartPDF Graphs
//!
//! Chart rendering for uploaded tables.
//!
//! [`render_chart`] turns a [`ChartKind`] and a cleaned table into an RGB
//! raster using plotters. Each chart kind lives in its own module under
//! [`charts`] and implements [`ChartRenderer`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod charts;
pub mod kind;
pub mod layout;
pub mod renderer;
pub mod style;
pub mod traits;
pub mod utils;

pub use kind::*;
pub use layout::*;
pub use renderer::*;
pub use style::*;
pub use traits::*;
