//! # ChartPDF Server
//!
//! HTTP front end: accepts a table upload and a chart tag on
//! `POST /generate` and answers with a one-page PDF of the chart.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod error;
pub mod handler;
pub mod pipeline;
pub mod state;
pub mod storage;

pub use app::create_router;
pub use error::{ApiError, ApiResult};
pub use pipeline::{ChartPipeline, GeneratedChart};
pub use state::AppState;
pub use storage::ArtifactStore;
