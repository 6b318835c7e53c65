//! Upload to PDF: parse, clean, render, compose.

use chartpdf_common::Result;
use chartpdf_config::Config;
use chartpdf_graphs::{render_chart, ChartKind, ChartStyle};
use chartpdf_pdf::{PdfComposer, PdfOptions};
use chartpdf_table::Table;
use tracing::{info, instrument};

/// Everything produced for one request.
#[derive(Debug, Clone)]
pub struct GeneratedChart {
    /// The composed document.
    pub pdf: Vec<u8>,
    /// PNG of the chart, when requested.
    pub png: Option<Vec<u8>>,
    /// Rows charted after cleaning.
    pub rows: usize,
    /// Rows dropped for missing cells.
    pub dropped: usize,
}

/// Synchronous chart pipeline; run it on a blocking thread.
#[derive(Debug, Clone, Default)]
pub struct ChartPipeline {
    style: ChartStyle,
    composer: PdfComposer,
}

impl ChartPipeline {
    /// Creates a pipeline with explicit styling and page settings.
    pub const fn new(style: ChartStyle, composer: PdfComposer) -> Self {
        Self { style, composer }
    }

    /// Creates a pipeline from the `render` and `pdf` configuration sections.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            ChartStyle::from(&config.render),
            PdfComposer::new(PdfOptions::from(&config.pdf)),
        )
    }

    /// Turns an uploaded file into a one-page chart PDF.
    ///
    /// With `keep_png` the rendered raster is also returned as PNG.
    #[instrument(skip(self, bytes), fields(bytes = bytes.len()))]
    pub fn run(&self, kind: ChartKind, file_name: &str, bytes: &[u8], keep_png: bool) -> Result<GeneratedChart> {
        let mut table = Table::load(file_name, bytes)?;
        let dropped = table.drop_incomplete();

        let chart = render_chart(kind, &table, &self.style)?;
        let png = if keep_png { Some(chart.to_png()?) } else { None };
        let pdf = self.composer.compose(&chart)?;

        info!(%kind, rows = table.len(), dropped, pdf_bytes = pdf.len(), "Chart generated");

        Ok(GeneratedChart {
            pdf,
            png,
            rows: table.len(),
            dropped,
        })
    }
}
