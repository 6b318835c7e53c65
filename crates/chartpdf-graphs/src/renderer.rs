//! Chart dispatch and rasterisation.

use crate::charts::{
    AreaChart, BarChart, DashboardChart, DonutChart, HeatmapChart, HistogramChart, LineChart,
    PieChart, ScatterChart, TreemapChart,
};
use crate::kind::ChartKind;
use crate::style::ChartStyle;
use crate::traits::ChartRenderer;
use chartpdf_common::{ChartPdfError, Result};
use chartpdf_table::{NumericColumn, Series, Table};
use image::{DynamicImage, ImageOutputFormat, RgbImage};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::io::Cursor;
use std::time::Instant;
use tracing::{debug, instrument};

/// A rendered chart held as an RGB raster.
#[derive(Debug, Clone)]
pub struct RenderedChart {
    /// Kind that produced the raster.
    pub kind: ChartKind,
    /// Pixels, row-major RGB.
    pub image: RgbImage,
}

impl RenderedChart {
    /// Raster width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Raster height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Encodes the raster as PNG.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(self.image.clone())
            .write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)
            .map_err(|e| ChartPdfError::graph_with_source("Failed to encode chart as PNG", e))?;
        Ok(bytes)
    }
}

/// What a chart kind reads from the table.
enum ChartData {
    Series(Series),
    Columns(Vec<NumericColumn>),
}

impl ChartData {
    fn extract(kind: ChartKind, table: &Table) -> Result<Self> {
        if kind.uses_series() {
            return Ok(Self::Series(table.series()?));
        }
        let columns = table.numeric_columns();
        if columns.is_empty() {
            return Err(ChartPdfError::validation(
                "Heatmap requires at least one numeric column with data",
            ));
        }
        Ok(Self::Columns(columns))
    }
}

/// Renders `kind` from a cleaned table.
///
/// Data problems surface as validation errors before anything is drawn.
#[instrument(skip(table, style), fields(rows = table.len(), columns = table.width()))]
pub fn render_chart(kind: ChartKind, table: &Table, style: &ChartStyle) -> Result<RenderedChart> {
    let started = Instant::now();
    let data = ChartData::extract(kind, table)?;

    let (width, height) = (style.width, style.height);
    let mut buffer = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&style.background)?;
        let body = root.titled(&kind.caption(), style.title_font())?;
        draw_kind(kind, &body, &data, style)?;
        root.present()?;
    }

    let image = RgbImage::from_raw(width, height, buffer)
        .ok_or_else(|| ChartPdfError::graph("Rendered buffer does not match the canvas size"))?;

    debug!(
        %kind,
        width,
        height,
        elapsed_ms = started.elapsed().as_millis(),
        "Chart rendered"
    );

    Ok(RenderedChart { kind, image })
}

fn draw_kind<DB>(kind: ChartKind, area: &DrawingArea<DB, Shift>, data: &ChartData, style: &ChartStyle) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    match (kind, data) {
        (ChartKind::Bar, ChartData::Series(series)) => BarChart.draw(area, series, style),
        (ChartKind::Line, ChartData::Series(series)) => LineChart.draw(area, series, style),
        (ChartKind::Area, ChartData::Series(series)) => AreaChart.draw(area, series, style),
        (ChartKind::Pie, ChartData::Series(series)) => PieChart.draw(area, series, style),
        (ChartKind::Donut, ChartData::Series(series)) => DonutChart.draw(area, series, style),
        (ChartKind::Histogram, ChartData::Series(series)) => HistogramChart.draw(area, series, style),
        (ChartKind::Scatter, ChartData::Series(series)) => ScatterChart.draw(area, series, style),
        (ChartKind::Treemap, ChartData::Series(series)) => TreemapChart.draw(area, series, style),
        (ChartKind::Dashboard, ChartData::Series(series)) => DashboardChart.draw(area, series, style),
        (ChartKind::Heatmap, ChartData::Columns(columns)) => HeatmapChart.draw(area, columns, style),
        (kind, _) => Err(ChartPdfError::graph(format!(
            "No renderer accepts the data extracted for {kind} charts"
        ))),
    }
}
