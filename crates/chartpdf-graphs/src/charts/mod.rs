//! One renderer per chart kind, plus the cartesian scaffolding they share.

mod area;
mod bar;
mod dashboard;
mod heatmap;
mod histogram;
mod line;
mod pie;
mod scatter;
mod treemap;

pub use area::AreaChart;
pub use bar::BarChart;
pub use dashboard::DashboardChart;
pub use heatmap::HeatmapChart;
pub use histogram::HistogramChart;
pub use line::LineChart;
pub use pie::{draw_pie_without_shares, DonutChart, PieChart};
pub use scatter::ScatterChart;
pub use treemap::TreemapChart;

use crate::style::ChartStyle;
use crate::utils::{category_label, category_ticks, format_tick, value_axis};
use chartpdf_common::{ChartPdfError, Result};
use chartpdf_table::Series;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;

/// Chart context with value axes on both sides.
pub(crate) type XyChart<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Inner margin around every chart, in pixels.
pub(crate) const CHART_MARGIN: u32 = 10;

pub(crate) fn ensure_points(series: &Series) -> Result<()> {
    if series.is_empty() {
        return Err(ChartPdfError::validation("No complete rows to chart"));
    }
    Ok(())
}

/// Space reserved for tick labels plus an axis description.
pub(crate) fn label_area(style: &ChartStyle) -> u32 {
    style.label_size * 3
}

/// Horizontal range: numeric labels when present, otherwise one slot per row.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn x_axis(series: &Series) -> Range<f64> {
    series.x_numeric.as_ref().map_or_else(
        || -0.5..(series.len() as f64 - 0.5),
        |xs| value_axis(xs, false),
    )
}

/// Builds a value-by-value chart over `series` and draws its mesh.
pub(crate) fn xy_chart<'a, DB>(
    area: &'a DrawingArea<DB, Shift>,
    series: &Series,
    y_range: Range<f64>,
    style: &ChartStyle,
) -> Result<XyChart<'a, DB>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let mut chart = ChartBuilder::on(area)
        .margin(CHART_MARGIN)
        .x_label_area_size(label_area(style))
        .y_label_area_size(label_area(style))
        .build_cartesian_2d(x_axis(series), y_range)?;

    let numeric = |value: &f64| format_tick(*value);
    let categorical = |position: &f64| category_label(&series.labels, *position);

    {
        let mut mesh = chart.configure_mesh();
        mesh.x_desc(series.x_name.as_str())
            .y_desc(series.y_name.as_str())
            .label_style(style.label_font())
            .axis_desc_style(style.label_font())
            .y_label_formatter(&numeric);
        if series.has_numeric_x() {
            mesh.x_label_formatter(&numeric);
        } else {
            mesh.x_labels(category_ticks(series.len()))
                .x_label_formatter(&categorical)
                .disable_x_mesh();
        }
        mesh.draw()?;
    }

    Ok(chart)
}
