//! Histogram of the value column.

use super::{ensure_points, label_area, CHART_MARGIN};
use crate::kind::ChartKind;
use crate::style::ChartStyle;
use crate::traits::ChartRenderer;
use crate::utils::{format_tick, histogram_bins, padded_range};
use chartpdf_common::Result;
use chartpdf_table::Series;
use plotters::coord::Shift;
use plotters::prelude::*;

/// Renders equal-width bins over the value range.
#[derive(Debug, Clone, Copy, Default)]
pub struct HistogramChart;

impl ChartRenderer for HistogramChart {
    type Data = Series;

    fn kind(&self) -> ChartKind {
        ChartKind::Histogram
    }

    #[allow(clippy::cast_precision_loss)]
    fn draw<DB>(&self, area: &DrawingArea<DB, Shift>, series: &Series, style: &ChartStyle) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        ensure_points(series)?;
        let bins = histogram_bins(&series.values, style.histogram_bins);
        let (Some(first), Some(last)) = (bins.first(), bins.last()) else {
            return Ok(());
        };
        let tallest = bins.iter().map(|bin| bin.count).max().unwrap_or(0) as f64;

        let mut chart = ChartBuilder::on(area)
            .margin(CHART_MARGIN)
            .x_label_area_size(label_area(style))
            .y_label_area_size(label_area(style))
            .build_cartesian_2d(
                padded_range(first.start, last.end, false),
                0.0..(tallest * 1.1).max(1.0),
            )?;

        let numeric = |value: &f64| format_tick(*value);
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_label_formatter(&numeric)
            .y_label_formatter(&numeric)
            .x_desc(series.y_name.as_str())
            .y_desc("Frequency")
            .label_style(style.label_font())
            .axis_desc_style(style.label_font())
            .draw()?;

        let fill = style.color(0).filled();
        let edge = style.background.stroke_width(1);
        chart.draw_series(
            bins.iter()
                .map(|bin| Rectangle::new([(bin.start, 0.0), (bin.end, bin.count as f64)], fill)),
        )?;
        chart.draw_series(
            bins.iter()
                .filter(|bin| bin.count > 0)
                .map(|bin| Rectangle::new([(bin.start, 0.0), (bin.end, bin.count as f64)], edge)),
        )?;

        Ok(())
    }
}
