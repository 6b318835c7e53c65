//! Line chart with circle markers.

use super::{ensure_points, xy_chart};
use crate::kind::ChartKind;
use crate::style::ChartStyle;
use crate::traits::ChartRenderer;
use crate::utils::value_axis;
use chartpdf_common::Result;
use chartpdf_table::Series;
use plotters::coord::Shift;
use plotters::prelude::*;

/// Renders the series as a polyline with a marker per point.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineChart;

const LINE_WIDTH: u32 = 2;
const MARKER_RADIUS: i32 = 4;

impl ChartRenderer for LineChart {
    type Data = Series;

    fn kind(&self) -> ChartKind {
        ChartKind::Line
    }

    fn draw<DB>(&self, area: &DrawingArea<DB, Shift>, series: &Series, style: &ChartStyle) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        ensure_points(series)?;
        let mut chart = xy_chart(area, series, value_axis(&series.values, false), style)?;

        let color = style.color(0);
        let points = series.points();
        chart.draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(LINE_WIDTH)))?;
        chart.draw_series(
            points
                .iter()
                .map(|point| Circle::new(*point, MARKER_RADIUS, color.filled())),
        )?;

        Ok(())
    }
}
