//! Scatter plot of the value column against the label column.

use super::{ensure_points, xy_chart};
use crate::kind::ChartKind;
use crate::style::ChartStyle;
use crate::traits::ChartRenderer;
use crate::utils::value_axis;
use chartpdf_common::Result;
use chartpdf_table::Series;
use plotters::coord::Shift;
use plotters::prelude::*;

/// Renders unconnected filled circles.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScatterChart;

const POINT_RADIUS: i32 = 5;

impl ChartRenderer for ScatterChart {
    type Data = Series;

    fn kind(&self) -> ChartKind {
        ChartKind::Scatter
    }

    fn draw<DB>(&self, area: &DrawingArea<DB, Shift>, series: &Series, style: &ChartStyle) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        ensure_points(series)?;
        let mut chart = xy_chart(area, series, value_axis(&series.values, false), style)?;

        let fill = style.color(0).filled();
        chart.draw_series(
            series
                .points()
                .into_iter()
                .map(|point| Circle::new(point, POINT_RADIUS, fill)),
        )?;

        Ok(())
    }
}
