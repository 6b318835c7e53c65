//! Area chart: the series filled down to zero.

use super::{ensure_points, xy_chart};
use crate::kind::ChartKind;
use crate::style::ChartStyle;
use crate::traits::ChartRenderer;
use crate::utils::value_axis;
use chartpdf_common::Result;
use chartpdf_table::Series;
use plotters::coord::Shift;
use plotters::prelude::*;

/// Renders a semi-transparent filled area with a solid outline.
#[derive(Debug, Clone, Copy, Default)]
pub struct AreaChart;

/// Fill opacity.
pub const AREA_ALPHA: f64 = 0.6;

impl ChartRenderer for AreaChart {
    type Data = Series;

    fn kind(&self) -> ChartKind {
        ChartKind::Area
    }

    fn draw<DB>(&self, area: &DrawingArea<DB, Shift>, series: &Series, style: &ChartStyle) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        ensure_points(series)?;
        let mut chart = xy_chart(area, series, value_axis(&series.values, true), style)?;

        let color = style.color(0);
        chart.draw_series(
            AreaSeries::new(series.points(), 0.0, color.mix(AREA_ALPHA)).border_style(color),
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::test_support::{has_ink, paint, sales};

    #[test]
    fn test_area_draws() {
        let buffer = paint(|area| AreaChart.draw(area, &sales(), &ChartStyle::default()).unwrap());
        assert!(has_ink(&buffer));
    }
}
