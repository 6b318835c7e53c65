//! Dashboard: four panels over the same series.

use super::pie::draw_pie_without_shares;
use super::{BarChart, HistogramChart, LineChart};
use crate::kind::ChartKind;
use crate::style::ChartStyle;
use crate::traits::ChartRenderer;
use chartpdf_common::Result;
use chartpdf_table::Series;
use plotters::coord::Shift;
use plotters::prelude::*;

/// Renders bar, line, pie and histogram panels in a 2x2 grid. The pie panel
/// labels wedges by category only.
#[derive(Debug, Clone, Copy, Default)]
pub struct DashboardChart;

impl ChartRenderer for DashboardChart {
    type Data = Series;

    fn kind(&self) -> ChartKind {
        ChartKind::Dashboard
    }

    fn draw<DB>(&self, area: &DrawingArea<DB, Shift>, series: &Series, style: &ChartStyle) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        let panels = area.split_evenly((2, 2));
        let [bar, line, pie, histogram] = panels.as_slice() else {
            return Ok(());
        };

        BarChart.draw(&panel(bar, BarChart.kind(), style)?, series, style)?;
        LineChart.draw(&panel(line, LineChart.kind(), style)?, series, style)?;
        draw_pie_without_shares(&panel(pie, ChartKind::Pie, style)?, series, style)?;
        HistogramChart.draw(&panel(histogram, HistogramChart.kind(), style)?, series, style)?;

        Ok(())
    }
}

/// Panel body below a small caption naming the chart kind.
fn panel<DB>(area: &DrawingArea<DB, Shift>, kind: ChartKind, style: &ChartStyle) -> Result<DrawingArea<DB, Shift>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    Ok(area.titled(kind.tag(), style.label_font())?)
}
