//! Bar chart: one bar per row on a categorical axis.

use super::{ensure_points, label_area, CHART_MARGIN};
use crate::kind::ChartKind;
use crate::style::ChartStyle;
use crate::traits::ChartRenderer;
use crate::utils::{category_ticks, format_tick, value_axis};
use chartpdf_common::Result;
use chartpdf_table::Series;
use plotters::coord::Shift;
use plotters::prelude::*;

/// Renders vertical bars from a zero baseline.
#[derive(Debug, Clone, Copy, Default)]
pub struct BarChart;

/// Horizontal gap on each side of a bar, in pixels.
const BAR_GAP: u32 = 4;

impl ChartRenderer for BarChart {
    type Data = Series;

    fn kind(&self) -> ChartKind {
        ChartKind::Bar
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn draw<DB>(&self, area: &DrawingArea<DB, Shift>, series: &Series, style: &ChartStyle) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        ensure_points(series)?;
        let count = series.len() as i32;

        let mut chart = ChartBuilder::on(area)
            .margin(CHART_MARGIN)
            .x_label_area_size(label_area(style))
            .y_label_area_size(label_area(style))
            .build_cartesian_2d((0..count).into_segmented(), value_axis(&series.values, true))?;

        let category = |value: &SegmentValue<i32>| match value {
            SegmentValue::CenterOf(index) => usize::try_from(*index)
                .ok()
                .and_then(|index| series.labels.get(index))
                .cloned()
                .unwrap_or_default(),
            _ => String::new(),
        };
        let numeric = |value: &f64| format_tick(*value);

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(category_ticks(series.len()))
            .x_label_formatter(&category)
            .y_label_formatter(&numeric)
            .x_desc(series.x_name.as_str())
            .y_desc(series.y_name.as_str())
            .label_style(style.label_font())
            .axis_desc_style(style.label_font())
            .draw()?;

        let fill = style.color(0).filled();
        chart.draw_series(series.values.iter().enumerate().map(|(index, value)| {
            let index = index as i32;
            let mut bar = Rectangle::new(
                [
                    (SegmentValue::Exact(index), 0.0),
                    (SegmentValue::Exact(index + 1), *value),
                ],
                fill,
            );
            bar.set_margin(0, 0, BAR_GAP, BAR_GAP);
            bar
        }))?;

        Ok(())
    }
}
