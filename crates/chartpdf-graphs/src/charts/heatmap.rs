//! Annotated heatmap over every numeric column.

use super::{label_area, CHART_MARGIN};
use crate::kind::ChartKind;
use crate::style::{coolwarm, ChartStyle};
use crate::traits::ChartRenderer;
use crate::utils::format_tick;
use chartpdf_common::{ChartPdfError, Result};
use chartpdf_table::{min_max, NumericColumn};
use plotters::coord::Shift;
use plotters::prelude::*;

/// Renders one cell per (row, column) on a diverging colour scale.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeatmapChart;

impl ChartRenderer for HeatmapChart {
    type Data = [NumericColumn];

    fn kind(&self) -> ChartKind {
        ChartKind::Heatmap
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn draw<DB>(&self, area: &DrawingArea<DB, Shift>, columns: &[NumericColumn], style: &ChartStyle) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        let rows = columns.first().map_or(0, |column| column.values.len());
        if rows == 0 {
            return Err(ChartPdfError::validation(
                "Heatmap requires at least one numeric column with data",
            ));
        }

        let all: Vec<f64> = columns.iter().flat_map(|c| c.values.iter().copied()).collect();
        let (lo, hi) = min_max(&all).unwrap_or((0.0, 1.0));
        let span = hi - lo;
        let shade = |value: f64| {
            if span.abs() < f64::EPSILON {
                coolwarm(0.5)
            } else {
                coolwarm((value - lo) / span)
            }
        };

        let column_count = columns.len() as i32;
        let row_count = rows as i32;

        let mut chart = ChartBuilder::on(area)
            .margin(CHART_MARGIN)
            .x_label_area_size(label_area(style))
            .y_label_area_size(label_area(style))
            .build_cartesian_2d(
                (0..column_count).into_segmented(),
                (0..row_count).into_segmented(),
            )?;

        // Rows are drawn top to bottom, so row `r` sits at `row_count - 1 - r`.
        let column_name = |value: &SegmentValue<i32>| match value {
            SegmentValue::CenterOf(index) => usize::try_from(*index)
                .ok()
                .and_then(|index| columns.get(index))
                .map(|column| column.name.clone())
                .unwrap_or_default(),
            _ => String::new(),
        };
        let row_name = |value: &SegmentValue<i32>| match value {
            SegmentValue::CenterOf(index) if (0..row_count).contains(index) => {
                (row_count - 1 - index).to_string()
            }
            _ => String::new(),
        };

        chart
            .configure_mesh()
            .disable_mesh()
            .x_labels(columns.len())
            .y_labels(rows)
            .x_label_formatter(&column_name)
            .y_label_formatter(&row_name)
            .label_style(style.label_font())
            .draw()?;

        let cells: Vec<(i32, i32, f64)> = columns
            .iter()
            .enumerate()
            .flat_map(|(c, column)| {
                column
                    .values
                    .iter()
                    .enumerate()
                    .map(move |(r, value)| (c as i32, row_count - 1 - r as i32, *value))
            })
            .collect();

        chart.draw_series(cells.iter().map(|(x, y, value)| {
            Rectangle::new(
                [
                    (SegmentValue::Exact(*x), SegmentValue::Exact(*y)),
                    (SegmentValue::Exact(x + 1), SegmentValue::Exact(y + 1)),
                ],
                shade(*value).filled(),
            )
        }))?;

        let annotation = style.centered_label_font();
        chart.draw_series(cells.iter().map(|(x, y, value)| {
            Text::new(
                format_tick(*value),
                (SegmentValue::CenterOf(*x), SegmentValue::CenterOf(*y)),
                annotation.clone(),
            )
        }))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::test_support::{has_ink, paint};

    fn columns() -> Vec<NumericColumn> {
        vec![
            NumericColumn {
                name: "sales".into(),
                values: vec![120.0, 95.0, 143.0],
            },
            NumericColumn {
                name: "returns".into(),
                values: vec![4.0, 2.0, 7.0],
            },
        ]
    }

    #[test]
    fn test_heatmap_draws() {
        let buffer = paint(|area| HeatmapChart.draw(area, &columns(), &ChartStyle::default()).unwrap());
        assert!(has_ink(&buffer));
    }

    #[test]
    fn test_heatmap_constant_values() {
        let flat = vec![NumericColumn {
            name: "a".into(),
            values: vec![1.0, 1.0],
        }];
        paint(|area| HeatmapChart.draw(area, &flat, &ChartStyle::default()).unwrap());
    }

    #[test]
    fn test_heatmap_requires_columns() {
        paint(|area| {
            let err = HeatmapChart.draw(area, &[], &ChartStyle::default()).unwrap_err();
            assert!(matches!(err, ChartPdfError::Validation { .. }));
        });
    }
}
