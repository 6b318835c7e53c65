//! Treemap: tiles sized by value, no axes.

use super::CHART_MARGIN;
use crate::kind::ChartKind;
use crate::layout::{squarify, Rect};
use crate::style::ChartStyle;
use crate::traits::ChartRenderer;
use chartpdf_common::{ChartPdfError, Result};
use chartpdf_table::Series;
use plotters::coord::Shift;
use plotters::prelude::*;

/// Renders a squarified treemap of the positive values.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreemapChart;

/// Tile opacity.
pub const TILE_ALPHA: f64 = 0.8;

impl ChartRenderer for TreemapChart {
    type Data = Series;

    fn kind(&self) -> ChartKind {
        ChartKind::Treemap
    }

    #[allow(clippy::cast_possible_truncation)]
    fn draw<DB>(&self, area: &DrawingArea<DB, Shift>, series: &Series, style: &ChartStyle) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        let entries = series.positive_entries();
        if entries.is_empty() {
            return Err(ChartPdfError::validation_field(
                format!("Column '{}' has no positive values to chart", series.y_name),
                series.y_name.clone(),
            ));
        }

        let (width, height) = area.dim_in_pixel();
        let margin = f64::from(CHART_MARGIN);
        let bounds = Rect::new(
            margin,
            margin,
            (f64::from(width) - 2.0 * margin).max(1.0),
            (f64::from(height) - 2.0 * margin).max(1.0),
        );

        let values: Vec<f64> = entries.iter().map(|(_, value)| *value).collect();
        let tiles = squarify(&values, bounds);
        let label_font = style.centered_label_font();

        for (index, (tile, (label, _))) in tiles.iter().zip(&entries).enumerate() {
            let top_left = (tile.x.round() as i32, tile.y.round() as i32);
            let bottom_right = (
                (tile.x + tile.width).round() as i32,
                (tile.y + tile.height).round() as i32,
            );

            area.draw(&Rectangle::new(
                [top_left, bottom_right],
                style.color(index).mix(TILE_ALPHA).filled(),
            ))?;
            area.draw(&Rectangle::new(
                [top_left, bottom_right],
                style.background.stroke_width(2),
            ))?;

            let (text_width, text_height) = area.estimate_text_size(label, &label_font)?;
            if f64::from(text_width) < tile.width && f64::from(text_height) < tile.height {
                let (cx, cy) = tile.center();
                area.draw(&Text::new(
                    (*label).to_string(),
                    (cx.round() as i32, cy.round() as i32),
                    label_font.clone(),
                ))?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::test_support::{has_ink, paint, sales};

    #[test]
    fn test_treemap_draws() {
        let buffer = paint(|area| TreemapChart.draw(area, &sales(), &ChartStyle::default()).unwrap());
        assert!(has_ink(&buffer));
    }

    #[test]
    fn test_treemap_skips_non_positive() {
        let mut series = sales();
        series.values = vec![10.0, 0.0, -5.0, 3.0, 1.0];
        paint(|area| TreemapChart.draw(area, &series, &ChartStyle::default()).unwrap());
    }

    #[test]
    fn test_treemap_without_positive_values() {
        let mut series = sales();
        series.values = vec![0.0; 5];
        paint(|area| assert!(TreemapChart.draw(area, &series, &ChartStyle::default()).is_err()));
    }
}
