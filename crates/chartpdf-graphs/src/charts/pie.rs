//! Pie and donut charts.

use crate::kind::ChartKind;
use crate::style::ChartStyle;
use crate::traits::ChartRenderer;
use chartpdf_common::{ChartPdfError, Result};
use chartpdf_table::Series;
use plotters::coord::Shift;
use plotters::element::Pie;
use plotters::prelude::*;

/// Radius as a fraction of the smaller area edge, leaving room for labels.
const RADIUS_FRACTION: f64 = 0.32;

/// Donut hole radius as a fraction of the outer radius.
pub const DONUT_HOLE: f64 = 0.70;

/// Start angle in degrees, measured clockwise from three o'clock.
const START_ANGLE: f64 = -90.0;

/// Renders wedges labelled with their percentage share.
#[derive(Debug, Clone, Copy, Default)]
pub struct PieChart;

/// Renders a pie with a background-coloured centre.
#[derive(Debug, Clone, Copy, Default)]
pub struct DonutChart;

impl ChartRenderer for PieChart {
    type Data = Series;

    fn kind(&self) -> ChartKind {
        ChartKind::Pie
    }

    fn draw<DB>(&self, area: &DrawingArea<DB, Shift>, series: &Series, style: &ChartStyle) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        draw_wedges(area, series, style, true).map(|_| ())
    }
}

impl ChartRenderer for DonutChart {
    type Data = Series;

    fn kind(&self) -> ChartKind {
        ChartKind::Donut
    }

    #[allow(clippy::cast_possible_truncation)]
    fn draw<DB>(&self, area: &DrawingArea<DB, Shift>, series: &Series, style: &ChartStyle) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        let (center, radius) = draw_wedges(area, series, style, false)?;
        area.draw(&Circle::new(
            center,
            (radius * DONUT_HOLE).round() as i32,
            style.background.filled(),
        ))?;
        Ok(())
    }
}

/// Draws a pie whose wedges carry only their category labels.
pub fn draw_pie_without_shares<DB>(
    area: &DrawingArea<DB, Shift>,
    series: &Series,
    style: &ChartStyle,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    draw_wedges(area, series, style, false).map(|_| ())
}

/// Wedge labels; with `with_share` each carries its percentage of the total.
pub fn wedge_labels(entries: &[(&str, f64)], with_share: bool) -> Vec<String> {
    let total: f64 = entries.iter().map(|(_, value)| value).sum();
    entries
        .iter()
        .map(|(label, value)| {
            if with_share && total > 0.0 {
                format!("{label} ({:.1}%)", value / total * 100.0)
            } else {
                (*label).to_string()
            }
        })
        .collect()
}

/// Draws the wedges and returns the centre and radius used.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn draw_wedges<DB>(
    area: &DrawingArea<DB, Shift>,
    series: &Series,
    style: &ChartStyle,
    with_share: bool,
) -> Result<((i32, i32), f64)>
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
    let center = ((width / 2) as i32, (height / 2) as i32);
    let radius = f64::from(width.min(height)) * RADIUS_FRACTION;

    let sizes: Vec<f64> = entries.iter().map(|(_, value)| *value).collect();
    let colors = style.colors(sizes.len());
    let labels = wedge_labels(&entries, with_share);

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(START_ANGLE);
    pie.label_style(style.label_font());
    area.draw(&pie)?;

    Ok((center, radius))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::test_support::{has_ink, paint, sales};

    #[test]
    fn test_wedge_labels_carry_share() {
        let entries = [("Jan", 1.0), ("Feb", 3.0), ("Mar", 4.0)];
        assert_eq!(
            wedge_labels(&entries, true),
            vec!["Jan (12.5%)", "Feb (37.5%)", "Mar (50.0%)"]
        );
        assert_eq!(wedge_labels(&entries, false), vec!["Jan", "Feb", "Mar"]);
    }

    #[test]
    fn test_pie_and_donut_draw() {
        let style = ChartStyle::default();
        assert!(has_ink(&paint(|area| PieChart.draw(area, &sales(), &style).unwrap())));
        assert!(has_ink(&paint(|area| DonutChart.draw(area, &sales(), &style).unwrap())));
    }

    #[test]
    fn test_pie_without_shares_differs_from_labelled_pie() {
        let style = ChartStyle::default();
        let labelled = paint(|area| PieChart.draw(area, &sales(), &style).unwrap());
        let plain = paint(|area| draw_pie_without_shares(area, &sales(), &style).unwrap());
        assert!(has_ink(&plain));
        assert_ne!(labelled, plain);
    }

    #[test]
    fn test_pie_without_positive_values() {
        let mut series = sales();
        series.values = vec![0.0, -1.0, 0.0, -4.0, 0.0];
        paint(|area| {
            let err = PieChart.draw(area, &series, &ChartStyle::default()).unwrap_err();
            assert!(matches!(err, ChartPdfError::Validation { .. }));
        });
    }
}
