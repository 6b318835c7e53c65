//! The chart kinds a request can select.

use chartpdf_common::{ChartPdfError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A chart selected by its request tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Vertical bars, one per row.
    Bar,
    /// Values joined by a line with circle markers.
    Line,
    /// Filled region between the values and zero.
    Area,
    /// Wedges labelled with their percentage share.
    Pie,
    /// Pie with a hollow centre.
    Donut,
    /// Distribution of the value column.
    Histogram,
    /// Unconnected points.
    Scatter,
    /// Annotated grid over every numeric column.
    Heatmap,
    /// Nested rectangles sized by value.
    Treemap,
    /// Bar, line, pie and histogram on one canvas.
    Dashboard,
}

impl ChartKind {
    /// Every kind, in the order they are advertised.
    pub const ALL: [Self; 10] = [
        Self::Bar,
        Self::Line,
        Self::Area,
        Self::Pie,
        Self::Donut,
        Self::Histogram,
        Self::Scatter,
        Self::Heatmap,
        Self::Treemap,
        Self::Dashboard,
    ];

    /// The request tag selecting this kind.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Area => "area",
            Self::Pie => "pie",
            Self::Donut => "donut",
            Self::Histogram => "histogram",
            Self::Scatter => "scatter",
            Self::Heatmap => "heatmap",
            Self::Treemap => "treemap",
            Self::Dashboard => "dashboard",
        }
    }

    /// Caption drawn above the chart, e.g. `BAR Chart`.
    pub fn caption(self) -> String {
        format!("{} Chart", self.tag().to_uppercase())
    }

    /// Whether the chart reads the first two columns as a label/value series.
    pub const fn uses_series(self) -> bool {
        !matches!(self, Self::Heatmap)
    }
}

impl FromStr for ChartKind {
    type Err = ChartPdfError;

    fn from_str(tag: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag() == tag)
            .ok_or_else(|| ChartPdfError::unsupported_chart(tag))
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
