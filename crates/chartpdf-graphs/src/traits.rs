//! The renderer trait implemented by every chart kind.

use crate::kind::ChartKind;
use crate::style::ChartStyle;
use chartpdf_common::Result;
use plotters::coord::Shift;
use plotters::prelude::{DrawingArea, DrawingBackend};

/// Draws one chart kind into a drawing area.
///
/// Renderers are generic over the backend so the dashboard can hand each
/// panel a sub-area of the same canvas.
pub trait ChartRenderer {
    /// Input the renderer consumes.
    type Data: ?Sized;

    /// The kind this renderer draws.
    fn kind(&self) -> ChartKind;

    /// Draw `data` into `area`. The caption is drawn by the caller.
    fn draw<DB>(&self, area: &DrawingArea<DB, Shift>, data: &Self::Data, style: &ChartStyle) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static;
}
