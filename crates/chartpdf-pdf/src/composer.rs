//! PDF composition.

use chartpdf_common::{ChartPdfError, Result};
use chartpdf_config::{ImagePlacement, PdfConfig};
use chartpdf_graphs::RenderedChart;
use image::DynamicImage;
use printpdf::{Image, ImageTransform, Mm, PdfDocument, Pt};
use std::time::Instant;
use tracing::{debug, instrument};

/// Resolution at which one image pixel spans one PDF point before scaling.
const POINTS_PER_INCH: f32 = 72.0;

/// Page and placement settings for composed documents.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfOptions {
    /// Document title metadata.
    pub title: String,
    /// Page width in millimetres.
    pub page_width_mm: f32,
    /// Page height in millimetres.
    pub page_height_mm: f32,
    /// Where the chart lands on the page.
    pub placement: ImagePlacement,
}

impl From<&PdfConfig> for PdfOptions {
    fn from(config: &PdfConfig) -> Self {
        Self {
            title: config.title.clone(),
            page_width_mm: config.page_width_mm,
            page_height_mm: config.page_height_mm,
            placement: config.image,
        }
    }
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self::from(&PdfConfig::default())
    }
}

/// Builds one-page PDFs holding a chart image.
#[derive(Debug, Clone, Default)]
pub struct PdfComposer {
    options: PdfOptions,
}

impl PdfComposer {
    /// Creates a composer with the given page settings.
    pub const fn new(options: PdfOptions) -> Self {
        Self { options }
    }

    /// Page settings in use.
    pub const fn options(&self) -> &PdfOptions {
        &self.options
    }

    /// Lays `chart` out on a fresh page and serialises the document.
    #[instrument(skip(self, chart), fields(kind = %chart.kind))]
    pub fn compose(&self, chart: &RenderedChart) -> Result<Vec<u8>> {
        let started = Instant::now();
        if chart.width() == 0 || chart.height() == 0 {
            return Err(ChartPdfError::pdf("Chart image has no pixels"));
        }

        let (doc, page, layer) = PdfDocument::new(
            self.options.title.as_str(),
            Mm(self.options.page_width_mm),
            Mm(self.options.page_height_mm),
            "Chart",
        );
        let layer = doc.get_page(page).get_layer(layer);

        let image = Image::from_dynamic_image(&DynamicImage::ImageRgb8(chart.image.clone()));
        image.add_to_layer(
            layer,
            image_transform(&self.options.placement, chart.width(), chart.height()),
        );

        let bytes = doc
            .save_to_bytes()
            .map_err(|e| ChartPdfError::pdf(format!("Failed to serialise PDF: {e:?}")))?;

        debug!(
            bytes = bytes.len(),
            elapsed_ms = started.elapsed().as_millis(),
            "PDF composed"
        );
        Ok(bytes)
    }
}

/// Transform that stretches a `width` x `height` pixel image onto `placement`.
#[allow(clippy::cast_precision_loss)]
pub fn image_transform(placement: &ImagePlacement, width: u32, height: u32) -> ImageTransform {
    ImageTransform {
        translate_x: Some(Mm::from(Pt(placement.x_pt))),
        translate_y: Some(Mm::from(Pt(placement.y_pt))),
        scale_x: Some(placement.width_pt / width as f32),
        scale_y: Some(placement.height_pt / height as f32),
        dpi: Some(POINTS_PER_INCH),
        ..ImageTransform::default()
    }
}
