//! Configuration schema definitions using serde.

use chartpdf_common::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for ChartPDF.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server configuration.
    pub server: ServerConfig,
    /// Chart rendering configuration.
    pub render: RenderConfig,
    /// PDF layout configuration.
    pub pdf: PdfConfig,
    /// Artifact storage configuration.
    pub storage: StorageConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Largest accepted upload, in bytes.
    pub max_upload_bytes: usize,
}

/// Named colour palettes for chart series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// The classic ten-colour categorical palette.
    Default,
    /// Saturated colours for dark backgrounds.
    Dark,
    /// Pastel colours.
    Light,
    /// High contrast colours.
    Vibrant,
    /// Greys only.
    Monochrome,
    /// User supplied `#RRGGBB` colours.
    Custom(Vec<String>),
}

/// Chart rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Raster width in pixels.
    pub width: u32,
    /// Raster height in pixels.
    pub height: u32,
    /// Background colour as `#RRGGBB`.
    pub background: String,
    /// Font family used for captions and labels.
    pub font_family: String,
    /// Caption font size.
    pub title_size: u32,
    /// Axis and annotation font size.
    pub label_size: u32,
    /// Series palette.
    pub color_scheme: ColorScheme,
    /// Number of bins for histograms.
    pub histogram_bins: usize,
}

/// Where the chart image sits on the page, in PDF points from the lower-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImagePlacement {
    /// Left edge.
    pub x_pt: f32,
    /// Bottom edge.
    pub y_pt: f32,
    /// Drawn width.
    pub width_pt: f32,
    /// Drawn height.
    pub height_pt: f32,
}

/// PDF layout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Document title metadata.
    pub title: String,
    /// Page width in millimetres.
    pub page_width_mm: f32,
    /// Page height in millimetres.
    pub page_height_mm: f32,
    /// Chart image placement.
    pub image: ImagePlacement,
    /// File name offered in the `Content-Disposition` header.
    pub download_name: String,
}

/// Optional on-disk archival of uploads and generated artifacts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory receiving uploaded files.
    pub upload_dir: Option<PathBuf>,
    /// Directory receiving generated PNG and PDF files.
    pub output_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Socket address string suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl PdfConfig {
    /// Page width in PDF points.
    pub fn page_width_pt(&self) -> f32 {
        mm_to_pt(self.page_width_mm)
    }

    /// Page height in PDF points.
    pub fn page_height_pt(&self) -> f32 {
        mm_to_pt(self.page_height_mm)
    }
}

/// Converts millimetres to PDF points (1/72 inch).
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * 72.0 / 25.4
}
