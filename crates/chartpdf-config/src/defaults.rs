//! Default values for every configuration section.

use crate::schema::*;
use chartpdf_common::LoggingConfig;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 10000;

/// Default upload limit (10 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// A4 page size in millimetres.
pub const A4_MM: (f32, f32) = (210.0, 297.0);

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            render: RenderConfig::default(),
            pdf: PdfConfig::default(),
            storage: StorageConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 400,
            background: "#ffffff".to_string(),
            font_family: "sans-serif".to_string(),
            title_size: 20,
            label_size: 12,
            color_scheme: ColorScheme::Default,
            histogram_bins: 10,
        }
    }
}

impl Default for ImagePlacement {
    fn default() -> Self {
        Self {
            x_pt: 50.0,
            y_pt: 300.0,
            width_pt: 500.0,
            height_pt: 300.0,
        }
    }
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            title: "Chart".to_string(),
            page_width_mm: A4_MM.0,
            page_height_mm: A4_MM.1,
            image: ImagePlacement::default(),
            download_name: "chart.pdf".to_string(),
        }
    }
}
