//! Runtime validation of a loaded configuration.

use crate::loader::ConfigError;
use crate::schema::{ColorScheme, Config};

/// Smallest raster edge that still leaves room for captions and axes.
pub const MIN_RENDER_EDGE: u32 = 100;

/// Largest accepted histogram bin count.
pub const MAX_HISTOGRAM_BINS: usize = 1000;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration, reporting the first offending field.
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let server = &config.server;
        if server.host.trim().is_empty() {
            return Err(invalid("server.host", "must not be empty"));
        }
        if server.port == 0 {
            return Err(invalid("server.port", "must be between 1 and 65535"));
        }
        if server.max_upload_bytes == 0 {
            return Err(invalid("server.max_upload_bytes", "must be greater than zero"));
        }

        let render = &config.render;
        if render.width < MIN_RENDER_EDGE || render.height < MIN_RENDER_EDGE {
            return Err(invalid(
                "render.width/render.height",
                format!("must both be at least {MIN_RENDER_EDGE} pixels"),
            ));
        }
        if render.title_size == 0 || render.label_size == 0 {
            return Err(invalid("render.title_size/render.label_size", "must be greater than zero"));
        }
        if render.histogram_bins == 0 || render.histogram_bins > MAX_HISTOGRAM_BINS {
            return Err(invalid(
                "render.histogram_bins",
                format!("must be between 1 and {MAX_HISTOGRAM_BINS}"),
            ));
        }
        if !is_hex_color(&render.background) {
            return Err(invalid("render.background", "must be a #RRGGBB colour"));
        }
        if let ColorScheme::Custom(colors) = &render.color_scheme {
            if colors.is_empty() {
                return Err(invalid("render.color_scheme", "custom palette must not be empty"));
            }
            if let Some(bad) = colors.iter().find(|c| !is_hex_color(c)) {
                return Err(invalid(
                    "render.color_scheme",
                    format!("'{bad}' is not a #RRGGBB colour"),
                ));
            }
        }

        let pdf = &config.pdf;
        if pdf.page_width_mm <= 0.0 || pdf.page_height_mm <= 0.0 {
            return Err(invalid("pdf.page_width_mm/pdf.page_height_mm", "must be positive"));
        }
        if pdf.download_name.trim().is_empty() {
            return Err(invalid("pdf.download_name", "must not be empty"));
        }

        let image = &pdf.image;
        if image.width_pt <= 0.0 || image.height_pt <= 0.0 {
            return Err(invalid("pdf.image", "width and height must be positive"));
        }
        if image.x_pt < 0.0 || image.y_pt < 0.0 {
            return Err(invalid("pdf.image", "position must not be negative"));
        }
        if image.x_pt + image.width_pt > pdf.page_width_pt() + 0.5
            || image.y_pt + image.height_pt > pdf.page_height_pt() + 0.5
        {
            return Err(invalid("pdf.image", "chart must fit on the page"));
        }

        Ok(())
    }
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigValidator::validate(self)
    }
}

/// Whether `value` is a `#RRGGBB` colour.
pub fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

fn invalid(field: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field: field.to_string(),
        message: message.into(),
    }
}
