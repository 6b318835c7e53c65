//! Colours and fonts shared by every chart renderer.

use chartpdf_config::{ColorScheme, RenderConfig};
use plotters::style::{FontDesc, FontFamily, FontStyle, RGBColor, TextStyle};
use plotters::style::text_anchor::{HPos, Pos, VPos};

/// Resolved rendering settings for one chart.
#[derive(Debug, Clone)]
pub struct ChartStyle {
    /// Raster width in pixels.
    pub width: u32,
    /// Raster height in pixels.
    pub height: u32,
    /// Canvas fill.
    pub background: RGBColor,
    /// Series colours, cycled by index.
    pub palette: Vec<RGBColor>,
    /// Font family for every text element.
    pub font_family: String,
    /// Caption size in pixels.
    pub title_size: u32,
    /// Axis, legend and annotation size in pixels.
    pub label_size: u32,
    /// Number of histogram bins.
    pub histogram_bins: usize,
}

impl ChartStyle {
    /// Colour for the `index`-th series element.
    pub fn color(&self, index: usize) -> RGBColor {
        if self.palette.is_empty() {
            return TEXT_COLOR;
        }
        self.palette[index % self.palette.len()]
    }

    /// `count` palette colours, wrapping around when needed.
    pub fn colors(&self, count: usize) -> Vec<RGBColor> {
        (0..count).map(|i| self.color(i)).collect()
    }

    /// Font used for the chart caption.
    pub fn title_font(&self) -> TextStyle<'_> {
        self.font(self.title_size).color(&TEXT_COLOR)
    }

    /// Font used for axis labels and annotations.
    pub fn label_font(&self) -> TextStyle<'_> {
        self.font(self.label_size).color(&TEXT_COLOR)
    }

    /// Label font anchored at its centre, for text placed inside shapes.
    pub fn centered_label_font(&self) -> TextStyle<'_> {
        self.label_font().pos(Pos::new(HPos::Center, VPos::Center))
    }

    fn font(&self, size: u32) -> FontDesc<'_> {
        FontDesc::new(
            FontFamily::from(self.font_family.as_str()),
            f64::from(size),
            FontStyle::Normal,
        )
    }
}

impl From<&RenderConfig> for ChartStyle {
    fn from(config: &RenderConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            background: parse_color(&config.background).unwrap_or(WHITE_BACKGROUND),
            palette: palette(&config.color_scheme),
            font_family: config.font_family.clone(),
            title_size: config.title_size,
            label_size: config.label_size,
            histogram_bins: config.histogram_bins,
        }
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::from(&RenderConfig::default())
    }
}

/// Colour for captions, axes and annotations.
pub const TEXT_COLOR: RGBColor = RGBColor(0, 0, 0);

const WHITE_BACKGROUND: RGBColor = RGBColor(255, 255, 255);

/// Series colours for a colour scheme.
pub fn palette(scheme: &ColorScheme) -> Vec<RGBColor> {
    match scheme {
        ColorScheme::Default => vec![
            RGBColor(31, 119, 180),  // Blue
            RGBColor(255, 127, 14),  // Orange
            RGBColor(44, 160, 44),   // Green
            RGBColor(214, 39, 40),   // Red
            RGBColor(148, 103, 189), // Purple
            RGBColor(140, 86, 75),   // Brown
            RGBColor(227, 119, 194), // Pink
            RGBColor(127, 127, 127), // Gray
            RGBColor(188, 189, 34),  // Olive
            RGBColor(23, 190, 207),  // Cyan
        ],
        ColorScheme::Dark => vec![
            RGBColor(55, 126, 184),
            RGBColor(255, 152, 150),
            RGBColor(77, 175, 74),
            RGBColor(255, 187, 120),
            RGBColor(152, 78, 163),
        ],
        ColorScheme::Light => vec![
            RGBColor(166, 206, 227),
            RGBColor(251, 180, 174),
            RGBColor(179, 226, 205),
            RGBColor(253, 205, 172),
            RGBColor(203, 213, 232),
        ],
        ColorScheme::Vibrant => vec![
            RGBColor(230, 25, 75),
            RGBColor(60, 180, 75),
            RGBColor(255, 225, 25),
            RGBColor(0, 130, 200),
            RGBColor(245, 130, 48),
            RGBColor(145, 30, 180),
            RGBColor(70, 240, 240),
            RGBColor(240, 50, 230),
        ],
        ColorScheme::Monochrome => vec![
            RGBColor(0, 0, 0),
            RGBColor(64, 64, 64),
            RGBColor(128, 128, 128),
            RGBColor(192, 192, 192),
            RGBColor(224, 224, 224),
        ],
        ColorScheme::Custom(colors) => colors
            .iter()
            .map(|color| parse_color(color).unwrap_or(TEXT_COLOR))
            .collect(),
    }
}

/// Parses a `#RRGGBB` colour.
pub fn parse_color(value: &str) -> Option<RGBColor> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(RGBColor(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

const COOL: (f64, f64, f64) = (59.0, 76.0, 192.0);
const NEUTRAL: (f64, f64, f64) = (221.0, 221.0, 221.0);
const WARM: (f64, f64, f64) = (180.0, 4.0, 38.0);

/// Diverging blue-grey-red scale; `t` is clamped to `0.0..=1.0`.
pub fn coolwarm(t: f64) -> RGBColor {
    let t = if t.is_nan() { 0.5 } else { t.clamp(0.0, 1.0) };
    let (from, to, local) = if t < 0.5 {
        (COOL, NEUTRAL, t * 2.0)
    } else {
        (NEUTRAL, WARM, (t - 0.5) * 2.0)
    };
    RGBColor(
        lerp_channel(from.0, to.0, local),
        lerp_channel(from.1, to.1, local),
        lerp_channel(from.2, to.2, local),
    )
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lerp_channel(from: f64, to: f64, t: f64) -> u8 {
    (to - from).mul_add(t, from).round().clamp(0.0, 255.0) as u8
}
