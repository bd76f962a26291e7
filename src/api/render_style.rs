use serde::{Deserialize, Serialize};

use crate::error::{VizError, VizResult};
use crate::render::Color;

const fn hex_rgb(value: u32) -> Color {
    Color::rgb(
        ((value >> 16) & 0xff) as f64 / 255.0,
        ((value >> 8) & 0xff) as f64 / 255.0,
        (value & 0xff) as f64 / 255.0,
    )
}

pub const CHART_PRIMARY: Color = hex_rgb(0x58a6ff);
pub const CHART_SUCCESS: Color = hex_rgb(0x3fb950);
pub const CHART_WARNING: Color = hex_rgb(0xf0883e);
pub const CHART_DANGER: Color = hex_rgb(0xf85149);
pub const CHART_INFO: Color = hex_rgb(0xbc8cff);
pub const CHART_NEUTRAL: Color = hex_rgb(0x8b949e);

/// Visual parameters shared by every chart builder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    pub background_color: Color,
    pub grid_color: Color,
    pub spoke_color: Color,
    pub axis_color: Color,
    pub axis_label_color: Color,
    pub tick_label_color: Color,
    pub grid_line_width: f64,
    pub axis_label_font_size_px: f64,
    pub tick_label_font_size_px: f64,
    pub series_stroke_width: f64,
    /// Alpha applied to a series color for polygon interiors.
    pub series_fill_alpha: f64,
    pub vertex_radius_px: f64,
    #[serde(default)]
    pub vertex_outline_color: Option<Color>,
    pub point_color: Color,
    pub point_radius_px: f64,
    pub hover_point_radius_px: f64,
    pub regression_color: Color,
    pub regression_width: f64,
    pub heatmap_text_color: Color,
    pub heatmap_diagonal_from: Color,
    pub heatmap_diagonal_to: Color,
    pub heatmap_value_font_size_px: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background_color: hex_rgb(0x0d1117),
            grid_color: hex_rgb(0x21262d),
            spoke_color: hex_rgb(0x30363d),
            axis_color: hex_rgb(0x30363d),
            axis_label_color: hex_rgb(0xc9d1d9),
            tick_label_color: CHART_NEUTRAL,
            grid_line_width: 1.0,
            axis_label_font_size_px: 12.0,
            tick_label_font_size_px: 10.0,
            series_stroke_width: 2.0,
            series_fill_alpha: 0.19,
            vertex_radius_px: 4.0,
            vertex_outline_color: None,
            point_color: CHART_PRIMARY,
            point_radius_px: 5.0,
            hover_point_radius_px: 8.0,
            regression_color: CHART_WARNING,
            regression_width: 2.0,
            heatmap_text_color: Color::rgb(1.0, 1.0, 1.0),
            heatmap_diagonal_from: CHART_PRIMARY,
            heatmap_diagonal_to: CHART_INFO,
            heatmap_value_font_size_px: 11.0,
        }
    }
}

impl RenderStyle {
    /// Style of the multi-series radar: thicker outlines and white-ringed vertices.
    #[must_use]
    pub fn multi_series() -> Self {
        Self {
            series_stroke_width: 2.5,
            series_fill_alpha: 0.15,
            vertex_radius_px: 5.0,
            vertex_outline_color: Some(Color::rgb(1.0, 1.0, 1.0)),
            axis_label_font_size_px: 13.0,
            ..Self::default()
        }
    }

    pub fn validate(self) -> VizResult<Self> {
        for color in [
            self.background_color,
            self.grid_color,
            self.spoke_color,
            self.axis_color,
            self.axis_label_color,
            self.tick_label_color,
            self.point_color,
            self.regression_color,
            self.heatmap_text_color,
            self.heatmap_diagonal_from,
            self.heatmap_diagonal_to,
        ] {
            color.validate()?;
        }
        if let Some(color) = self.vertex_outline_color {
            color.validate()?;
        }
        for (name, value) in [
            ("grid_line_width", self.grid_line_width),
            ("axis_label_font_size_px", self.axis_label_font_size_px),
            ("tick_label_font_size_px", self.tick_label_font_size_px),
            ("series_stroke_width", self.series_stroke_width),
            ("vertex_radius_px", self.vertex_radius_px),
            ("point_radius_px", self.point_radius_px),
            ("hover_point_radius_px", self.hover_point_radius_px),
            ("regression_width", self.regression_width),
            ("heatmap_value_font_size_px", self.heatmap_value_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(VizError::InvalidData(format!(
                    "style `{name}` must be finite and > 0"
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.series_fill_alpha) {
            return Err(VizError::InvalidData(
                "style `series_fill_alpha` must be in [0, 1]".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Palette applied to radar series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorScheme {
    /// Each record keeps its own brand color.
    #[default]
    Default,
    Colorblind,
    HighContrast,
    Monochrome,
}

const COLORBLIND: [Color; 8] = [
    hex_rgb(0x0173b2),
    hex_rgb(0xde8f05),
    hex_rgb(0x029e73),
    hex_rgb(0xcc78bc),
    hex_rgb(0xca9161),
    hex_rgb(0x949494),
    hex_rgb(0xece133),
    hex_rgb(0x56b4e9),
];

const HIGH_CONTRAST: [Color; 8] = [
    hex_rgb(0xffff00),
    hex_rgb(0x00ffff),
    hex_rgb(0xff00ff),
    hex_rgb(0x00ff00),
    hex_rgb(0xff0000),
    hex_rgb(0x0000ff),
    hex_rgb(0xffffff),
    hex_rgb(0xffa500),
];

const MONOCHROME: [Color; 8] = [
    hex_rgb(0xffffff),
    hex_rgb(0xcccccc),
    hex_rgb(0x999999),
    hex_rgb(0x666666),
    hex_rgb(0x333333),
    hex_rgb(0xb3b3b3),
    hex_rgb(0x808080),
    hex_rgb(0x4d4d4d),
];

impl ColorScheme {
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Colorblind => "Colorblind Friendly",
            Self::HighContrast => "High Contrast",
            Self::Monochrome => "Monochrome",
        }
    }

    /// Resolves one color per series. Fixed palettes wrap after eight entries.
    #[must_use]
    pub fn resolve(self, own_colors: &[Color]) -> Vec<Color> {
        let palette: &[Color] = match self {
            Self::Default => return own_colors.to_vec(),
            Self::Colorblind => &COLORBLIND,
            Self::HighContrast => &HIGH_CONTRAST,
            Self::Monochrome => &MONOCHROME,
        };
        (0..own_colors.len())
            .map(|index| palette[index % palette.len()])
            .collect()
    }
}
