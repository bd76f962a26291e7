use serde::{Deserialize, Serialize};

use crate::error::{VizError, VizResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA`.
    pub fn from_hex(input: &str) -> VizResult<Self> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        if !(digits.len() == 6 || digits.len() == 8)
            || !digits.bytes().all(|byte| byte.is_ascii_hexdigit())
        {
            return Err(VizError::InvalidData(format!(
                "color `{input}` must be #RRGGBB or #RRGGBBAA"
            )));
        }

        let channel = |index: usize| -> VizResult<f64> {
            u8::from_str_radix(&digits[index..index + 2], 16)
                .map(|value| f64::from(value) / 255.0)
                .map_err(|_| VizError::InvalidData(format!("color `{input}` is not hexadecimal")))
        };
        let alpha = if digits.len() == 8 { channel(6)? } else { 1.0 };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
    }

    /// HSL color; `hue` in degrees, `saturation`/`lightness` in 0..=1.
    #[must_use]
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        let hue = hue.rem_euclid(360.0);
        let saturation = saturation.clamp(0.0, 1.0);
        let lightness = lightness.clamp(0.0, 1.0);

        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let sector = hue / 60.0;
        let secondary = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
        let (red, green, blue) = match sector as u32 {
            0 => (chroma, secondary, 0.0),
            1 => (secondary, chroma, 0.0),
            2 => (0.0, chroma, secondary),
            3 => (0.0, secondary, chroma),
            4 => (secondary, 0.0, chroma),
            _ => (chroma, 0.0, secondary),
        };
        let offset = lightness - chroma / 2.0;
        Self::rgb(
            (red + offset).clamp(0.0, 1.0),
            (green + offset).clamp(0.0, 1.0),
            (blue + offset).clamp(0.0, 1.0),
        )
    }

    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    pub fn validate(self) -> VizResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(VizError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn validate_stroke_width(width: f64, what: &str) -> VizResult<()> {
    if !width.is_finite() || width <= 0.0 {
        return Err(VizError::InvalidData(format!(
            "{what} stroke width must be finite and > 0"
        )));
    }
    Ok(())
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> VizResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(VizError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        validate_stroke_width(self.stroke_width, "line")?;
        self.color.validate()
    }
}

/// How a rectangle interior is painted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FillStyle {
    Solid(Color),
    /// Gradient from the top-left corner (`from`) to the bottom-right corner (`to`).
    LinearGradient { from: Color, to: Color },
}

impl FillStyle {
    pub fn validate(self) -> VizResult<()> {
        match self {
            Self::Solid(color) => color.validate(),
            Self::LinearGradient { from, to } => {
                from.validate()?;
                to.validate()
            }
        }
    }
}

/// Draw command for one filled rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: FillStyle,
    pub border_width: f64,
    pub border_color: Color,
    pub corner_radius: f64,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill: FillStyle) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill,
            border_width: 0.0,
            border_color: Color::rgba(0.0, 0.0, 0.0, 0.0),
            corner_radius: 0.0,
        }
    }

    #[must_use]
    pub fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    pub fn validate(self) -> VizResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(VizError::InvalidData(
                "rect origin must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite() || !self.height.is_finite() || self.width < 0.0 || self.height < 0.0
        {
            return Err(VizError::InvalidData(
                "rect size must be finite and >= 0".to_owned(),
            ));
        }
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(VizError::InvalidData(
                "rect border width must be finite and >= 0".to_owned(),
            ));
        }
        if !self.corner_radius.is_finite() || self.corner_radius < 0.0 {
            return Err(VizError::InvalidData(
                "rect corner radius must be finite and >= 0".to_owned(),
            ));
        }
        self.border_color.validate()?;
        self.fill.validate()
    }
}

/// Draw command for one circle; ring when only `stroke_color` is set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CirclePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill_color: Option<Color>,
    pub stroke_color: Option<Color>,
    pub stroke_width: f64,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn filled(cx: f64, cy: f64, radius: f64, color: Color) -> Self {
        Self {
            cx,
            cy,
            radius,
            fill_color: Some(color),
            stroke_color: None,
            stroke_width: 0.0,
        }
    }

    #[must_use]
    pub const fn stroked(cx: f64, cy: f64, radius: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            cx,
            cy,
            radius,
            fill_color: None,
            stroke_color: Some(color),
            stroke_width,
        }
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke_width: f64, color: Color) -> Self {
        self.stroke_color = Some(color);
        self.stroke_width = stroke_width;
        self
    }

    pub fn validate(self) -> VizResult<()> {
        if !self.cx.is_finite() || !self.cy.is_finite() {
            return Err(VizError::InvalidData(
                "circle center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(VizError::InvalidData(
                "circle radius must be finite and > 0".to_owned(),
            ));
        }
        if self.fill_color.is_none() && self.stroke_color.is_none() {
            return Err(VizError::InvalidData(
                "circle needs a fill or a stroke".to_owned(),
            ));
        }
        if let Some(color) = self.fill_color {
            color.validate()?;
        }
        if let Some(color) = self.stroke_color {
            validate_stroke_width(self.stroke_width, "circle")?;
            color.validate()?;
        }
        Ok(())
    }
}

/// Draw command for one closed polygon in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonPrimitive {
    pub points: Vec<(f64, f64)>,
    pub fill_color: Option<Color>,
    pub stroke_color: Option<Color>,
    pub stroke_width: f64,
}

impl PolygonPrimitive {
    #[must_use]
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self {
            points,
            fill_color: None,
            stroke_color: None,
            stroke_width: 0.0,
        }
    }

    #[must_use]
    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke_width: f64, color: Color) -> Self {
        self.stroke_color = Some(color);
        self.stroke_width = stroke_width;
        self
    }

    pub fn validate(&self) -> VizResult<()> {
        if self.points.is_empty() {
            return Err(VizError::InvalidData(
                "polygon must have at least one vertex".to_owned(),
            ));
        }
        if self
            .points
            .iter()
            .any(|(x, y)| !x.is_finite() || !y.is_finite())
        {
            return Err(VizError::InvalidData(
                "polygon vertices must be finite".to_owned(),
            ));
        }
        if let Some(color) = self.fill_color {
            color.validate()?;
        }
        if let Some(color) = self.stroke_color {
            validate_stroke_width(self.stroke_width, "polygon")?;
            color.validate()?;
        }
        Ok(())
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space. `y` is the vertical middle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> VizResult<()> {
        if self.text.is_empty() {
            return Err(VizError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(VizError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(VizError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
