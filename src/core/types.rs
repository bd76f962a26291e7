use serde::{Deserialize, Serialize};

use crate::error::{VizError, VizResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn validate(self) -> VizResult<Self> {
        if !self.is_valid() {
            return Err(VizError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }

    #[must_use]
    pub fn center(self) -> (f64, f64) {
        (f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}

/// Per-edge insets that carve the plot area out of a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPadding {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotPadding {
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }
}

impl Default for PlotPadding {
    fn default() -> Self {
        Self {
            left: 56.0,
            top: 24.0,
            right: 24.0,
            bottom: 48.0,
        }
    }
}

/// Pixel rectangle in which data shapes are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotArea {
    pub fn from_viewport(viewport: Viewport, padding: PlotPadding) -> VizResult<Self> {
        viewport.validate()?;
        for (edge, value) in [
            ("left", padding.left),
            ("top", padding.top),
            ("right", padding.right),
            ("bottom", padding.bottom),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(VizError::InvalidData(format!(
                    "plot padding `{edge}` must be finite and >= 0"
                )));
            }
        }

        let left = padding.left;
        let top = padding.top;
        let right = f64::from(viewport.width) - padding.right;
        let bottom = f64::from(viewport.height) - padding.bottom;
        if right <= left || bottom <= top {
            return Err(VizError::InvalidData(format!(
                "plot padding leaves no drawable area in {}x{} viewport",
                viewport.width, viewport.height
            )));
        }

        Ok(Self {
            left,
            top,
            right,
            bottom,
        })
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }
}

/// One record projected into pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    pub name: String,
    pub value_x: f64,
    pub value_y: f64,
    pub x: f64,
    pub y: f64,
}
