use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::core::{Domain, DomainTuning, PlotArea, PlotPadding, Viewport};
use crate::error::{VizError, VizResult};

fn parse_json<T: DeserializeOwned>(input: &str, what: &str) -> VizResult<T> {
    serde_json::from_str(input)
        .map_err(|e| VizError::InvalidData(format!("failed to parse {what} json: {e}")))
}

fn default_ring_count() -> usize {
    5
}

fn default_scale_max() -> f64 {
    100.0
}

fn default_tick_count() -> usize {
    5
}

fn default_true() -> bool {
    true
}

/// Geometry of a radar chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarChartConfig {
    pub viewport: Viewport,
    /// Distance between the outer ring and the viewport edge.
    pub radius_inset_px: f64,
    pub label_offset_px: f64,
    #[serde(default = "default_ring_count")]
    pub ring_count: usize,
    /// Value that maps onto the outer ring.
    #[serde(default = "default_scale_max")]
    pub scale_max: f64,
    #[serde(default)]
    pub show_ring_labels: bool,
    #[serde(default = "default_true")]
    pub show_vertex_markers: bool,
}

impl RadarChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            radius_inset_px: 60.0,
            label_offset_px: 30.0,
            ring_count: default_ring_count(),
            scale_max: default_scale_max(),
            show_ring_labels: false,
            show_vertex_markers: true,
        }
    }

    /// Layout used when several series are compared on one chart.
    #[must_use]
    pub fn multi_series(viewport: Viewport) -> Self {
        Self {
            radius_inset_px: 80.0,
            label_offset_px: 40.0,
            show_ring_labels: true,
            ..Self::new(viewport)
        }
    }

    #[must_use]
    pub fn with_ring_count(mut self, ring_count: usize) -> Self {
        self.ring_count = ring_count;
        self
    }

    #[must_use]
    pub fn with_scale_max(mut self, scale_max: f64) -> Self {
        self.scale_max = scale_max;
        self
    }

    #[must_use]
    pub fn max_radius(self) -> f64 {
        f64::from(self.viewport.width.min(self.viewport.height)) / 2.0 - self.radius_inset_px
    }

    pub fn validate(self) -> VizResult<Self> {
        self.viewport.validate()?;
        if !self.radius_inset_px.is_finite() || !self.label_offset_px.is_finite() {
            return Err(VizError::InvalidData(
                "radar inset and label offset must be finite".to_owned(),
            ));
        }
        if self.max_radius() <= 0.0 {
            return Err(VizError::InvalidData(format!(
                "radar inset {} leaves no radius in {}x{} viewport",
                self.radius_inset_px, self.viewport.width, self.viewport.height
            )));
        }
        if self.ring_count == 0 {
            return Err(VizError::InvalidData(
                "radar ring count must be >= 1".to_owned(),
            ));
        }
        if !self.scale_max.is_finite() || self.scale_max <= 0.0 {
            return Err(VizError::InvalidData(
                "radar scale max must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }

    pub fn from_json_str(input: &str) -> VizResult<Self> {
        parse_json::<Self>(input, "radar config")?.validate()
    }
}

/// Geometry and domain fitting of a scatter plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterChartConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub padding: PlotPadding,
    #[serde(default = "default_axis_tuning")]
    pub x_tuning: DomainTuning,
    #[serde(default = "default_axis_tuning")]
    pub y_tuning: DomainTuning,
    #[serde(default = "default_tick_count")]
    pub x_tick_count: usize,
    #[serde(default = "default_tick_count")]
    pub y_tick_count: usize,
    /// Axis domain drawn when there are no records to fit.
    #[serde(default = "default_empty_domain")]
    pub empty_domain: Domain,
    #[serde(default = "default_true")]
    pub show_regression: bool,
    #[serde(default)]
    pub show_point_labels: bool,
}

fn default_axis_tuning() -> DomainTuning {
    DomainTuning::default().with_padding(2.0)
}

fn default_empty_domain() -> Domain {
    Domain {
        min: 0.0,
        max: 100.0,
    }
}

impl ScatterChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            padding: PlotPadding::default(),
            x_tuning: default_axis_tuning(),
            y_tuning: default_axis_tuning(),
            x_tick_count: default_tick_count(),
            y_tick_count: default_tick_count(),
            empty_domain: default_empty_domain(),
            show_regression: true,
            show_point_labels: false,
        }
    }

    #[must_use]
    pub fn with_padding(mut self, padding: PlotPadding) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_x_tuning(mut self, tuning: DomainTuning) -> Self {
        self.x_tuning = tuning;
        self
    }

    #[must_use]
    pub fn with_y_tuning(mut self, tuning: DomainTuning) -> Self {
        self.y_tuning = tuning;
        self
    }

    #[must_use]
    pub fn with_tick_counts(mut self, x_tick_count: usize, y_tick_count: usize) -> Self {
        self.x_tick_count = x_tick_count;
        self.y_tick_count = y_tick_count;
        self
    }

    #[must_use]
    pub fn with_regression(mut self, show_regression: bool) -> Self {
        self.show_regression = show_regression;
        self
    }

    pub fn plot_area(self) -> VizResult<PlotArea> {
        PlotArea::from_viewport(self.viewport, self.padding)
    }

    pub fn validate(self) -> VizResult<Self> {
        self.plot_area()?;
        self.x_tuning.validate()?;
        self.y_tuning.validate()?;
        Domain::new(self.empty_domain.min, self.empty_domain.max)?;
        Ok(self)
    }

    pub fn from_json_str(input: &str) -> VizResult<Self> {
        parse_json::<Self>(input, "scatter config")?.validate()
    }
}

/// Geometry of a correlation heatmap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatmapChartConfig {
    pub viewport: Viewport,
    /// Left/top padding hosts the row/column labels.
    #[serde(default = "default_heatmap_padding")]
    pub padding: PlotPadding,
    #[serde(default = "default_cell_gap")]
    pub cell_gap_px: f64,
    #[serde(default)]
    pub cell_corner_radius_px: f64,
    #[serde(default = "default_true")]
    pub show_values: bool,
    #[serde(default = "default_value_decimals")]
    pub value_decimals: usize,
}

fn default_heatmap_padding() -> PlotPadding {
    PlotPadding {
        left: 110.0,
        top: 40.0,
        right: 16.0,
        bottom: 16.0,
    }
}

fn default_cell_gap() -> f64 {
    2.0
}

fn default_value_decimals() -> usize {
    2
}

impl HeatmapChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            padding: default_heatmap_padding(),
            cell_gap_px: default_cell_gap(),
            cell_corner_radius_px: 0.0,
            show_values: true,
            value_decimals: default_value_decimals(),
        }
    }

    #[must_use]
    pub fn with_cell_gap(mut self, cell_gap_px: f64) -> Self {
        self.cell_gap_px = cell_gap_px;
        self
    }

    #[must_use]
    pub fn with_values(mut self, show_values: bool) -> Self {
        self.show_values = show_values;
        self
    }

    pub fn plot_area(self) -> VizResult<PlotArea> {
        PlotArea::from_viewport(self.viewport, self.padding)
    }

    pub fn validate(self) -> VizResult<Self> {
        self.plot_area()?;
        if !self.cell_gap_px.is_finite() || self.cell_gap_px < 0.0 {
            return Err(VizError::InvalidData(
                "heatmap cell gap must be finite and >= 0".to_owned(),
            ));
        }
        if !self.cell_corner_radius_px.is_finite() || self.cell_corner_radius_px < 0.0 {
            return Err(VizError::InvalidData(
                "heatmap corner radius must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }

    pub fn from_json_str(input: &str) -> VizResult<Self> {
        parse_json::<Self>(input, "heatmap config")?.validate()
    }
}
