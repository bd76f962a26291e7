use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{CorrelationMatrix, MetricKey, MetricRecord, PlotArea, correlation_matrix};
use crate::error::VizResult;
use crate::render::{
    CanvasLayerKind, ChartKind, ChartScene, Color, FillStyle, RectPrimitive, TextHAlign,
    TextPrimitive,
};

use super::{HeatmapChartConfig, RenderStyle};

const HUE_COOL: f64 = 220.0;
const HUE_WARM: f64 = 0.0;

/// One heatmap cell keyed by its row/column metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapCell {
    pub row: String,
    pub col: String,
    pub value: f64,
    pub is_diagonal: bool,
}

/// Cells in row-major order.
#[must_use]
pub fn heatmap_cells(matrix: &CorrelationMatrix) -> Vec<HeatmapCell> {
    let keys: Vec<&str> = matrix.keys().collect();
    let mut cells = Vec::with_capacity(keys.len() * keys.len());
    for (row, row_key) in keys.iter().enumerate() {
        for (col, col_key) in keys.iter().enumerate() {
            if let Some(value) = matrix.value_at(row, col) {
                cells.push(HeatmapCell {
                    row: (*row_key).to_owned(),
                    col: (*col_key).to_owned(),
                    value,
                    is_diagonal: row == col,
                });
            }
        }
    }
    cells
}

/// Off-diagonal cell color: `|r|` walks the hue ramp from cool to warm.
#[must_use]
pub fn correlation_color(r: f64) -> Color {
    let strength = if r.is_finite() { r.abs().min(1.0) } else { 0.0 };
    let hue = HUE_COOL + (HUE_WARM - HUE_COOL) * strength;
    Color::from_hsl(hue, 0.75, 0.5)
}

#[derive(Debug, Clone, Copy)]
struct HeatmapGrid {
    plot: PlotArea,
    cell_size: f64,
}

impl HeatmapGrid {
    fn new(plot: PlotArea, count: usize) -> Self {
        Self {
            plot,
            cell_size: plot.width().min(plot.height()) / count.max(1) as f64,
        }
    }

    fn cell_center(self, index: usize) -> f64 {
        (index as f64 + 0.5) * self.cell_size
    }
}

fn push_chrome(
    scene: &mut ChartScene,
    labels: &[&str],
    grid: HeatmapGrid,
    config: HeatmapChartConfig,
    style: RenderStyle,
) {
    let viewport = config.viewport;
    scene.push_rect(
        CanvasLayerKind::Background,
        RectPrimitive::new(
            0.0,
            0.0,
            f64::from(viewport.width),
            f64::from(viewport.height),
            FillStyle::Solid(style.background_color),
        ),
    );
    for (index, label) in labels.iter().enumerate() {
        if label.is_empty() {
            continue;
        }
        scene.push_text(
            CanvasLayerKind::Axis,
            TextPrimitive::new(
                *label,
                grid.plot.left - 8.0,
                grid.plot.top + grid.cell_center(index),
                style.axis_label_font_size_px,
                style.axis_label_color,
                TextHAlign::Right,
            ),
        );
        scene.push_text(
            CanvasLayerKind::Axis,
            TextPrimitive::new(
                *label,
                grid.plot.left + grid.cell_center(index),
                grid.plot.top / 2.0,
                style.axis_label_font_size_px,
                style.axis_label_color,
                TextHAlign::Center,
            ),
        );
    }
}

fn build_scene(
    matrix: Option<&CorrelationMatrix>,
    labels: &[&str],
    config: HeatmapChartConfig,
    style: RenderStyle,
) -> VizResult<ChartScene> {
    let config = config.validate()?;
    let style = style.validate()?;
    let grid = HeatmapGrid::new(config.plot_area()?, labels.len());
    let mut scene = ChartScene::new(ChartKind::Heatmap, config.viewport);
    push_chrome(&mut scene, labels, grid, config, style);

    let cells = matrix.map(heatmap_cells).unwrap_or_default();
    let size = matrix.map_or(0, CorrelationMatrix::len);
    let inner = (grid.cell_size - config.cell_gap_px).max(0.0);
    for (index, cell) in cells.iter().enumerate() {
        let (row, col) = (index / size, index % size);
        let x = grid.plot.left + col as f64 * grid.cell_size + config.cell_gap_px / 2.0;
        let y = grid.plot.top + row as f64 * grid.cell_size + config.cell_gap_px / 2.0;
        let fill = if cell.is_diagonal {
            FillStyle::LinearGradient {
                from: style.heatmap_diagonal_from,
                to: style.heatmap_diagonal_to,
            }
        } else {
            FillStyle::Solid(correlation_color(cell.value))
        };
        scene.push_rect(
            CanvasLayerKind::Series,
            RectPrimitive::new(x, y, inner, inner, fill)
                .with_corner_radius(config.cell_corner_radius_px.min(inner / 2.0)),
        );
        if config.show_values {
            scene.push_text(
                CanvasLayerKind::Overlay,
                TextPrimitive::new(
                    format!("{:.*}", config.value_decimals, cell.value),
                    grid.plot.left + grid.cell_center(col),
                    grid.plot.top + grid.cell_center(row),
                    style.heatmap_value_font_size_px,
                    style.heatmap_text_color,
                    TextHAlign::Center,
                ),
            );
        }
    }

    debug!(
        size,
        cells = cells.len(),
        data_primitives = scene.data_primitive_count(),
        chrome_primitives = scene.chrome_primitive_count(),
        "built heatmap scene"
    );
    Ok(scene)
}

/// Heatmap of a prepared matrix, labelled with the matrix keys.
pub fn build_heatmap_scene(
    matrix: &CorrelationMatrix,
    config: HeatmapChartConfig,
    style: RenderStyle,
) -> VizResult<ChartScene> {
    let labels: Vec<&str> = matrix.keys().collect();
    build_scene(Some(matrix), &labels, config, style)
}

/// Computes the correlation matrix of `metrics` over `records` and draws it,
/// labelled with metric labels. No records yields labels and background only.
pub fn build_heatmap_scene_for_records<R: MetricRecord>(
    records: &[R],
    metrics: &[R::Metric],
    config: HeatmapChartConfig,
    style: RenderStyle,
) -> VizResult<ChartScene> {
    let labels: Vec<&str> = metrics.iter().map(|metric| metric.label()).collect();
    if records.is_empty() {
        return build_scene(None, &labels, config, style);
    }
    let matrix = correlation_matrix(records, metrics)?;
    build_scene(Some(&matrix), &labels, config, style)
}
