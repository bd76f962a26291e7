use std::f64::consts::{FRAC_PI_2, TAU};

use smallvec::SmallVec;
use tracing::debug;

use crate::core::MetricRecord;
use crate::data::{LanguageMetric, LanguageRecord};
use crate::error::{VizError, VizResult};
use crate::render::{
    CanvasLayerKind, ChartKind, ChartScene, CirclePrimitive, Color, FillStyle, LinePrimitive,
    PolygonPrimitive, RectPrimitive, TextHAlign, TextPrimitive,
};

use super::{ColorScheme, RadarChartConfig, RenderStyle};

/// One closed radar polygon: a value per axis, in axis order.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarSeries {
    pub name: String,
    pub values: Vec<f64>,
    pub color: Color,
}

impl RadarSeries {
    #[must_use]
    pub fn new(name: impl Into<String>, values: Vec<f64>, color: Color) -> Self {
        Self {
            name: name.into(),
            values,
            color,
        }
    }

    #[must_use]
    pub fn from_record<R: MetricRecord>(record: &R, metrics: &[R::Metric], color: Color) -> Self {
        Self::new(
            record.name(),
            metrics
                .iter()
                .map(|&metric| record.metric_value(metric))
                .collect(),
            color,
        )
    }

    /// Series for a language; `None` keeps the language's brand color.
    pub fn from_language(
        record: &LanguageRecord,
        metrics: &[LanguageMetric],
        color: Option<Color>,
    ) -> VizResult<Self> {
        let color = match color {
            Some(color) => color,
            None => Color::from_hex(record.color)?,
        };
        Ok(Self::from_record(record, metrics, color))
    }
}

/// One series per language, colored by `scheme`.
pub fn language_radar_series(
    records: &[&LanguageRecord],
    metrics: &[LanguageMetric],
    scheme: ColorScheme,
) -> VizResult<Vec<RadarSeries>> {
    let own_colors = records
        .iter()
        .map(|record| Color::from_hex(record.color))
        .collect::<VizResult<Vec<_>>>()?;
    let colors = scheme.resolve(&own_colors);
    Ok(records
        .iter()
        .zip(colors)
        .map(|(record, color)| RadarSeries::from_record(*record, metrics, color))
        .collect())
}

/// Angle of axis `index` out of `axis_count`; axis 0 points straight up.
#[must_use]
pub fn radar_angle(index: usize, axis_count: usize) -> f64 {
    TAU * index as f64 / axis_count.max(1) as f64 - FRAC_PI_2
}

/// Pixel position of `value` on axis `index`.
#[must_use]
pub fn radar_vertex(
    config: RadarChartConfig,
    index: usize,
    axis_count: usize,
    value: f64,
) -> (f64, f64) {
    let (cx, cy) = config.viewport.center();
    let distance = value / config.scale_max * config.max_radius();
    let angle = radar_angle(index, axis_count);
    (cx + distance * angle.cos(), cy + distance * angle.sin())
}

fn format_ring_value(value: f64) -> String {
    if value.fract().abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// Builds the radar scene for `series` over the axes named by `labels`.
///
/// No series yields rings, spokes and labels only.
pub fn build_radar_scene<S: AsRef<str>>(
    series: &[RadarSeries],
    labels: &[S],
    config: RadarChartConfig,
    style: RenderStyle,
) -> VizResult<ChartScene> {
    let config = config.validate()?;
    let style = style.validate()?;
    let axis_count = labels.len();
    if axis_count == 0 {
        return Err(VizError::InvalidData(
            "radar chart needs at least one axis".to_owned(),
        ));
    }
    for entry in series {
        if entry.values.len() != axis_count {
            return Err(VizError::LengthMismatch {
                left: entry.values.len(),
                right: axis_count,
            });
        }
    }

    let viewport = config.viewport;
    let (cx, cy) = viewport.center();
    let max_radius = config.max_radius();
    let mut scene = ChartScene::new(ChartKind::Radar, viewport);

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

    for ring in 1..=config.ring_count {
        let fraction = ring as f64 / config.ring_count as f64;
        scene.push_circle(
            CanvasLayerKind::Grid,
            CirclePrimitive::stroked(
                cx,
                cy,
                max_radius * fraction,
                style.grid_line_width,
                style.grid_color,
            ),
        );
        if config.show_ring_labels {
            scene.push_text(
                CanvasLayerKind::Axis,
                TextPrimitive::new(
                    format_ring_value(config.scale_max * fraction),
                    cx + 4.0,
                    cy - max_radius * fraction,
                    style.tick_label_font_size_px,
                    style.tick_label_color,
                    TextHAlign::Left,
                ),
            );
        }
    }

    for (index, label) in labels.iter().enumerate() {
        let (spoke_x, spoke_y) = radar_vertex(config, index, axis_count, config.scale_max);
        scene.push_line(
            CanvasLayerKind::Grid,
            LinePrimitive::new(cx, cy, spoke_x, spoke_y, style.grid_line_width, style.spoke_color),
        );

        let angle = radar_angle(index, axis_count);
        let label_distance = max_radius + config.label_offset_px;
        let label_x = cx + label_distance * angle.cos();
        let h_align = if angle.cos().abs() < 1e-6 {
            TextHAlign::Center
        } else if angle.cos() > 0.0 {
            TextHAlign::Left
        } else {
            TextHAlign::Right
        };
        let text = label.as_ref();
        if !text.is_empty() {
            scene.push_text(
                CanvasLayerKind::Axis,
                TextPrimitive::new(
                    text,
                    label_x,
                    cy + label_distance * angle.sin(),
                    style.axis_label_font_size_px,
                    style.axis_label_color,
                    h_align,
                ),
            );
        }
    }

    for entry in series {
        let vertices: SmallVec<[(f64, f64); 12]> = entry
            .values
            .iter()
            .enumerate()
            .map(|(index, &value)| radar_vertex(config, index, axis_count, value))
            .collect();

        scene.push_polygon(
            CanvasLayerKind::Series,
            PolygonPrimitive::new(vertices.to_vec())
                .with_fill(entry.color.with_alpha(style.series_fill_alpha))
                .with_stroke(style.series_stroke_width, entry.color),
        );
        if config.show_vertex_markers {
            for &(x, y) in &vertices {
                let marker = CirclePrimitive::filled(x, y, style.vertex_radius_px, entry.color);
                let marker = match style.vertex_outline_color {
                    Some(outline) => marker.with_stroke(style.series_stroke_width, outline),
                    None => marker,
                };
                scene.push_circle(CanvasLayerKind::Series, marker);
            }
        }
    }

    debug!(
        series = series.len(),
        axes = axis_count,
        data_primitives = scene.data_primitive_count(),
        chrome_primitives = scene.chrome_primitive_count(),
        "built radar scene"
    );
    Ok(scene)
}
