use tracing::{debug, warn};

use crate::core::{
    Domain, MetricKey, MetricRecord, PixelRange, PlotArea, ProjectedPoint, Regression,
    compute_domain, generate_ticks, linear_regression, metric_values, project,
};
use crate::error::VizResult;
use crate::interaction::ScatterViewState;
use crate::render::{
    CanvasLayerKind, ChartKind, ChartScene, CirclePrimitive, Color, FillStyle, LinePrimitive,
    RectPrimitive, TextHAlign, TextPrimitive,
};

use super::{RenderStyle, ScatterChartConfig};

/// Regression segment across the full x-domain, in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionSegment {
    pub regression: Regression,
    pub start: (f64, f64),
    pub end: (f64, f64),
}

/// Fitted domains and projected points of one scatter plot.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterLayout {
    pub plot: PlotArea,
    pub x_domain: Domain,
    pub y_domain: Domain,
    pub points: Vec<ProjectedPoint>,
    pub regression: Option<RegressionSegment>,
}

impl ScatterLayout {
    #[must_use]
    pub fn x_range(&self) -> PixelRange {
        PixelRange::new(self.plot.left, self.plot.right)
    }

    /// Y grows downwards in pixel space, so the range is inverted.
    #[must_use]
    pub fn y_range(&self) -> PixelRange {
        PixelRange::new(self.plot.bottom, self.plot.top)
    }

    #[must_use]
    pub fn point(&self, name: &str) -> Option<&ProjectedPoint> {
        self.points.iter().find(|point| point.name == name)
    }
}

/// Fits both axis domains and projects every record.
///
/// An empty record set falls back to `config.empty_domain` on both axes.
pub fn project_scatter_points<R: MetricRecord>(
    records: &[R],
    x_metric: R::Metric,
    y_metric: R::Metric,
    config: ScatterChartConfig,
) -> VizResult<ScatterLayout> {
    let config = config.validate()?;
    let plot = config.plot_area()?;
    let xs = metric_values(records, x_metric);
    let ys = metric_values(records, y_metric);

    let (x_domain, y_domain) = if records.is_empty() {
        (config.empty_domain, config.empty_domain)
    } else {
        (
            compute_domain(&xs, config.x_tuning)?,
            compute_domain(&ys, config.y_tuning)?,
        )
    };
    let x_range = PixelRange::new(plot.left, plot.right);
    let y_range = PixelRange::new(plot.bottom, plot.top);

    let points = records
        .iter()
        .zip(xs.iter().zip(ys.iter()))
        .map(|(record, (&value_x, &value_y))| ProjectedPoint {
            name: record.name().to_owned(),
            value_x,
            value_y,
            x: project(value_x, x_domain, x_range),
            y: project(value_y, y_domain, y_range),
        })
        .collect();

    let regression = if records.len() >= 2 {
        let regression = linear_regression(&xs, &ys)?;
        let start_y = y_domain.clamp(regression.predict(x_domain.min));
        let end_y = y_domain.clamp(regression.predict(x_domain.max));
        Some(RegressionSegment {
            regression,
            start: (x_range.start, project(start_y, y_domain, y_range)),
            end: (x_range.end, project(end_y, y_domain, y_range)),
        })
    } else {
        None
    };

    Ok(ScatterLayout {
        plot,
        x_domain,
        y_domain,
        points,
        regression,
    })
}

fn format_tick(value: f64, domain: Domain) -> String {
    if domain.span() >= 10.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

fn point_color<R: MetricRecord>(record: &R, style: RenderStyle) -> Color {
    match record.accent_hex().map(Color::from_hex) {
        Some(Ok(color)) => color,
        Some(Err(err)) => {
            warn!(record = record.name(), error = %err, "ignoring invalid accent color");
            style.point_color
        }
        None => style.point_color,
    }
}

fn push_axes(
    scene: &mut ChartScene,
    layout: &ScatterLayout,
    titles: (&str, &str),
    config: ScatterChartConfig,
    style: RenderStyle,
) {
    let plot = layout.plot;
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

    for tick in generate_ticks(layout.x_domain, config.x_tick_count) {
        let x = project(tick, layout.x_domain, layout.x_range());
        scene.push_line(
            CanvasLayerKind::Grid,
            LinePrimitive::new(x, plot.top, x, plot.bottom, style.grid_line_width, style.grid_color),
        );
        scene.push_text(
            CanvasLayerKind::Axis,
            TextPrimitive::new(
                format_tick(tick, layout.x_domain),
                x,
                plot.bottom + style.tick_label_font_size_px,
                style.tick_label_font_size_px,
                style.tick_label_color,
                TextHAlign::Center,
            ),
        );
    }
    for tick in generate_ticks(layout.y_domain, config.y_tick_count) {
        let y = project(tick, layout.y_domain, layout.y_range());
        scene.push_line(
            CanvasLayerKind::Grid,
            LinePrimitive::new(plot.left, y, plot.right, y, style.grid_line_width, style.grid_color),
        );
        scene.push_text(
            CanvasLayerKind::Axis,
            TextPrimitive::new(
                format_tick(tick, layout.y_domain),
                plot.left - 6.0,
                y,
                style.tick_label_font_size_px,
                style.tick_label_color,
                TextHAlign::Right,
            ),
        );
    }

    scene.push_line(
        CanvasLayerKind::Axis,
        LinePrimitive::new(
            plot.left,
            plot.bottom,
            plot.right,
            plot.bottom,
            style.grid_line_width,
            style.axis_color,
        ),
    );
    scene.push_line(
        CanvasLayerKind::Axis,
        LinePrimitive::new(
            plot.left,
            plot.top,
            plot.left,
            plot.bottom,
            style.grid_line_width,
            style.axis_color,
        ),
    );

    let (x_title, y_title) = titles;
    scene.push_text(
        CanvasLayerKind::Axis,
        TextPrimitive::new(
            x_title,
            (plot.left + plot.right) / 2.0,
            f64::from(viewport.height) - style.axis_label_font_size_px,
            style.axis_label_font_size_px,
            style.axis_label_color,
            TextHAlign::Center,
        ),
    );
    scene.push_text(
        CanvasLayerKind::Axis,
        TextPrimitive::new(
            y_title,
            plot.left,
            plot.top / 2.0,
            style.axis_label_font_size_px,
            style.axis_label_color,
            TextHAlign::Left,
        ),
    );
}

/// Builds a scatter plot of `y_metric` against `x_metric` with its
/// least-squares regression line.
pub fn build_scatter_scene<R: MetricRecord>(
    records: &[R],
    x_metric: R::Metric,
    y_metric: R::Metric,
    config: ScatterChartConfig,
    style: RenderStyle,
    view: &ScatterViewState,
) -> VizResult<ChartScene> {
    let style = style.validate()?;
    let layout = project_scatter_points(records, x_metric, y_metric, config)?;
    let mut scene = ChartScene::new(ChartKind::Scatter, config.viewport);
    push_axes(
        &mut scene,
        &layout,
        (x_metric.label(), y_metric.label()),
        config,
        style,
    );

    if config.show_regression {
        if let Some(segment) = layout.regression {
            scene.push_line(
                CanvasLayerKind::Series,
                LinePrimitive::new(
                    segment.start.0,
                    segment.start.1,
                    segment.end.0,
                    segment.end.1,
                    style.regression_width,
                    style.regression_color,
                ),
            );
        }
    }

    for (record, point) in records.iter().zip(layout.points.iter()) {
        let color = point_color(record, style);
        if view.is_hovered(&point.name) {
            scene.push_circle(
                CanvasLayerKind::Overlay,
                CirclePrimitive::filled(point.x, point.y, style.hover_point_radius_px, color)
                    .with_stroke(style.series_stroke_width, style.axis_label_color),
            );
            scene.push_text(
                CanvasLayerKind::Overlay,
                TextPrimitive::new(
                    format!(
                        "{}: {} {:.1}, {} {:.1}",
                        point.name,
                        x_metric.label(),
                        point.value_x,
                        y_metric.label(),
                        point.value_y
                    ),
                    point.x + style.hover_point_radius_px + 4.0,
                    point.y - style.hover_point_radius_px - 4.0,
                    style.tick_label_font_size_px,
                    style.axis_label_color,
                    TextHAlign::Left,
                ),
            );
            continue;
        }

        scene.push_circle(
            CanvasLayerKind::Series,
            CirclePrimitive::filled(point.x, point.y, style.point_radius_px, color),
        );
        if config.show_point_labels {
            scene.push_text(
                CanvasLayerKind::Series,
                TextPrimitive::new(
                    point.name.as_str(),
                    point.x + style.point_radius_px + 3.0,
                    point.y,
                    style.tick_label_font_size_px,
                    style.tick_label_color,
                    TextHAlign::Left,
                ),
            );
        }
    }

    debug!(
        records = records.len(),
        x_metric = x_metric.as_str(),
        y_metric = y_metric.as_str(),
        hovered = ?view.hovered,
        data_primitives = scene.data_primitive_count(),
        chrome_primitives = scene.chrome_primitive_count(),
        "built scatter scene"
    );
    Ok(scene)
}
