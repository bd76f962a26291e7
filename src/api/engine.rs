use tracing::trace;

use crate::core::{CorrelationMatrix, MetricRecord};
use crate::error::VizResult;
use crate::interaction::ScatterViewState;
use crate::render::{ChartScene, Renderer};

use super::{
    HeatmapChartConfig, RadarChartConfig, RadarSeries, RenderStyle, ScatterChartConfig,
    build_heatmap_scene, build_heatmap_scene_for_records, build_radar_scene, build_scatter_scene,
};

/// Pairs a rendering backend with a style and hands it validated scenes.
///
/// The engine keeps no chart state between calls; each `render_*` builds a
/// fresh scene from its arguments.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    style: RenderStyle,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, style: RenderStyle) -> VizResult<Self> {
        Ok(Self {
            renderer,
            style: style.validate()?,
        })
    }

    #[must_use]
    pub fn style(&self) -> RenderStyle {
        self.style
    }

    pub fn set_style(&mut self, style: RenderStyle) -> VizResult<()> {
        self.style = style.validate()?;
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn present(&mut self, scene: ChartScene) -> VizResult<ChartScene> {
        scene.validate()?;
        self.renderer.render_scene(&scene)?;
        trace!(chart = ?scene.chart, "presented scene");
        Ok(scene)
    }

    pub fn render_radar<S: AsRef<str>>(
        &mut self,
        series: &[RadarSeries],
        labels: &[S],
        config: RadarChartConfig,
    ) -> VizResult<ChartScene> {
        let scene = build_radar_scene(series, labels, config, self.style)?;
        self.present(scene)
    }

    pub fn render_scatter<M: MetricRecord>(
        &mut self,
        records: &[M],
        x_metric: M::Metric,
        y_metric: M::Metric,
        config: ScatterChartConfig,
        view: &ScatterViewState,
    ) -> VizResult<ChartScene> {
        let scene = build_scatter_scene(records, x_metric, y_metric, config, self.style, view)?;
        self.present(scene)
    }

    pub fn render_heatmap(
        &mut self,
        matrix: &CorrelationMatrix,
        config: HeatmapChartConfig,
    ) -> VizResult<ChartScene> {
        let scene = build_heatmap_scene(matrix, config, self.style)?;
        self.present(scene)
    }

    pub fn render_heatmap_for_records<M: MetricRecord>(
        &mut self,
        records: &[M],
        metrics: &[M::Metric],
        config: HeatmapChartConfig,
    ) -> VizResult<ChartScene> {
        let scene = build_heatmap_scene_for_records(records, metrics, config, self.style)?;
        self.present(scene)
    }
}
