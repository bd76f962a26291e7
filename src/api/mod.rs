mod chart_config;
mod engine;
mod heatmap_render_frame_builder;
mod json_contract;
mod radar_render_frame_builder;
mod render_style;
mod scatter_render_frame_builder;

pub use chart_config::{HeatmapChartConfig, RadarChartConfig, ScatterChartConfig};
pub use engine::ChartEngine;
pub use heatmap_render_frame_builder::{
    HeatmapCell, build_heatmap_scene, build_heatmap_scene_for_records, correlation_color,
    heatmap_cells,
};
pub use json_contract::{CHART_SCENE_JSON_SCHEMA_V1, ChartSceneJsonContractV1};
pub use radar_render_frame_builder::{
    RadarSeries, build_radar_scene, language_radar_series, radar_angle, radar_vertex,
};
pub use render_style::{
    CHART_DANGER, CHART_INFO, CHART_NEUTRAL, CHART_PRIMARY, CHART_SUCCESS, CHART_WARNING,
    ColorScheme, RenderStyle,
};
pub use scatter_render_frame_builder::{
    RegressionSegment, ScatterLayout, build_scatter_scene, project_scatter_points,
};
