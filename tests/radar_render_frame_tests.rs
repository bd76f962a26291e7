use approx::assert_relative_eq;
use langscope::VizError;
use langscope::api::{
    ColorScheme, RadarChartConfig, RadarSeries, RenderStyle, build_radar_scene,
    language_radar_series, radar_angle, radar_vertex,
};
use langscope::core::{MetricKey, Viewport};
use langscope::data::{LanguageMetric, language_by_name, languages, top_languages};
use langscope::render::{CanvasLayerKind, Color, TextHAlign};

const LABELS: [&str; 4] = ["Overall", "Popularity", "Activity", "Health"];

fn rust_series() -> RadarSeries {
    let rust = language_by_name("Rust").expect("rust record");
    RadarSeries::from_language(rust, &LanguageMetric::SCORES, None).expect("series")
}

#[test]
fn first_axis_points_straight_up() {
    assert_relative_eq!(radar_angle(0, 4), -std::f64::consts::FRAC_PI_2);
    assert_relative_eq!(radar_angle(1, 4), 0.0, epsilon = 1e-12);

    let config = RadarChartConfig::new(Viewport::new(600, 600));
    assert_eq!(config.max_radius(), 240.0);
    let (x, y) = radar_vertex(config, 0, 4, 100.0);
    assert_relative_eq!(x, 300.0, epsilon = 1e-9);
    assert_relative_eq!(y, 60.0, epsilon = 1e-9);
    let (x, y) = radar_vertex(config, 1, 4, 50.0);
    assert_relative_eq!(x, 420.0, epsilon = 1e-9);
    assert_relative_eq!(y, 300.0, epsilon = 1e-9);
}

#[test]
fn single_series_scene_has_rings_spokes_and_one_polygon() {
    let config = RadarChartConfig::new(Viewport::new(600, 600));
    let scene = build_radar_scene(&[rust_series()], &LABELS, config, RenderStyle::default())
        .expect("radar scene");
    scene.validate().expect("valid scene");

    let grid = scene.layer(CanvasLayerKind::Grid).expect("grid layer");
    assert_eq!(grid.circles.len(), 5);
    assert_eq!(grid.lines.len(), 4);
    for (ring, expected) in grid.circles.iter().zip([48.0, 96.0, 144.0, 192.0, 240.0]) {
        assert_relative_eq!(ring.radius, expected, epsilon = 1e-9);
    }

    let series = scene.layer(CanvasLayerKind::Series).expect("series layer");
    assert_eq!(series.polygons.len(), 1);
    assert_eq!(series.polygons[0].points.len(), 4);
    assert_eq!(series.circles.len(), 4);

    let axis = scene.layer(CanvasLayerKind::Axis).expect("axis layer");
    let labels: Vec<&str> = axis.texts.iter().map(|text| text.text.as_str()).collect();
    assert_eq!(labels, LABELS.to_vec());
    assert_eq!(axis.texts[0].h_align, TextHAlign::Center);
    assert_eq!(axis.texts[1].h_align, TextHAlign::Left);
    assert_eq!(axis.texts[3].h_align, TextHAlign::Right);
}

#[test]
fn polygon_uses_brand_color_with_translucent_fill() {
    let config = RadarChartConfig::new(Viewport::new(600, 600));
    let style = RenderStyle::default();
    let scene = build_radar_scene(&[rust_series()], &LABELS, config, style).expect("radar scene");
    let polygon = &scene.layer(CanvasLayerKind::Series).expect("series").polygons[0];
    let brand = Color::from_hex("#CE422B").expect("hex");
    assert_eq!(polygon.stroke_color, Some(brand));
    assert_eq!(polygon.fill_color, Some(brand.with_alpha(style.series_fill_alpha)));
}

#[test]
fn no_series_yields_chrome_only() {
    let config = RadarChartConfig::new(Viewport::new(400, 400));
    let scene =
        build_radar_scene(&[], &LABELS, config, RenderStyle::default()).expect("radar scene");
    assert_eq!(scene.data_primitive_count(), 0);
    assert!(scene.chrome_primitive_count() > 0);
}

#[test]
fn multi_series_layout_adds_ring_labels() {
    let config = RadarChartConfig::multi_series(Viewport::new(700, 700));
    assert_eq!(config.max_radius(), 270.0);
    let records: Vec<_> = top_languages(3).iter().collect();
    let series = language_radar_series(&records, &LanguageMetric::SCORES, ColorScheme::Colorblind)
        .expect("series");
    let scene = build_radar_scene(&series, &LABELS, config, RenderStyle::multi_series())
        .expect("radar scene");

    let axis = scene.layer(CanvasLayerKind::Axis).expect("axis");
    assert_eq!(axis.texts.len(), 5 + LABELS.len());
    assert!(axis.texts.iter().any(|text| text.text == "100"));
    let layer = scene.layer(CanvasLayerKind::Series).expect("series");
    assert_eq!(layer.polygons.len(), 3);
    assert!(layer.circles.iter().all(|marker| marker.stroke_color.is_some()));
}

#[test]
fn ring_count_is_configurable() {
    let config = RadarChartConfig::new(Viewport::new(600, 600)).with_ring_count(3);
    let scene =
        build_radar_scene(&[], &LABELS, config, RenderStyle::default()).expect("radar scene");
    assert_eq!(scene.layer(CanvasLayerKind::Grid).expect("grid").circles.len(), 3);
}

#[test]
fn series_with_wrong_value_count_is_rejected() {
    let config = RadarChartConfig::new(Viewport::new(600, 600));
    let series = RadarSeries::new("broken", vec![10.0, 20.0], Color::rgb(1.0, 0.0, 0.0));
    let result = build_radar_scene(&[series], &LABELS, config, RenderStyle::default());
    assert!(matches!(
        result,
        Err(VizError::LengthMismatch { left: 2, right: 4 })
    ));
}

#[test]
fn inset_larger_than_viewport_is_rejected() {
    let config = RadarChartConfig::new(Viewport::new(100, 100));
    let labels: Vec<&str> = LanguageMetric::SCORES.iter().map(|m| m.label()).collect();
    assert!(build_radar_scene(&[], &labels, config, RenderStyle::default()).is_err());
}

#[test]
fn series_values_follow_metric_order() {
    let python = &languages()[4];
    let series = RadarSeries::from_language(
        python,
        &[LanguageMetric::Popularity, LanguageMetric::Health],
        Some(Color::rgb(0.0, 0.0, 1.0)),
    )
    .expect("series");
    assert_eq!(series.name, "Python");
    assert_eq!(series.values, vec![72.8, 65.3]);
}
