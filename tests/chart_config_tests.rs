use langscope::api::{
    ColorScheme, HeatmapChartConfig, RadarChartConfig, RenderStyle, ScatterChartConfig,
};
use langscope::core::{Domain, DomainTuning, PlotPadding, Viewport};
use langscope::render::Color;

#[test]
fn radar_config_fills_omitted_fields() {
    let config = RadarChartConfig::from_json_str(
        r#"{"viewport":{"width":500,"height":400},"radius_inset_px":60.0,"label_offset_px":30.0}"#,
    )
    .expect("radar config");
    assert_eq!(config.ring_count, 5);
    assert_eq!(config.scale_max, 100.0);
    assert!(!config.show_ring_labels);
    assert!(config.show_vertex_markers);
    assert_eq!(config.max_radius(), 140.0);
}

#[test]
fn radar_config_rejects_zero_rings() {
    let config = RadarChartConfig::new(Viewport::new(500, 500)).with_ring_count(0);
    assert!(config.validate().is_err());
}

#[test]
fn scatter_config_defaults_pad_both_axes() {
    let config =
        ScatterChartConfig::from_json_str(r#"{"viewport":{"width":800,"height":600}}"#)
            .expect("scatter config");
    assert_eq!(config, ScatterChartConfig::new(Viewport::new(800, 600)));
    assert_eq!(config.x_tuning.padding_absolute, 2.0);
    assert_eq!(config.empty_domain, Domain { min: 0.0, max: 100.0 });
    assert_eq!(config.padding, PlotPadding::default());
}

#[test]
fn scatter_config_rejects_invalid_tuning() {
    let config = ScatterChartConfig::new(Viewport::new(800, 600))
        .with_y_tuning(DomainTuning::default().with_min_span(0.0));
    assert!(config.validate().is_err());
    let cramped = ScatterChartConfig::new(Viewport::new(60, 60));
    assert!(cramped.validate().is_err());
}

#[test]
fn heatmap_config_rejects_negative_gap() {
    let config = HeatmapChartConfig::new(Viewport::new(400, 400)).with_cell_gap(-1.0);
    assert!(config.validate().is_err());
    assert!(HeatmapChartConfig::from_json_str("not json").is_err());
}

#[test]
fn style_validation_catches_bad_values() {
    assert!(RenderStyle::default().validate().is_ok());
    let style = RenderStyle {
        series_fill_alpha: 1.5,
        ..RenderStyle::default()
    };
    assert!(style.validate().is_err());
    let style = RenderStyle {
        point_radius_px: 0.0,
        ..RenderStyle::default()
    };
    assert!(style.validate().is_err());
}

#[test]
fn color_schemes_wrap_fixed_palettes() {
    let own = vec![Color::rgb(1.0, 0.0, 0.0); 10];
    assert_eq!(ColorScheme::Default.resolve(&own), own);
    let colorblind = ColorScheme::Colorblind.resolve(&own);
    assert_eq!(colorblind.len(), 10);
    assert_eq!(colorblind[8], colorblind[0]);
    assert_eq!(ColorScheme::HighContrast.display_name(), "High Contrast");
}
