use criterion::{Criterion, criterion_group, criterion_main};
use langscope::api::{
    HeatmapChartConfig, RenderStyle, ScatterChartConfig, build_heatmap_scene_for_records,
    build_scatter_scene,
};
use langscope::core::{
    Domain, PixelRange, Viewport, correlation_matrix, pearson_correlation, project,
};
use langscope::data::{LanguageMetric, languages};
use langscope::interaction::ScatterViewState;
use std::hint::black_box;

fn bench_pearson_10k(c: &mut Criterion) {
    let xs: Vec<f64> = (0..10_000).map(|i| (i as f64 * 0.37).sin() * 50.0 + 50.0).collect();
    let ys: Vec<f64> = xs
        .iter()
        .enumerate()
        .map(|(i, x)| x * 0.8 + (i % 7) as f64)
        .collect();

    c.bench_function("pearson_10k", |b| {
        b.iter(|| {
            let _ = pearson_correlation(black_box(&xs), black_box(&ys)).expect("pearson");
        })
    });
}

fn bench_projection_round(c: &mut Criterion) {
    let domain = Domain::new(0.0, 100.0).expect("valid domain");
    let range = PixelRange::new(552.0, 24.0);

    c.bench_function("project_score_axis", |b| {
        b.iter(|| {
            let _ = project(black_box(61.62), black_box(domain), black_box(range));
        })
    });
}

fn bench_dataset_correlation_matrix(c: &mut Criterion) {
    c.bench_function("dataset_correlation_matrix", |b| {
        b.iter(|| {
            let _ = correlation_matrix(black_box(languages()), &LanguageMetric::SCORES)
                .expect("matrix");
        })
    });
}

fn bench_scene_builders(c: &mut Criterion) {
    let scatter = ScatterChartConfig::new(Viewport::new(1280, 720));
    let heatmap = HeatmapChartConfig::new(Viewport::new(720, 720));
    let style = RenderStyle::default();
    let view = ScatterViewState::hovering("Rust");

    c.bench_function("scatter_scene_dataset", |b| {
        b.iter(|| {
            let _ = build_scatter_scene(
                languages(),
                LanguageMetric::Popularity,
                LanguageMetric::Activity,
                scatter,
                style,
                black_box(&view),
            )
            .expect("scatter scene");
        })
    });
    c.bench_function("heatmap_scene_dataset", |b| {
        b.iter(|| {
            let _ = build_heatmap_scene_for_records(
                languages(),
                &LanguageMetric::SCORES,
                heatmap,
                style,
            )
            .expect("heatmap scene");
        })
    });
}

criterion_group!(
    benches,
    bench_pearson_10k,
    bench_projection_round,
    bench_dataset_correlation_matrix,
    bench_scene_builders
);
criterion_main!(benches);
