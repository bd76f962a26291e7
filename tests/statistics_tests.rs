use approx::assert_relative_eq;
use langscope::VizError;
use langscope::core::{
    CorrelationStrength, linear_regression, mean, metric_values, normalize, pearson_correlation,
    r_squared, summarize, summarize_metric,
};
use langscope::data::{LanguageMetric, languages};

#[test]
fn mean_of_empty_input_is_an_error() {
    assert!(matches!(mean(&[]), Err(VizError::EmptyInput)));
}

#[test]
fn mean_matches_arithmetic_average() {
    let value = mean(&[58.2, 51.8, 54.3]).expect("mean");
    assert_relative_eq!(value, 54.766_666_666_666_67, epsilon = 1e-9);
}

#[test]
fn summarize_reports_count_extremes_and_mean() {
    let summary = summarize(&[3.0, 9.0, 6.0]).expect("summary");
    assert_eq!(summary.count, 3);
    assert_eq!(summary.min, 3.0);
    assert_eq!(summary.max, 9.0);
    assert_eq!(summary.range(), 6.0);
    assert_relative_eq!(summary.mean, 6.0);
}

#[test]
fn summarize_metric_over_language_table() {
    let summary = summarize_metric(languages(), LanguageMetric::Popularity).expect("summary");
    assert_eq!(summary.count, 12);
    assert_eq!(summary.min, 46.3);
    assert_eq!(summary.max, 72.8);
}

#[test]
fn normalize_maps_extremes_to_unit_interval() {
    let values = normalize(&[10.0, 15.0, 20.0]);
    assert_eq!(values, vec![0.0, 0.5, 1.0]);
    assert!(normalize(&[]).is_empty());
}

#[test]
fn two_point_pearson_is_perfectly_negative() {
    let r = pearson_correlation(&[58.2, 51.8], &[61.62, 69.44]).expect("pearson");
    assert_relative_eq!(r, -1.0, epsilon = 1e-12);
}

#[test]
fn perfectly_linear_series_correlate_to_one() {
    let xs = [1.0, 2.0, 3.0, 4.0];
    let ys = [10.0, 20.0, 30.0, 40.0];
    assert_relative_eq!(
        pearson_correlation(&xs, &ys).expect("pearson"),
        1.0,
        epsilon = 1e-12
    );
    assert_relative_eq!(r_squared(&xs, &ys).expect("r squared"), 1.0, epsilon = 1e-12);
}

#[test]
fn zero_variance_series_saturate_to_zero() {
    let r = pearson_correlation(&[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0]).expect("pearson");
    assert_eq!(r, 0.0);
    let r = pearson_correlation(&[7.0], &[3.0]).expect("single point");
    assert_eq!(r, 0.0);
}

#[test]
fn large_magnitude_series_stay_finite() {
    let xs = [1e200, -1e200, 5e199];
    let r = pearson_correlation(&xs, &xs).expect("pearson");
    assert_relative_eq!(r, 1.0, epsilon = 1e-12);

    let ys = [-2e200, 2e200, -1e200];
    let r = pearson_correlation(&xs, &ys).expect("pearson");
    assert_relative_eq!(r, -1.0, epsilon = 1e-12);

    let fit = linear_regression(&xs, &ys).expect("fit");
    assert_relative_eq!(fit.slope, -2.0, epsilon = 1e-12);
    assert!(fit.intercept.is_finite());
}

#[test]
fn overflowing_deviations_saturate_to_zero() {
    let xs = [f64::MAX, -f64::MAX, f64::MAX];
    let r = pearson_correlation(&xs, &[1.0, 2.0, 3.0]).expect("pearson");
    assert_eq!(r, 0.0);
}

#[test]
fn pearson_rejects_empty_and_mismatched_input() {
    assert!(matches!(
        pearson_correlation(&[], &[]),
        Err(VizError::EmptyInput)
    ));
    assert!(matches!(
        pearson_correlation(&[1.0, 2.0, 3.0], &[1.0, 2.0]),
        Err(VizError::LengthMismatch { left: 3, right: 2 })
    ));
}

#[test]
fn activity_and_overall_correlate_strongly_in_dataset() {
    let activity = metric_values(languages(), LanguageMetric::Activity);
    let overall = metric_values(languages(), LanguageMetric::Overall);
    let r = pearson_correlation(&activity, &overall).expect("pearson");
    assert!(r > 0.7, "expected strong positive correlation, got {r}");
    assert_eq!(CorrelationStrength::classify(r), CorrelationStrength::Strong);
}

#[test]
fn regression_recovers_exact_line() {
    let fit = linear_regression(&[0.0, 1.0, 2.0, 3.0], &[1.0, 3.0, 5.0, 7.0]).expect("fit");
    assert_relative_eq!(fit.slope, 2.0, epsilon = 1e-12);
    assert_relative_eq!(fit.intercept, 1.0, epsilon = 1e-12);
    assert_relative_eq!(fit.predict(10.0), 21.0, epsilon = 1e-12);
}

#[test]
fn regression_over_constant_x_is_horizontal_through_mean() {
    let fit = linear_regression(&[4.0, 4.0, 4.0], &[1.0, 2.0, 6.0]).expect("fit");
    assert_eq!(fit.slope, 0.0);
    assert_relative_eq!(fit.intercept, 3.0, epsilon = 1e-12);
}

#[test]
fn strength_bands_follow_magnitude() {
    assert_eq!(CorrelationStrength::classify(-0.85), CorrelationStrength::Strong);
    assert_eq!(CorrelationStrength::classify(0.57), CorrelationStrength::Moderate);
    assert_eq!(CorrelationStrength::classify(0.35), CorrelationStrength::Weak);
    assert_eq!(CorrelationStrength::classify(0.1), CorrelationStrength::Negligible);
}
