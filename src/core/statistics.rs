//! Descriptive statistics over metric columns.
//!
//! Every function here is pure. Degenerate inputs that would divide by zero
//! (constant series) resolve to a finite fallback instead of NaN/Infinity so
//! charts stay drawable when, for example, every language ties on a metric.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::correlation::CorrelationMatrix;
use crate::core::record::{MetricKey, MetricRecord, metric_values, parse_metric_keys};
use crate::error::{VizError, VizResult};

/// Denominator used whenever a variance or span collapses to zero.
pub const ZERO_SPAN_DENOMINATOR: f64 = 1.0;

pub const CORRELATION_STRONG: f64 = 0.7;
pub const CORRELATION_MODERATE: f64 = 0.5;
pub const CORRELATION_WEAK: f64 = 0.3;

pub fn mean(values: &[f64]) -> VizResult<f64> {
    if values.is_empty() {
        return Err(VizError::EmptyInput);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

pub fn min_max(values: &[f64]) -> VizResult<(f64, f64)> {
    let mut iter = values.iter().copied();
    let first = iter.next().ok_or(VizError::EmptyInput)?;
    Ok(iter.fold((first, first), |(lo, hi), value| {
        (lo.min(value), hi.max(value))
    }))
}

/// Aggregate view of one metric column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricSummary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl MetricSummary {
    #[must_use]
    pub fn range(self) -> f64 {
        self.max - self.min
    }
}

pub fn summarize(values: &[f64]) -> VizResult<MetricSummary> {
    let (min, max) = min_max(values)?;
    Ok(MetricSummary {
        count: values.len(),
        min,
        max,
        mean: mean(values)?,
    })
}

/// Summarizes one metric across a record set.
pub fn summarize_metric<R: MetricRecord>(
    records: &[R],
    metric: R::Metric,
) -> VizResult<MetricSummary> {
    summarize(&metric_values(records, metric))
}

/// Min/max normalization into `[0, 1]`.
///
/// A constant series has zero span; it normalizes to all zeros.
#[must_use]
pub fn normalize(values: &[f64]) -> Vec<f64> {
    let Ok((min, max)) = min_max(values) else {
        return Vec::new();
    };
    let span = max - min;
    let denominator = if span == 0.0 {
        ZERO_SPAN_DENOMINATOR
    } else {
        span
    };
    values
        .iter()
        .map(|value| (value - min) / denominator)
        .collect()
}

/// Second moments over deviations divided by `scale_x`/`scale_y`, so squaring
/// stays finite for large-magnitude inputs.
struct Moments {
    mean_x: f64,
    mean_y: f64,
    scale_x: f64,
    scale_y: f64,
    covariance: f64,
    variance_x: f64,
    variance_y: f64,
}

/// Mean that is exact for constant columns, so their variance is exactly zero.
fn column_mean(values: &[f64]) -> VizResult<f64> {
    let (min, max) = min_max(values)?;
    if min == max {
        return Ok(min);
    }
    mean(values)
}

fn deviation_scale(values: &[f64], center: f64) -> f64 {
    let scale = values
        .iter()
        .fold(0.0_f64, |widest, value| widest.max((value - center).abs()));
    if scale == 0.0 {
        ZERO_SPAN_DENOMINATOR
    } else {
        scale
    }
}

fn paired_moments(xs: &[f64], ys: &[f64]) -> VizResult<Moments> {
    if xs.len() != ys.len() {
        return Err(VizError::LengthMismatch {
            left: xs.len(),
            right: ys.len(),
        });
    }
    let mean_x = column_mean(xs)?;
    let mean_y = column_mean(ys)?;
    let scale_x = deviation_scale(xs, mean_x);
    let scale_y = deviation_scale(ys, mean_y);

    let mut covariance = 0.0;
    let mut variance_x = 0.0;
    let mut variance_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = (x - mean_x) / scale_x;
        let dy = (y - mean_y) / scale_y;
        covariance += dx * dy;
        variance_x += dx * dx;
        variance_y += dy * dy;
    }

    Ok(Moments {
        mean_x,
        mean_y,
        scale_x,
        scale_y,
        covariance,
        variance_x,
        variance_y,
    })
}

/// Pearson correlation coefficient, clamped into `[-1, 1]`.
///
/// When either series has zero variance the denominator falls back to
/// [`ZERO_SPAN_DENOMINATOR`]. The covariance of such a pair is zero, so the
/// coefficient resolves to `0.0`. Inputs whose deviations overflow `f64` also
/// resolve to `0.0`.
pub fn pearson_correlation(xs: &[f64], ys: &[f64]) -> VizResult<f64> {
    let moments = paired_moments(xs, ys)?;
    let denominator = if moments.variance_x == 0.0 || moments.variance_y == 0.0 {
        debug!(len = xs.len(), "zero-variance series, correlation saturates");
        ZERO_SPAN_DENOMINATOR
    } else {
        moments.variance_x.sqrt() * moments.variance_y.sqrt()
    };

    let r = moments.covariance / denominator;
    if !r.is_finite() {
        debug!(len = xs.len(), "non-finite correlation, saturates to zero");
        return Ok(0.0);
    }
    trace!(r, len = xs.len(), "pearson correlation");
    Ok(r.clamp(-1.0, 1.0))
}

/// Coefficient of determination for a simple linear fit.
pub fn r_squared(xs: &[f64], ys: &[f64]) -> VizResult<f64> {
    let r = pearson_correlation(xs, ys)?;
    Ok(r * r)
}

/// Ordinary least squares fit `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Regression {
    pub slope: f64,
    pub intercept: f64,
}

impl Regression {
    #[must_use]
    pub fn predict(self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Least-squares regression of `ys` on `xs`.
///
/// With zero variance in `xs` the fit degenerates to a horizontal line through
/// the mean of `ys`.
pub fn linear_regression(xs: &[f64], ys: &[f64]) -> VizResult<Regression> {
    let moments = paired_moments(xs, ys)?;
    let mut slope = if moments.variance_x == 0.0 {
        debug!(len = xs.len(), "zero-variance x series, regression is horizontal");
        0.0
    } else {
        moments.covariance / moments.variance_x * (moments.scale_y / moments.scale_x)
    };
    if !slope.is_finite() {
        debug!(len = xs.len(), "non-finite slope, regression is horizontal");
        slope = 0.0;
    }

    Ok(Regression {
        slope,
        intercept: moments.mean_y - slope * moments.mean_x,
    })
}

/// Pairwise correlation across `metrics` for the given records.
///
/// Each unordered pair is computed once and mirrored; the diagonal is fixed at
/// `1.0` without computation.
pub fn correlation_matrix<R: MetricRecord>(
    records: &[R],
    metrics: &[R::Metric],
) -> VizResult<CorrelationMatrix> {
    if records.is_empty() {
        return Err(VizError::EmptyInput);
    }

    let columns: Vec<Vec<f64>> = metrics
        .iter()
        .map(|metric| metric_values(records, *metric))
        .collect();
    let keys: Vec<&str> = metrics.iter().map(|metric| metric.as_str()).collect();

    let matrix = CorrelationMatrix::from_upper_triangle(&keys, |row, col| {
        pearson_correlation(&columns[row], &columns[col])
    })?;
    debug!(
        records = records.len(),
        metrics = metrics.len(),
        "computed correlation matrix"
    );
    Ok(matrix)
}

/// String-keyed variant of [`correlation_matrix`].
pub fn correlation_matrix_by_keys<R: MetricRecord>(
    records: &[R],
    keys: &[&str],
) -> VizResult<CorrelationMatrix> {
    let metrics = parse_metric_keys::<R::Metric>(keys)?;
    correlation_matrix(records, &metrics)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CorrelationStrength {
    Strong,
    Moderate,
    Weak,
    Negligible,
}

impl CorrelationStrength {
    #[must_use]
    pub fn classify(r: f64) -> Self {
        let magnitude = r.abs();
        if magnitude >= CORRELATION_STRONG {
            Self::Strong
        } else if magnitude >= CORRELATION_MODERATE {
            Self::Moderate
        } else if magnitude >= CORRELATION_WEAK {
            Self::Weak
        } else {
            Self::Negligible
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CorrelationStrength, normalize, pearson_correlation};

    #[test]
    fn normalize_constant_series_is_all_zero() {
        assert_eq!(normalize(&[4.0, 4.0, 4.0]), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn pearson_rejects_length_mismatch() {
        assert!(pearson_correlation(&[1.0, 2.0], &[1.0]).is_err());
    }

    #[test]
    fn strength_uses_magnitude() {
        assert_eq!(CorrelationStrength::classify(-0.85), CorrelationStrength::Strong);
        assert_eq!(CorrelationStrength::classify(0.57), CorrelationStrength::Moderate);
        assert_eq!(CorrelationStrength::classify(0.31), CorrelationStrength::Weak);
        assert_eq!(CorrelationStrength::classify(0.1), CorrelationStrength::Negligible);
    }
}
