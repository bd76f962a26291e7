pub mod correlation;
pub mod projection;
pub mod record;
pub mod statistics;
pub mod types;

pub use correlation::CorrelationMatrix;
pub use projection::{Domain, DomainTuning, PixelRange, compute_domain, generate_ticks, project};
pub use record::{MetricKey, MetricRecord, metric_values, parse_metric_keys};
pub use statistics::{
    CorrelationStrength, MetricSummary, Regression, ZERO_SPAN_DENOMINATOR, correlation_matrix,
    correlation_matrix_by_keys, linear_regression, mean, min_max, normalize, pearson_correlation,
    r_squared, summarize, summarize_metric,
};
pub use types::{PlotArea, PlotPadding, ProjectedPoint, Viewport};
