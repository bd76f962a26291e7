use std::fmt;
use std::str::FromStr;

use crate::error::{VizError, VizResult};

/// Named numeric field on a record.
pub trait MetricKey:
    Copy + Eq + fmt::Debug + fmt::Display + FromStr<Err = VizError> + 'static
{
    /// Canonical key, e.g. `"activity"`.
    fn as_str(self) -> &'static str;

    /// Human readable axis label, e.g. `"Activity"`.
    fn label(self) -> &'static str;

    fn all() -> &'static [Self];
}

/// Read-only access to the metrics of one dataset row.
pub trait MetricRecord {
    type Metric: MetricKey;

    fn name(&self) -> &str;

    fn metric_value(&self, metric: Self::Metric) -> f64;

    /// `#RRGGBB` accent used when the record is drawn as a point or series.
    fn accent_hex(&self) -> Option<&str> {
        None
    }

    fn metric_value_by_key(&self, key: &str) -> VizResult<f64> {
        let metric: Self::Metric = key.parse()?;
        Ok(self.metric_value(metric))
    }
}

/// Extracts one metric column from a record set.
pub fn metric_values<R: MetricRecord>(records: &[R], metric: R::Metric) -> Vec<f64> {
    records
        .iter()
        .map(|record| record.metric_value(metric))
        .collect()
}

/// Parses string keys into typed metrics, preserving order.
pub fn parse_metric_keys<M: MetricKey>(keys: &[&str]) -> VizResult<Vec<M>> {
    keys.iter().map(|key| key.parse::<M>()).collect()
}
