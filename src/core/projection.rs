use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::statistics::{ZERO_SPAN_DENOMINATOR, min_max};
use crate::error::{VizError, VizResult};

/// Numeric range an axis represents before projection to pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    pub fn new(min: f64, max: f64) -> VizResult<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(VizError::InvalidData(format!(
                "domain must be finite with min <= max, got [{min}, {max}]"
            )));
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.span() == 0.0
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    #[must_use]
    pub fn clamp(self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// Pixel interval an axis is drawn across. `start > end` inverts the axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRange {
    pub start: f64,
    pub end: f64,
}

impl PixelRange {
    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn length(self) -> f64 {
        (self.end - self.start).abs()
    }
}

/// Tuning controls for fitting a domain to data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainTuning {
    #[serde(default)]
    pub padding_absolute: f64,
    #[serde(default)]
    pub hard_bounds: Option<Domain>,
    #[serde(default = "default_min_span")]
    pub min_span: f64,
}

fn default_min_span() -> f64 {
    1.0
}

impl Default for DomainTuning {
    fn default() -> Self {
        Self {
            padding_absolute: 0.0,
            hard_bounds: None,
            min_span: default_min_span(),
        }
    }
}

impl DomainTuning {
    /// Tuning for 0..=100 score axes.
    #[must_use]
    pub fn score_axis(padding_absolute: f64) -> Self {
        Self {
            padding_absolute,
            hard_bounds: Some(Domain {
                min: 0.0,
                max: 100.0,
            }),
            min_span: default_min_span(),
        }
    }

    #[must_use]
    pub fn with_padding(mut self, padding_absolute: f64) -> Self {
        self.padding_absolute = padding_absolute;
        self
    }

    #[must_use]
    pub fn with_hard_bounds(mut self, bounds: Domain) -> Self {
        self.hard_bounds = Some(bounds);
        self
    }

    #[must_use]
    pub fn with_min_span(mut self, min_span: f64) -> Self {
        self.min_span = min_span;
        self
    }

    pub fn validate(self) -> VizResult<Self> {
        if !self.padding_absolute.is_finite() || self.padding_absolute < 0.0 {
            return Err(VizError::InvalidData(
                "domain padding must be finite and >= 0".to_owned(),
            ));
        }
        if !self.min_span.is_finite() || self.min_span <= 0.0 {
            return Err(VizError::InvalidData(
                "domain min span must be finite and > 0".to_owned(),
            ));
        }
        if let Some(bounds) = self.hard_bounds {
            Domain::new(bounds.min, bounds.max)?;
            if bounds.span() < self.min_span {
                return Err(VizError::InvalidData(
                    "domain hard bounds must span at least min span".to_owned(),
                ));
            }
        }
        Ok(self)
    }
}

/// Fits a padded, integer-aligned domain around `values`.
///
/// `min = floor(min(values)) - padding`, `max = ceil(max(values)) + padding`,
/// then clamped to the hard bounds. Values entirely outside the bounds collapse
/// onto the nearer bound. A zero-width result is widened by `min_span`,
/// shifting back inside whichever hard bound it would cross.
pub fn compute_domain(values: &[f64], tuning: DomainTuning) -> VizResult<Domain> {
    let tuning = tuning.validate()?;
    if values.iter().any(|value| !value.is_finite()) {
        return Err(VizError::InvalidData(
            "domain values must be finite".to_owned(),
        ));
    }
    let (lowest, highest) = min_max(values).map_err(|_| VizError::EmptyDomain)?;

    let mut min = lowest.floor() - tuning.padding_absolute;
    let mut max = highest.ceil() + tuning.padding_absolute;
    if let Some(bounds) = tuning.hard_bounds {
        min = min.max(bounds.min);
        max = max.min(bounds.max);
        if min > max {
            // Every value lies past one bound: collapse onto that bound.
            let edge = bounds.clamp(max);
            min = edge;
            max = edge;
        }
    }

    if max - min <= 0.0 {
        debug!(
            value = min,
            min_span = tuning.min_span,
            "degenerate domain widened to min span"
        );
        max = min + tuning.min_span;
        if let Some(bounds) = tuning.hard_bounds {
            if max > bounds.max {
                max = bounds.max;
                min = max - tuning.min_span;
            }
            if min < bounds.min {
                min = bounds.min;
                max = min + tuning.min_span;
            }
        }
    }

    Ok(Domain { min, max })
}

/// Linear map from `domain` onto `range`.
///
/// A degenerate domain uses [`ZERO_SPAN_DENOMINATOR`] so the result stays
/// finite.
#[must_use]
pub fn project(value: f64, domain: Domain, range: PixelRange) -> f64 {
    let span = domain.span();
    let denominator = if span == 0.0 {
        ZERO_SPAN_DENOMINATOR
    } else {
        span
    };
    range.start + (value - domain.min) / denominator * (range.end - range.start)
}

/// Evenly spaced ticks from `domain.min` to `domain.max` inclusive.
///
/// Returns `tick_count + 1` values, or nothing when `tick_count == 0`.
#[must_use]
pub fn generate_ticks(domain: Domain, tick_count: usize) -> Vec<f64> {
    if tick_count == 0 {
        return Vec::new();
    }

    let span = domain.span();
    let mut ticks: Vec<f64> = (0..tick_count)
        .map(|step| domain.min + span * step as f64 / tick_count as f64)
        .collect();
    ticks.push(domain.max);
    ticks
}
