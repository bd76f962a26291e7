use serde::Serialize;

use crate::core::{CorrelationMatrix, MetricKey};
use crate::error::VizResult;

use super::LanguageMetric;

/// Published coefficient of one score against the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CorrelationFinding {
    pub metric: LanguageMetric,
    pub r: f64,
    pub r_squared: f64,
}

/// Group of languages that share an ecosystem profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub segment: &'static str,
    pub languages: &'static [&'static str],
    pub avg_score: f64,
    pub repos: u32,
}

/// Governance signal and its measured impact on health score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthIndicator {
    pub indicator: &'static str,
    pub impact: f64,
    pub description: &'static str,
}

static FINDINGS: [CorrelationFinding; 3] = [
    CorrelationFinding {
        metric: LanguageMetric::Activity,
        r: 0.85,
        r_squared: 0.72,
    },
    CorrelationFinding {
        metric: LanguageMetric::Health,
        r: 0.68,
        r_squared: 0.46,
    },
    CorrelationFinding {
        metric: LanguageMetric::Popularity,
        r: 0.57,
        r_squared: 0.33,
    },
];

static SEGMENTS: [Segment; 5] = [
    Segment {
        segment: "High Performance",
        languages: &["Rust", "C++", "Go"],
        avg_score: 46.81,
        repos: 450,
    },
    Segment {
        segment: "Web Development",
        languages: &["TypeScript", "JavaScript"],
        avg_score: 45.82,
        repos: 520,
    },
    Segment {
        segment: "Enterprise",
        languages: &["Java", "C#"],
        avg_score: 39.12,
        repos: 380,
    },
    Segment {
        segment: "Scripting",
        languages: &["Python", "Ruby", "PHP"],
        avg_score: 41.36,
        repos: 410,
    },
    Segment {
        segment: "Mobile",
        languages: &["Swift", "Kotlin"],
        avg_score: 37.96,
        repos: 240,
    },
];

static HEALTH_INDICATORS: [HealthIndicator; 6] = [
    HealthIndicator {
        indicator: "License",
        impact: 11.88,
        description: "Presence of open source license",
    },
    HealthIndicator {
        indicator: "Contributing Guidelines",
        impact: 12.70,
        description: "CONTRIBUTING.md file present",
    },
    HealthIndicator {
        indicator: "Code of Conduct",
        impact: 12.70,
        description: "CODE_OF_CONDUCT.md file present",
    },
    HealthIndicator {
        indicator: "Issue Templates",
        impact: 8.45,
        description: "GitHub issue templates configured",
    },
    HealthIndicator {
        indicator: "Security Policy",
        impact: 9.23,
        description: "SECURITY.md file present",
    },
    HealthIndicator {
        indicator: "Documentation",
        impact: 10.12,
        description: "Comprehensive README and docs",
    },
];

/// Coefficients against the overall score, strongest first.
#[must_use]
pub fn reference_findings() -> &'static [CorrelationFinding] {
    &FINDINGS
}

#[must_use]
pub fn segments() -> &'static [Segment] {
    &SEGMENTS
}

#[must_use]
pub fn health_indicators() -> &'static [HealthIndicator] {
    &HEALTH_INDICATORS
}

/// Fixed matrix over popularity, activity, health and overall.
///
/// Pairs against `overall` carry the published coefficients; the score/score
/// pairs hold the dataset coefficients rounded to two decimals.
pub fn reference_correlation_matrix() -> VizResult<CorrelationMatrix> {
    let popularity = LanguageMetric::Popularity.as_str();
    let activity = LanguageMetric::Activity.as_str();
    let health = LanguageMetric::Health.as_str();
    let overall = LanguageMetric::Overall.as_str();

    CorrelationMatrix::from_pairs(
        &[popularity, activity, health, overall],
        &[
            (activity, overall, 0.85),
            (health, overall, 0.68),
            (popularity, overall, 0.57),
            (popularity, activity, 0.48),
            (popularity, health, 0.49),
            (activity, health, 0.93),
        ],
    )
}
