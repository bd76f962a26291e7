//! Static, compiled-in ecosystem dataset.
//!
//! Records are created once and live for the whole process; accessors only
//! hand out shared references.

mod languages;
mod metric;
mod reference;
mod repositories;
pub mod thresholds;

use serde::Serialize;

use crate::core::MetricRecord;

pub use metric::{LanguageMetric, RepositoryMetric};
pub use reference::{
    CorrelationFinding, HealthIndicator, Segment, health_indicators,
    reference_correlation_matrix, reference_findings, segments,
};

/// One programming-language ecosystem. Scores are on a 0..=100 scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageRecord {
    pub name: &'static str,
    pub overall_score: f64,
    pub popularity_score: f64,
    pub activity_score: f64,
    pub health_score: f64,
    pub avg_stars: f64,
    pub avg_forks: f64,
    pub avg_contributors: f64,
    pub avg_commits: f64,
    pub enterprise_readiness: f64,
    /// Growth ratio in `[0, 1]`.
    pub growth_signal: f64,
    pub color: &'static str,
    pub icon: &'static str,
}

impl MetricRecord for LanguageRecord {
    type Metric = LanguageMetric;

    fn name(&self) -> &str {
        self.name
    }

    fn metric_value(&self, metric: LanguageMetric) -> f64 {
        match metric {
            LanguageMetric::Overall => self.overall_score,
            LanguageMetric::Popularity => self.popularity_score,
            LanguageMetric::Activity => self.activity_score,
            LanguageMetric::Health => self.health_score,
            LanguageMetric::AvgStars => self.avg_stars,
            LanguageMetric::AvgForks => self.avg_forks,
            LanguageMetric::AvgContributors => self.avg_contributors,
            LanguageMetric::AvgCommits => self.avg_commits,
            LanguageMetric::EnterpriseReadiness => self.enterprise_readiness,
            LanguageMetric::GrowthSignal => self.growth_signal,
        }
    }

    fn accent_hex(&self) -> Option<&str> {
        Some(self.color)
    }
}

/// One notable repository. `language` names a [`LanguageRecord`] but is not
/// checked against the language table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepositoryRecord {
    /// `owner/repo`.
    pub name: &'static str,
    pub language: &'static str,
    pub stars: u32,
    pub forks: u32,
    pub contributors: u32,
    /// Growth ratio in `[0, 1]`.
    pub growth: f64,
}

impl RepositoryRecord {
    #[must_use]
    pub fn owner(&self) -> &'static str {
        self.name.split_once('/').map_or(self.name, |(owner, _)| owner)
    }
}

impl MetricRecord for RepositoryRecord {
    type Metric = RepositoryMetric;

    fn name(&self) -> &str {
        self.name
    }

    fn metric_value(&self, metric: RepositoryMetric) -> f64 {
        match metric {
            RepositoryMetric::Stars => f64::from(self.stars),
            RepositoryMetric::Forks => f64::from(self.forks),
            RepositoryMetric::Contributors => f64::from(self.contributors),
            RepositoryMetric::Growth => self.growth,
        }
    }
}

/// All language records, ordered by descending overall score.
#[must_use]
pub fn languages() -> &'static [LanguageRecord] {
    &languages::LANGUAGES
}

#[must_use]
pub fn repositories() -> &'static [RepositoryRecord] {
    &repositories::REPOSITORIES
}

/// Case-insensitive lookup by language name.
#[must_use]
pub fn language_by_name(name: &str) -> Option<&'static LanguageRecord> {
    languages()
        .iter()
        .find(|language| language.name.eq_ignore_ascii_case(name))
}

#[must_use]
pub fn repositories_for_language(language: &str) -> Vec<&'static RepositoryRecord> {
    repositories()
        .iter()
        .filter(|repository| repository.language == language)
        .collect()
}

/// First `count` languages of the overall ranking.
#[must_use]
pub fn top_languages(count: usize) -> &'static [LanguageRecord] {
    let all = languages();
    &all[..count.min(all.len())]
}
