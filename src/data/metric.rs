use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::MetricKey;
use crate::error::VizError;

/// Numeric fields of a [`LanguageRecord`](super::LanguageRecord).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LanguageMetric {
    Overall,
    Popularity,
    Activity,
    Health,
    AvgStars,
    AvgForks,
    AvgContributors,
    AvgCommits,
    EnterpriseReadiness,
    GrowthSignal,
}

impl LanguageMetric {
    /// The four composite scores shown on radar charts.
    pub const SCORES: [Self; 4] = [Self::Overall, Self::Popularity, Self::Activity, Self::Health];
}

impl MetricKey for LanguageMetric {
    fn as_str(self) -> &'static str {
        match self {
            Self::Overall => "overall",
            Self::Popularity => "popularity",
            Self::Activity => "activity",
            Self::Health => "health",
            Self::AvgStars => "avgStars",
            Self::AvgForks => "avgForks",
            Self::AvgContributors => "avgContributors",
            Self::AvgCommits => "avgCommits",
            Self::EnterpriseReadiness => "enterpriseReadiness",
            Self::GrowthSignal => "growthSignal",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Overall => "Overall",
            Self::Popularity => "Popularity",
            Self::Activity => "Activity",
            Self::Health => "Health",
            Self::AvgStars => "Avg Stars",
            Self::AvgForks => "Avg Forks",
            Self::AvgContributors => "Avg Contributors",
            Self::AvgCommits => "Avg Commits",
            Self::EnterpriseReadiness => "Enterprise Readiness",
            Self::GrowthSignal => "Growth Signal",
        }
    }

    fn all() -> &'static [Self] {
        &[
            Self::Overall,
            Self::Popularity,
            Self::Activity,
            Self::Health,
            Self::AvgStars,
            Self::AvgForks,
            Self::AvgContributors,
            Self::AvgCommits,
            Self::EnterpriseReadiness,
            Self::GrowthSignal,
        ]
    }
}

impl FromStr for LanguageMetric {
    type Err = VizError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "overall" | "overallScore" => Ok(Self::Overall),
            "popularity" | "popularityScore" => Ok(Self::Popularity),
            "activity" | "activityScore" => Ok(Self::Activity),
            "health" | "healthScore" => Ok(Self::Health),
            "avgStars" => Ok(Self::AvgStars),
            "avgForks" => Ok(Self::AvgForks),
            "avgContributors" => Ok(Self::AvgContributors),
            "avgCommits" => Ok(Self::AvgCommits),
            "enterpriseReadiness" => Ok(Self::EnterpriseReadiness),
            "growthSignal" => Ok(Self::GrowthSignal),
            other => Err(VizError::UnknownMetric(other.to_owned())),
        }
    }
}

impl fmt::Display for LanguageMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric fields of a [`RepositoryRecord`](super::RepositoryRecord).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RepositoryMetric {
    Stars,
    Forks,
    Contributors,
    Growth,
}

impl MetricKey for RepositoryMetric {
    fn as_str(self) -> &'static str {
        match self {
            Self::Stars => "stars",
            Self::Forks => "forks",
            Self::Contributors => "contributors",
            Self::Growth => "growth",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Stars => "Stars",
            Self::Forks => "Forks",
            Self::Contributors => "Contributors",
            Self::Growth => "Growth",
        }
    }

    fn all() -> &'static [Self] {
        &[Self::Stars, Self::Forks, Self::Contributors, Self::Growth]
    }
}

impl FromStr for RepositoryMetric {
    type Err = VizError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "stars" => Ok(Self::Stars),
            "forks" => Ok(Self::Forks),
            "contributors" => Ok(Self::Contributors),
            "growth" => Ok(Self::Growth),
            other => Err(VizError::UnknownMetric(other.to_owned())),
        }
    }
}

impl fmt::Display for RepositoryMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
