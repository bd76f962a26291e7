//! Categorization thresholds and display limits used across dashboard views.

pub const SCORE_HIGH: f64 = 60.0;
pub const SCORE_MEDIUM: f64 = 40.0;

pub const ENTERPRISE_READY: f64 = 30.0;
pub const ENTERPRISE_DEVELOPING: f64 = 20.0;

pub const HEALTH_EXCELLENT: f64 = 65.0;
pub const HEALTH_GOOD: f64 = 60.0;
pub const HEALTH_FAIR: f64 = 50.0;

pub const TOP_LANGUAGES: usize = 5;
pub const ENTERPRISE_LEADERS: usize = 6;
pub const TOP_REPOSITORIES: usize = 10;
pub const SEARCH_RESULTS: usize = 20;

/// Weights behind the precomputed overall score. Reference only: the overall
/// scores in the dataset are not recomputed at runtime.
pub const WEIGHT_POPULARITY: f64 = 0.4;
pub const WEIGHT_ACTIVITY: f64 = 0.35;
pub const WEIGHT_HEALTH: f64 = 0.25;

/// Three-band classification of a 0..=100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ScoreBand {
    High,
    Medium,
    Low,
}

impl ScoreBand {
    #[must_use]
    pub fn classify(score: f64) -> Self {
        if score >= SCORE_HIGH {
            Self::High
        } else if score >= SCORE_MEDIUM {
            Self::Medium
        } else {
            Self::Low
        }
    }
}
