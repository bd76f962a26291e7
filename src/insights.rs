//! Narrative findings derived from the language table.

use serde::Serialize;
use tracing::debug;

use crate::core::min_max;
use crate::data::LanguageRecord;
use crate::data::thresholds::{ENTERPRISE_READY, HEALTH_EXCELLENT, HEALTH_GOOD};

const ENTERPRISE_HEALTH: f64 = 90.0;
const GROWTH_MIN_ACTIVITY: f64 = 60.0;
const GROWTH_MAX_POPULARITY: f64 = 50.0;
const SIMILAR_SCORE_RANGE: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum InsightKind {
    TopPerformer,
    MostActive,
    MostPopular,
    EnterpriseReady,
    GrowthPotential,
    ScoreRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
}

/// First record with the strictly highest `score`.
fn leader<'a>(
    records: &[&'a LanguageRecord],
    score: impl Fn(&LanguageRecord) -> f64,
) -> Option<&'a LanguageRecord> {
    let (first, rest) = records.split_first()?;
    Some(rest.iter().copied().fold(*first, |best, record| {
        if score(record) > score(best) {
            record
        } else {
            best
        }
    }))
}

fn join_names(records: &[&LanguageRecord]) -> String {
    records
        .iter()
        .map(|record| record.name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Derives insights over `selected` names, or over every record when nothing
/// is selected. Yields nothing when no record is in scope.
#[must_use]
pub fn derive_insights(records: &[LanguageRecord], selected: &[String]) -> Vec<Insight> {
    let has_selection = !selected.is_empty();
    let scope: Vec<&LanguageRecord> = records
        .iter()
        .filter(|record| !has_selection || selected.iter().any(|name| name == record.name))
        .collect();

    let mut insights = Vec::new();
    let (Some(top), Some(active), Some(popular)) = (
        leader(&scope, |record| record.overall_score),
        leader(&scope, |record| record.activity_score),
        leader(&scope, |record| record.popularity_score),
    ) else {
        return insights;
    };

    insights.push(Insight {
        kind: InsightKind::TopPerformer,
        title: format!(
            "{} Leads {}",
            top.name,
            if has_selection { "Selection" } else { "Overall" }
        ),
        description: format!(
            "Achieves highest overall score ({:.1}) with balanced strength across all dimensions.",
            top.overall_score
        ),
    });
    insights.push(Insight {
        kind: InsightKind::MostActive,
        title: format!("{} Most Active", active.name),
        description: format!(
            "Dominates activity metrics with {} avg contributors and {:.1} activity score.",
            active.avg_contributors, active.activity_score
        ),
    });
    insights.push(Insight {
        kind: InsightKind::MostPopular,
        title: format!("{} Most Popular", popular.name),
        description: format!(
            "Leads in community adoption with {:.0} average stars per repository.",
            popular.avg_stars
        ),
    });

    let enterprise: Vec<&LanguageRecord> = scope
        .iter()
        .copied()
        .filter(|record| record.health_score > ENTERPRISE_HEALTH)
        .collect();
    if !enterprise.is_empty() {
        insights.push(Insight {
            kind: InsightKind::EnterpriseReady,
            title: format!(
                "{} Enterprise-Ready {}",
                enterprise.len(),
                if enterprise.len() == 1 { "Language" } else { "Languages" }
            ),
            description: format!(
                "{} achieve 90+ health scores with complete documentation and governance.",
                join_names(&enterprise)
            ),
        });
    }

    if !has_selection {
        let growth: Vec<&LanguageRecord> = scope
            .iter()
            .copied()
            .filter(|record| {
                record.activity_score > GROWTH_MIN_ACTIVITY
                    && record.popularity_score < GROWTH_MAX_POPULARITY
            })
            .collect();
        if !growth.is_empty() {
            insights.push(Insight {
                kind: InsightKind::GrowthPotential,
                title: "High Growth Potential".to_owned(),
                description: format!(
                    "{} show strong activity despite moderate popularity; watch for rapid adoption.",
                    join_names(&growth)
                ),
            });
        }
    }

    if selected.len() > 1 {
        let scores: Vec<f64> = scope.iter().map(|record| record.overall_score).collect();
        if let Ok((min, max)) = min_max(&scores) {
            let range = max - min;
            insights.push(Insight {
                kind: InsightKind::ScoreRange,
                title: format!("Score Range: {range:.1} Points"),
                description: format!(
                    "Selected languages span {range:.1} points in overall score, {} performance differences.",
                    if range < SIMILAR_SCORE_RANGE {
                        "showing similar"
                    } else {
                        "revealing significant"
                    }
                ),
            });
        }
    }

    debug!(
        scope = scope.len(),
        insights = insights.len(),
        "derived insights"
    );
    insights
}

/// Counts behind the enterprise readiness summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessSummary {
    pub with_license: usize,
    pub high_governance: usize,
    pub enterprise_ready: usize,
}

fn count_where(records: &[LanguageRecord], predicate: impl Fn(&LanguageRecord) -> bool) -> usize {
    records.iter().filter(|record| predicate(record)).count()
}

#[must_use]
pub fn readiness_summary(records: &[LanguageRecord]) -> ReadinessSummary {
    ReadinessSummary {
        with_license: count_where(records, |record| record.health_score >= HEALTH_GOOD),
        high_governance: count_where(records, |record| record.health_score >= HEALTH_EXCELLENT),
        enterprise_ready: count_where(records, |record| {
            record.enterprise_readiness >= ENTERPRISE_READY
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::leader;
    use crate::data::languages;

    #[test]
    fn leader_keeps_first_record_on_ties() {
        let scope: Vec<_> = languages().iter().take(3).collect();
        let first = leader(&scope, |_| 1.0).expect("leader");
        assert_eq!(first.name, "Rust");
        assert!(leader(&[], |record| record.overall_score).is_none());
    }
}
