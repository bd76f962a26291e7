//! Host-owned view state for the explorer panels.
//!
//! Nothing here is retained by the engine: callers keep these values and pass
//! them into the pure query and scene functions.

use std::cmp::Ordering;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{MetricRecord, ProjectedPoint};
use crate::data::thresholds::ENTERPRISE_LEADERS;
use crate::data::{LanguageMetric, LanguageRecord, RepositoryRecord};

fn matches_search(name: &str, search: &str) -> bool {
    search.is_empty() || name.to_lowercase().contains(&search.to_lowercase())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LanguageSortField {
    #[default]
    Overall,
    Popularity,
    Activity,
    Health,
}

impl LanguageSortField {
    #[must_use]
    pub fn metric(self) -> LanguageMetric {
        match self {
            Self::Overall => LanguageMetric::Overall,
            Self::Popularity => LanguageMetric::Popularity,
            Self::Activity => LanguageMetric::Activity,
            Self::Health => LanguageMetric::Health,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewMode {
    /// Selecting a language replaces the selection.
    #[default]
    Single,
    /// Selecting a language toggles its membership.
    Multi,
}

/// Search, ranking and selection of the language explorer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LanguageExplorerState {
    pub search: String,
    pub sort_by: LanguageSortField,
    pub selected: Vec<String>,
    pub view_mode: ViewMode,
}

impl LanguageExplorerState {
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    #[must_use]
    pub fn with_sort(mut self, sort_by: LanguageSortField) -> Self {
        self.sort_by = sort_by;
        self
    }

    #[must_use]
    pub fn with_view_mode(mut self, view_mode: ViewMode) -> Self {
        self.view_mode = view_mode;
        self
    }

    pub fn toggle_selection(&mut self, name: &str) {
        match self.view_mode {
            ViewMode::Single => {
                self.selected.clear();
                self.selected.push(name.to_owned());
            }
            ViewMode::Multi => {
                if let Some(position) = self.selected.iter().position(|entry| entry == name) {
                    self.selected.remove(position);
                } else {
                    self.selected.push(name.to_owned());
                }
            }
        }
        trace!(selected = ?self.selected, "language selection changed");
    }

    /// Records matching the search, ranked by the sort metric, highest first.
    #[must_use]
    pub fn visible<'a>(&self, records: &'a [LanguageRecord]) -> Vec<&'a LanguageRecord> {
        let metric = self.sort_by.metric();
        let mut visible: Vec<&LanguageRecord> = records
            .iter()
            .filter(|record| matches_search(record.name, &self.search))
            .collect();
        visible.sort_by_key(|record| std::cmp::Reverse(OrderedFloat(record.metric_value(metric))));
        visible
    }

    /// Selected records in dataset order.
    #[must_use]
    pub fn selected_records<'a>(&self, records: &'a [LanguageRecord]) -> Vec<&'a LanguageRecord> {
        records
            .iter()
            .filter(|record| self.selected.iter().any(|name| name == record.name))
            .collect()
    }

    #[must_use]
    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.iter().any(|entry| entry == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EnterpriseSortField {
    Name,
    #[default]
    HealthScore,
    EnterpriseReadiness,
    AvgContributors,
    AvgStars,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Sortable enterprise-readiness leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EnterpriseTableState {
    pub sort_field: EnterpriseSortField,
    pub sort_order: SortOrder,
}

impl EnterpriseTableState {
    /// Same field flips the order; a new field starts descending.
    pub fn handle_sort(&mut self, field: EnterpriseSortField) {
        if self.sort_field == field {
            self.sort_order = self.sort_order.toggled();
        } else {
            self.sort_field = field;
            self.sort_order = SortOrder::Descending;
        }
    }

    #[must_use]
    pub fn sorted<'a>(&self, records: &'a [LanguageRecord]) -> Vec<&'a LanguageRecord> {
        let mut rows: Vec<&LanguageRecord> = records.iter().collect();
        rows.sort_by(|a, b| {
            let ordering = match self.sort_field {
                EnterpriseSortField::Name => a.name.cmp(b.name),
                EnterpriseSortField::HealthScore => {
                    OrderedFloat(a.health_score).cmp(&OrderedFloat(b.health_score))
                }
                EnterpriseSortField::EnterpriseReadiness => OrderedFloat(a.enterprise_readiness)
                    .cmp(&OrderedFloat(b.enterprise_readiness)),
                EnterpriseSortField::AvgContributors => {
                    OrderedFloat(a.avg_contributors).cmp(&OrderedFloat(b.avg_contributors))
                }
                EnterpriseSortField::AvgStars => {
                    OrderedFloat(a.avg_stars).cmp(&OrderedFloat(b.avg_stars))
                }
            };
            self.sort_order.apply(ordering)
        });
        rows
    }

    /// Top rows of the current ordering.
    #[must_use]
    pub fn leaders<'a>(&self, records: &'a [LanguageRecord]) -> Vec<&'a LanguageRecord> {
        let mut rows = self.sorted(records);
        rows.truncate(ENTERPRISE_LEADERS);
        rows
    }
}

/// Repository list filter; `language == None` shows every language.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RepositoryExplorerState {
    pub search: String,
    pub language: Option<String>,
}

impl RepositoryExplorerState {
    #[must_use]
    pub fn filter<'a>(&self, repositories: &'a [RepositoryRecord]) -> Vec<&'a RepositoryRecord> {
        repositories
            .iter()
            .filter(|repository| {
                self.language
                    .as_deref()
                    .is_none_or(|language| repository.language == language)
            })
            .filter(|repository| matches_search(repository.name, &self.search))
            .collect()
    }
}

/// Hover state of the scatter plot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScatterViewState {
    pub hovered: Option<String>,
}

impl ScatterViewState {
    #[must_use]
    pub fn hovering(name: impl Into<String>) -> Self {
        Self {
            hovered: Some(name.into()),
        }
    }

    /// Hovers the point nearest to the pointer within `radius_px`, or clears.
    pub fn pointer_move(&mut self, points: &[ProjectedPoint], x: f64, y: f64, radius_px: f64) {
        self.hovered = nearest_point(points, x, y, radius_px).map(|point| point.name.clone());
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = None;
    }

    #[must_use]
    pub fn is_hovered(&self, name: &str) -> bool {
        self.hovered.as_deref() == Some(name)
    }
}

/// Closest projected point to `(x, y)` no farther than `radius_px`.
#[must_use]
pub fn nearest_point(
    points: &[ProjectedPoint],
    x: f64,
    y: f64,
    radius_px: f64,
) -> Option<&ProjectedPoint> {
    points
        .iter()
        .map(|point| (point, (point.x - x).hypot(point.y - y)))
        .filter(|(_, distance)| distance.is_finite() && *distance <= radius_px)
        .min_by_key(|(_, distance)| OrderedFloat(*distance))
        .map(|(point, _)| point)
}
