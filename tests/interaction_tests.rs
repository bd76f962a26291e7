use langscope::core::ProjectedPoint;
use langscope::data::{languages, repositories};
use langscope::interaction::{
    EnterpriseSortField, EnterpriseTableState, LanguageExplorerState, LanguageSortField,
    RepositoryExplorerState, ScatterViewState, SortOrder, ViewMode, nearest_point,
};

fn names<'a>(records: impl IntoIterator<Item = &'a langscope::data::LanguageRecord>) -> Vec<&'a str> {
    records.into_iter().map(|record| record.name).collect()
}

#[test]
fn search_is_case_insensitive_substring() {
    let state = LanguageExplorerState::default().with_search("SCRIPT");
    assert_eq!(
        names(state.visible(languages())),
        vec!["TypeScript", "JavaScript"]
    );
}

#[test]
fn visible_languages_sort_descending_by_chosen_score() {
    let state = LanguageExplorerState::default().with_sort(LanguageSortField::Popularity);
    let visible = state.visible(languages());
    assert_eq!(visible.len(), 12);
    assert_eq!(visible[0].name, "Python");
    assert!(
        visible
            .windows(2)
            .all(|pair| pair[0].popularity_score >= pair[1].popularity_score)
    );
}

#[test]
fn single_mode_selection_replaces() {
    let mut state = LanguageExplorerState::default();
    state.toggle_selection("Rust");
    state.toggle_selection("Go");
    assert_eq!(state.selected, vec!["Go".to_owned()]);
    assert_eq!(names(state.selected_records(languages())), vec!["Go"]);
}

#[test]
fn multi_mode_selection_toggles_membership() {
    let mut state = LanguageExplorerState::default().with_view_mode(ViewMode::Multi);
    state.toggle_selection("Rust");
    state.toggle_selection("Go");
    state.toggle_selection("Python");
    state.toggle_selection("Go");
    assert!(state.is_selected("Rust"));
    assert!(!state.is_selected("Go"));
    assert_eq!(
        names(state.selected_records(languages())),
        vec!["Rust", "Python"]
    );
}

#[test]
fn enterprise_table_defaults_to_health_descending() {
    let state = EnterpriseTableState::default();
    assert_eq!(state.sort_field, EnterpriseSortField::HealthScore);
    assert_eq!(state.sort_order, SortOrder::Descending);
    let leaders = state.leaders(languages());
    assert_eq!(leaders.len(), 6);
    assert_eq!(leaders[0].name, "TypeScript");
}

#[test]
fn sorting_same_field_toggles_order_and_new_field_resets() {
    let mut state = EnterpriseTableState::default();
    state.handle_sort(EnterpriseSortField::HealthScore);
    assert_eq!(state.sort_order, SortOrder::Ascending);
    assert_eq!(state.leaders(languages())[0].name, "Swift");

    state.handle_sort(EnterpriseSortField::Name);
    assert_eq!(state.sort_field, EnterpriseSortField::Name);
    assert_eq!(state.sort_order, SortOrder::Descending);
    assert_eq!(state.leaders(languages())[0].name, "TypeScript");

    state.handle_sort(EnterpriseSortField::Name);
    assert_eq!(state.leaders(languages())[0].name, "C#");
}

#[test]
fn repository_filter_combines_language_and_search() {
    let all = RepositoryExplorerState::default();
    assert_eq!(all.filter(repositories()).len(), repositories().len());

    let rust = RepositoryExplorerState {
        search: String::new(),
        language: Some("Rust".to_owned()),
    };
    assert_eq!(rust.filter(repositories()).len(), 5);

    let searched = RepositoryExplorerState {
        search: "DENO".to_owned(),
        language: Some("Rust".to_owned()),
    };
    let found = searched.filter(repositories());
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "denoland/deno");
}

fn point(name: &str, x: f64, y: f64) -> ProjectedPoint {
    ProjectedPoint {
        name: name.to_owned(),
        value_x: 0.0,
        value_y: 0.0,
        x,
        y,
    }
}

#[test]
fn pointer_hovers_nearest_point_within_radius() {
    let points = vec![point("Rust", 100.0, 100.0), point("Go", 110.0, 100.0)];
    assert_eq!(
        nearest_point(&points, 107.0, 100.0, 12.0).map(|p| p.name.as_str()),
        Some("Go")
    );

    let mut state = ScatterViewState::default();
    state.pointer_move(&points, 101.0, 99.0, 12.0);
    assert!(state.is_hovered("Rust"));
    state.pointer_move(&points, 300.0, 300.0, 12.0);
    assert_eq!(state.hovered, None);

    state = ScatterViewState::hovering("Go");
    state.pointer_leave();
    assert_eq!(state.hovered, None);
}
