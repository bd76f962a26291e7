use langscope::VizError;
use langscope::core::{MetricKey, MetricRecord, parse_metric_keys};
use langscope::data::thresholds::{SCORE_HIGH, SCORE_MEDIUM, ScoreBand, TOP_LANGUAGES};
use langscope::data::{
    LanguageMetric, RepositoryMetric, health_indicators, language_by_name, languages,
    reference_findings, repositories, repositories_for_language, segments, top_languages,
};

#[test]
fn language_table_is_ranked_by_overall_score() {
    let records = languages();
    assert_eq!(records.len(), 12);
    assert_eq!(records[0].name, "Rust");
    assert!(
        records
            .windows(2)
            .all(|pair| pair[0].overall_score >= pair[1].overall_score)
    );
}

#[test]
fn scores_stay_on_percentage_scale() {
    for record in languages() {
        for metric in LanguageMetric::SCORES {
            let value = record.metric_value(metric);
            assert!((0.0..=100.0).contains(&value), "{} {metric}", record.name);
        }
        assert!((0.0..=1.0).contains(&record.growth_signal));
    }
}

#[test]
fn lookup_by_name_ignores_case() {
    let rust = language_by_name("rust").expect("rust");
    assert_eq!(rust.name, "Rust");
    assert_eq!(rust.accent_hex(), Some("#CE422B"));
    assert!(language_by_name("cobol").is_none());
}

#[test]
fn metric_lookup_by_key_accepts_both_spellings() {
    let rust = language_by_name("Rust").expect("rust");
    assert_eq!(rust.metric_value_by_key("activity").expect("short key"), 61.62);
    assert_eq!(rust.metric_value_by_key("activityScore").expect("long key"), 61.62);
    assert!(matches!(
        rust.metric_value_by_key("speed"),
        Err(VizError::UnknownMetric(_))
    ));
}

#[test]
fn metric_keys_round_trip_through_display() {
    for metric in LanguageMetric::all() {
        let parsed: LanguageMetric = metric.to_string().parse().expect("parse");
        assert_eq!(parsed, *metric);
    }
    let parsed = parse_metric_keys::<RepositoryMetric>(&["stars", "growth"]).expect("keys");
    assert_eq!(parsed, vec![RepositoryMetric::Stars, RepositoryMetric::Growth]);
}

#[test]
fn repositories_group_by_language() {
    assert_eq!(repositories().len(), 57);
    let rust_repos = repositories_for_language("Rust");
    assert_eq!(rust_repos.len(), 5);
    assert!(rust_repos.iter().any(|repo| repo.name == "rust-lang/rust"));
    assert_eq!(rust_repos[0].owner(), "rust-lang");
    assert_eq!(rust_repos[0].metric_value(RepositoryMetric::Stars), 97_000.0);
}

#[test]
fn every_repository_language_exists() {
    for repository in repositories() {
        assert!(
            language_by_name(repository.language).is_some(),
            "{} references unknown language {}",
            repository.name,
            repository.language
        );
    }
}

#[test]
fn top_languages_clamps_to_table_size() {
    assert_eq!(top_languages(TOP_LANGUAGES).len(), 5);
    assert_eq!(top_languages(100).len(), 12);
}

#[test]
fn reference_tables_are_complete() {
    let findings = reference_findings();
    assert_eq!(findings.len(), 3);
    assert_eq!(findings[0].metric, LanguageMetric::Activity);
    assert_eq!(findings[0].r, 0.85);
    assert_eq!(segments().len(), 5);
    assert_eq!(health_indicators().len(), 6);
}

#[test]
fn score_bands_split_on_thresholds() {
    assert_eq!(ScoreBand::classify(SCORE_HIGH), ScoreBand::High);
    assert_eq!(ScoreBand::classify(SCORE_MEDIUM), ScoreBand::Medium);
    assert_eq!(ScoreBand::classify(SCORE_MEDIUM - 0.1), ScoreBand::Low);
}
