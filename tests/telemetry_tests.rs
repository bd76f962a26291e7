use langscope::telemetry::{DEFAULT_FILTER, LOG_ENV_VAR, init_default_tracing};

#[test]
fn default_tracing_installs_at_most_once() {
    assert_eq!(init_default_tracing(), cfg!(feature = "telemetry"));
    assert!(!init_default_tracing());
}

#[test]
fn filter_defaults_target_the_crate() {
    assert_eq!(LOG_ENV_VAR, "LANGSCOPE_LOG");
    assert!(DEFAULT_FILTER.starts_with("langscope"));
}
