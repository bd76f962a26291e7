use approx::assert_relative_eq;
use langscope::VizError;
use langscope::core::{
    Domain, DomainTuning, PixelRange, compute_domain, generate_ticks, project,
};

#[test]
fn ticks_over_score_domain_are_evenly_spaced() {
    let domain = Domain::new(0.0, 100.0).expect("domain");
    assert_eq!(
        generate_ticks(domain, 5),
        vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]
    );
}

#[test]
fn ticks_end_exactly_on_max() {
    let domain = Domain::new(0.1, 0.7).expect("domain");
    let ticks = generate_ticks(domain, 3);
    assert_eq!(ticks.len(), 4);
    assert_eq!(ticks.last().copied(), Some(0.7));
    assert!(generate_ticks(domain, 0).is_empty());
}

#[test]
fn projection_maps_domain_endpoints_onto_range() {
    let domain = Domain::new(40.0, 80.0).expect("domain");
    let range = PixelRange::new(56.0, 776.0);
    assert_eq!(project(40.0, domain, range), 56.0);
    assert_eq!(project(80.0, domain, range), 776.0);
    assert_relative_eq!(project(60.0, domain, range), 416.0, epsilon = 1e-9);
}

#[test]
fn inverted_range_flips_y_axis() {
    let domain = Domain::new(0.0, 100.0).expect("domain");
    let range = PixelRange::new(552.0, 24.0);
    assert_eq!(project(0.0, domain, range), 552.0);
    assert_eq!(project(100.0, domain, range), 24.0);
    assert_eq!(range.length(), 528.0);
}

#[test]
fn degenerate_domain_projection_stays_finite() {
    let domain = Domain::new(50.0, 50.0).expect("domain");
    let range = PixelRange::new(0.0, 100.0);
    assert_eq!(project(50.0, domain, range), 0.0);
    assert_eq!(project(51.0, domain, range), 100.0);
}

#[test]
fn domain_rejects_inverted_and_non_finite_bounds() {
    assert!(Domain::new(10.0, 5.0).is_err());
    assert!(Domain::new(f64::NAN, 5.0).is_err());
}

#[test]
fn compute_domain_floors_ceils_and_pads() {
    let domain =
        compute_domain(&[29.1, 69.44], DomainTuning::default().with_padding(2.0)).expect("domain");
    assert_eq!(domain, Domain { min: 27.0, max: 72.0 });
}

#[test]
fn compute_domain_respects_hard_bounds() {
    let domain = compute_domain(&[1.5, 99.5], DomainTuning::score_axis(5.0)).expect("domain");
    assert_eq!(domain, Domain { min: 0.0, max: 100.0 });
}

#[test]
fn compute_domain_widens_degenerate_input() {
    let domain = compute_domain(&[42.0, 42.0], DomainTuning::default()).expect("domain");
    assert_eq!(domain, Domain { min: 42.0, max: 43.0 });
}

#[test]
fn degenerate_domain_at_upper_bound_shifts_down() {
    let domain = compute_domain(&[100.0], DomainTuning::score_axis(0.0).with_min_span(4.0))
        .expect("domain");
    assert_eq!(domain, Domain { min: 96.0, max: 100.0 });
}

#[test]
fn values_below_lower_bound_collapse_onto_it() {
    let domain = compute_domain(&[-50.0], DomainTuning::score_axis(0.0)).expect("domain");
    assert_eq!(domain, Domain { min: 0.0, max: 1.0 });

    let domain =
        compute_domain(&[-80.0, -20.0], DomainTuning::score_axis(2.0)).expect("domain");
    assert!(domain.min >= 0.0 && domain.max <= 100.0);
    assert_eq!(domain, Domain { min: 0.0, max: 1.0 });
}

#[test]
fn values_above_upper_bound_collapse_onto_it() {
    let domain = compute_domain(&[150.0, 240.0], DomainTuning::score_axis(0.0)).expect("domain");
    assert_eq!(domain, Domain { min: 99.0, max: 100.0 });
}

#[test]
fn compute_domain_of_empty_values_is_an_error() {
    assert!(matches!(
        compute_domain(&[], DomainTuning::default()),
        Err(VizError::EmptyDomain)
    ));
}

#[test]
fn domain_clamp_and_contains() {
    let domain = Domain::new(0.0, 10.0).expect("domain");
    assert!(domain.contains(10.0));
    assert!(!domain.contains(10.5));
    assert_eq!(domain.clamp(-3.0), 0.0);
    assert_eq!(domain.span(), 10.0);
    assert!(!domain.is_degenerate());
}
