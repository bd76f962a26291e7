use langscope::core::{
    CorrelationMatrix, Domain, PixelRange, generate_ticks, pearson_correlation, project,
};
use proptest::prelude::*;

fn non_constant_series() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1_000.0f64..1_000.0, 2..32)
        .prop_filter("series must vary", |values| {
            values.iter().any(|value| (value - values[0]).abs() > 1e-3)
        })
}

proptest! {
    #[test]
    fn pearson_is_symmetric(
        pairs in prop::collection::vec((-1_000.0f64..1_000.0, -1_000.0f64..1_000.0), 1..32)
    ) {
        let (xs, ys): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
        let forward = pearson_correlation(&xs, &ys).expect("forward");
        let backward = pearson_correlation(&ys, &xs).expect("backward");
        prop_assert_eq!(forward, backward);
        prop_assert!((-1.0..=1.0).contains(&forward));
    }

    #[test]
    fn series_correlates_perfectly_with_itself(xs in non_constant_series()) {
        let r = pearson_correlation(&xs, &xs).expect("pearson");
        prop_assert!((r - 1.0).abs() <= 1e-9);
    }

    #[test]
    fn large_magnitude_series_correlate_with_themselves(
        xs in non_constant_series(),
        exponent in 100i32..300,
    ) {
        let scale = 10f64.powi(exponent);
        let scaled: Vec<f64> = xs.iter().map(|value| value * scale).collect();
        let r = pearson_correlation(&scaled, &scaled).expect("pearson");
        prop_assert!((r - 1.0).abs() <= 1e-9);
    }

    #[test]
    fn constant_series_never_produce_nan(value in -1_000.0f64..1_000.0, len in 1usize..16) {
        let xs = vec![value; len];
        let r = pearson_correlation(&xs, &xs).expect("pearson");
        prop_assert_eq!(r, 0.0);
    }

    #[test]
    fn computed_matrix_is_symmetric(
        columns in prop::collection::vec(prop::collection::vec(-100.0f64..100.0, 6), 1..6)
    ) {
        let keys: Vec<String> = (0..columns.len()).map(|index| format!("m{index}")).collect();
        let key_refs: Vec<&str> = keys.iter().map(String::as_str).collect();
        let matrix = CorrelationMatrix::from_upper_triangle(&key_refs, |row, col| {
            pearson_correlation(&columns[row], &columns[col])
        })
        .expect("matrix");
        prop_assert!(matrix.is_symmetric());
        for index in 0..matrix.len() {
            prop_assert_eq!(matrix.value_at(index, index), Some(1.0));
        }
    }

    #[test]
    fn projection_hits_range_endpoints(
        min in -1_000.0f64..1_000.0,
        span in 0.5f64..1_000.0,
        start in 0.0f64..500.0,
        end in 500.0f64..1_500.0
    ) {
        let domain = Domain::new(min, min + span).expect("domain");
        let range = PixelRange::new(start, end);
        prop_assert!((project(domain.min, domain, range) - start).abs() <= 1e-9);
        prop_assert!((project(domain.max, domain, range) - end).abs() <= 1e-6);
    }

    #[test]
    fn ticks_are_monotonic_and_bounded(
        min in -1_000.0f64..1_000.0,
        span in 0.5f64..1_000.0,
        count in 1usize..12
    ) {
        let domain = Domain::new(min, min + span).expect("domain");
        let ticks = generate_ticks(domain, count);
        prop_assert_eq!(ticks.len(), count + 1);
        prop_assert_eq!(ticks[0], domain.min);
        prop_assert_eq!(ticks[count], domain.max);
        prop_assert!(ticks.windows(2).all(|pair| pair[0] <= pair[1]));
    }
}
