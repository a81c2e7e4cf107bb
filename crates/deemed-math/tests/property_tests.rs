//! Property-based tests for table lookups.
//!
//! These tests verify properties that must hold for every valid table:
//! - Lookups reproduce the row value exactly at each boundary
//! - Monotonic rows give monotonic results
//! - Repeated lookups are bit-identical
//! - A batch equals the scalar loop, for any mix of keys
//! - Out-of-domain values follow the edge segments' lines

use approx::assert_relative_eq;
use deemed_math::prelude::*;
use proptest::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

/// Strictly increasing boundaries and one aligned value row.
fn table_strategy() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (2usize..12)
        .prop_flat_map(|n| {
            (
                -100.0..100.0f64,
                prop::collection::vec(0.1..50.0f64, n - 1),
                prop::collection::vec(-1000.0..1000.0f64, n),
            )
        })
        .prop_map(|(start, steps, values)| {
            let mut boundaries = Vec::with_capacity(steps.len() + 1);
            let mut x = start;
            boundaries.push(x);
            for step in steps {
                x += step;
                boundaries.push(x);
            }
            (boundaries, values)
        })
}

const KEYS: [&str; 3] = ["poles_2", "poles_4", "poles_6"];

fn keyed_table(boundaries: &[f64], values: &[f64]) -> BreakpointTable {
    let mut builder = BreakpointTable::builder(boundaries.to_vec());
    for (k, key) in KEYS.iter().enumerate() {
        let scale = 1.0 + k as f64;
        builder = builder.row(*key, values.iter().map(|v| v * scale).collect());
    }
    builder.build().unwrap()
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn test_exact_at_boundaries((boundaries, values) in table_strategy()) {
        let table = BreakpointTable::single(boundaries.clone(), values.clone()).unwrap();
        let interp = PiecewiseLinearInterpolator::new(&table);

        for i in 0..boundaries.len() - 1 {
            let y = interp.interpolate_one(boundaries[i], None).unwrap();
            prop_assert_eq!(y, values[i]);
        }
    }

    #[test]
    fn test_monotonic_rows_give_monotonic_results(
        (boundaries, mut values) in table_strategy(),
        a in 0.0..1.0f64,
        b in 0.0..1.0f64,
    ) {
        values.sort_by(|x, y| x.partial_cmp(y).unwrap());
        let table = BreakpointTable::single(boundaries.clone(), values).unwrap();
        let interp = PiecewiseLinearInterpolator::new(&table);

        let (lo, hi) = (boundaries[0], boundaries[boundaries.len() - 1]);
        let x1 = lo + a.min(b) * (hi - lo);
        let x2 = lo + a.max(b) * (hi - lo);

        let y1 = interp.interpolate_one(x1, None).unwrap();
        let y2 = interp.interpolate_one(x2, None).unwrap();
        prop_assert!(y1 <= y2 + 1e-9 * (1.0 + y2.abs()), "f({}) = {} > f({}) = {}", x1, y1, x2, y2);
    }

    #[test]
    fn test_idempotent(
        (boundaries, values) in table_strategy(),
        xs in prop::collection::vec(-500.0..500.0f64, 0..40),
    ) {
        let table = BreakpointTable::single(boundaries, values).unwrap();
        let first = interpolate(&table, &xs, None).unwrap();
        let second = interpolate(&table, &xs, None).unwrap();

        for (a, b) in first.iter().zip(second.iter()) {
            prop_assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_batch_equals_scalar_loop(
        (boundaries, values) in table_strategy(),
        elements in prop::collection::vec((-500.0..500.0f64, 0usize..3), 0..40),
    ) {
        let table = keyed_table(&boundaries, &values);
        let interp = PiecewiseLinearInterpolator::new(&table);

        let xs: Vec<f64> = elements.iter().map(|(x, _)| *x).collect();
        let keys: Vec<&str> = elements.iter().map(|(_, k)| KEYS[*k]).collect();

        let batch = interpolate(&table, &xs, Some(keys.as_slice())).unwrap();
        prop_assert_eq!(batch.len(), xs.len());

        for (i, (x, key)) in xs.iter().zip(keys.iter()).enumerate() {
            let scalar = interp.interpolate_one(*x, Some(*key)).unwrap();
            prop_assert_eq!(batch[i].to_bits(), scalar.to_bits());
        }
    }

    #[test]
    fn test_edge_extrapolation((boundaries, values) in table_strategy()) {
        let table = BreakpointTable::single(boundaries.clone(), values.clone()).unwrap();
        let interp = PiecewiseLinearInterpolator::new(&table);
        let n = boundaries.len();

        let g_first = (values[1] - values[0]) / (boundaries[1] - boundaries[0]);
        let g_last = (values[n - 1] - values[n - 2]) / (boundaries[n - 1] - boundaries[n - 2]);

        let below = interp.interpolate_one(boundaries[0] - 1.0, None).unwrap();
        let above = interp.interpolate_one(boundaries[n - 1] + 1.0, None).unwrap();

        prop_assert!((below - (values[0] - g_first)).abs() <= 1e-6 * (1.0 + below.abs()));
        prop_assert!((above - (values[n - 1] + g_last)).abs() <= 1e-6 * (1.0 + above.abs()));
    }

    #[test]
    fn test_classification_is_consistent(
        (boundaries, _values) in table_strategy(),
        x in -500.0..500.0f64,
    ) {
        let classifier = BracketClassifier::new(boundaries.clone()).unwrap();
        let bracket = classifier.locate(x).unwrap();
        let n = boundaries.len();

        prop_assert!(bracket.index <= n - 2);
        if x >= boundaries[0] && x < boundaries[n - 1] {
            prop_assert!(bracket.contains(x));
        } else if x < boundaries[0] {
            prop_assert_eq!(bracket.index, 0);
        } else {
            prop_assert_eq!(bracket.index, n - 2);
        }
    }
}

// =============================================================================
// CONCRETE SCENARIOS
// =============================================================================

#[test]
fn test_capacity_scenario() {
    let table = BreakpointTable::single(vec![0.0, 10.0, 40.0, 65.0, 100.0], vec![
        50.0, 60.0, 80.0, 90.0, 95.0,
    ])
    .unwrap();

    let classifier = table.classifier();
    assert_eq!(classifier.classify(25.0).unwrap(), 1);

    let gradient = table.sole_row().unwrap().gradients()[1];
    assert_relative_eq!(gradient, 0.6666666666666666, epsilon = 1e-12);

    let y = interpolate(&table, &[25.0], None).unwrap();
    assert_relative_eq!(y[0], 70.0, epsilon = 1e-10);
}

#[test]
fn test_non_monotonic_rejected_at_load() {
    let err = BreakpointTable::single(vec![0.0, 10.0, 5.0], vec![1.0, 2.0, 3.0]).unwrap_err();
    assert!(err.is_configuration());
    assert!(matches!(
        err,
        LookupError::Configuration(TableDefect::NotStrictlyIncreasing { index: 2, .. })
    ));
}

#[test]
fn test_tables_shared_across_threads() {
    use std::sync::Arc;
    use std::thread;

    let table = Arc::new(
        BreakpointTable::builder(vec![0.0, 5.0, 10.0])
            .row("A", vec![1.0, 2.0, 3.0])
            .row("B", vec![10.0, 20.0, 30.0])
            .build()
            .unwrap(),
    );

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let table = Arc::clone(&table);
            thread::spawn(move || {
                let xs: Vec<f64> = (0..100).map(|i| (i + t) as f64 * 0.1).collect();
                let keys: Vec<&str> = (0..100).map(|i| if i % 2 == 0 { "A" } else { "B" }).collect();
                interpolate(&table, &xs, Some(keys.as_slice())).unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().len(), 100);
    }
}
