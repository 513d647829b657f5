//! Property-based tests for node invariants.

use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;
use syncwave::{
    Constant, Cosine, InverseRamp, Ramp, Sine, Step, SyncError, SyncExt, SyncFunction,
    Trapezoidal, Triangular,
};

fn proptest_config() -> ProptestConfig {
    ProptestConfig {
        cases: 2_000,
        ..ProptestConfig::default()
    }
}

fn period() -> impl Strategy<Value = u32> {
    1u32..100_000
}

fn primitives(period: u32, level: f32) -> Vec<Box<dyn SyncFunction>> {
    vec![
        Constant::new(period, level).unwrap().boxed(),
        Step::new(period / 3, period).unwrap().boxed(),
        Ramp::new(period).unwrap().boxed(),
        InverseRamp::new(period).unwrap().boxed(),
        Sine::new(period).unwrap().boxed(),
        Cosine::new(period).unwrap().boxed(),
    ]
}

/// Stateless primitives stay in [0, 1] and give the same value twice.
#[test]
fn test_primitives_are_bounded_and_pure() {
    proptest!(proptest_config(), |(p in period(), level in 0.0f32..=1.0, fraction in 0.0f64..=1.5)| {
        let elapsed = (p as f64 * fraction) as u32;
        for mut node in primitives(p, level) {
            let first = node.value_at(elapsed);
            let second = node.value_at(elapsed);
            prop_assert!((0.0..=1.0).contains(&first), "out of range: {}", first);
            prop_assert_eq!(first, second);
        }
    });
}

/// Shapes with a cutoff return 0.0 past their period.
#[test]
fn test_zero_beyond_period() {
    proptest!(proptest_config(), |(p in period(), extra in 1u32..10_000)| {
        let elapsed = p + extra;
        prop_assert_eq!(Ramp::new(p).unwrap().value_at(elapsed), 0.0);
        prop_assert_eq!(Step::new(p, p).unwrap().value_at(elapsed), 0.0);
        prop_assert_eq!(Ramp::new(p).unwrap().mirror().unwrap().value_at(p * 2 + extra), 0.0);
    });
}

/// An endless repetition reads the same at `e` and `e + k * period`.
#[test]
fn test_repeat_forever_is_periodic() {
    proptest!(proptest_config(), |(rise in 1u32..5_000, fall in 1u32..5_000, e in 0u32..100_000, k in 0u32..1_000)| {
        let mut node = Triangular::new(rise, fall).unwrap().repeat_forever().unwrap();
        let period = node.period();
        let shifted = e.wrapping_add(k.wrapping_mul(period));
        prop_assume!(shifted >= e);
        let a = node.value_at(e);
        let b = node.value_at(shifted);
        prop_assert_eq!(a, b);
    });
}

/// Concatenation reports the sum of its children's periods.
#[test]
fn test_concat_period_is_sum() {
    proptest!(proptest_config(), |(a in period(), b in period(), hold in 0u32..1_000)| {
        let plateau = Trapezoidal::new(1, hold, 1).unwrap().delay(b).unwrap();
        let node = Ramp::new(a).unwrap().then(plateau).unwrap();
        prop_assert_eq!(node.period(), a + b + hold + 2);
    });
}

/// Reversing twice gives back the original shape.
#[test]
fn test_double_reverse_is_identity() {
    proptest!(proptest_config(), |(p in period(), fraction in 0.0f64..=1.0)| {
        let elapsed = (p as f64 * fraction) as u32;
        let mut plain = Ramp::new(p).unwrap();
        let mut twice = Ramp::new(p).unwrap().reverse().unwrap().reverse().unwrap();
        prop_assert_eq!(plain.value_at(elapsed), twice.value_at(elapsed));
    });
}

/// A phase shift by a whole number of periods changes nothing.
#[test]
fn test_slice_by_whole_periods() {
    proptest!(proptest_config(), |(p in period(), fraction in 0.0f64..=1.0, k in -20i32..20)| {
        let elapsed = (p as f64 * fraction) as u32;
        let mut plain = Ramp::new(p).unwrap();
        let mut shifted = Ramp::new(p).unwrap().slice_x(k * p as i32).unwrap();
        // The wrap maps the period's end back onto its start
        let expected = plain.value_at(elapsed % p);
        prop_assert_eq!(shifted.value_at(elapsed), expected);
    });
}

/// Whatever the scaling, a node that gets built never has an empty period.
#[test]
fn test_built_nodes_never_have_zero_period() {
    proptest!(proptest_config(), |(p in period(), factor in 0.001f32..100_000.0, n in 0u32..8)| {
        match Ramp::new(p).unwrap().speed(factor) {
            Ok(fast) => prop_assert!(fast.period() >= 1),
            Err(err) => prop_assert_eq!(err, SyncError::ZeroPeriod { node: "Speed" }),
        }
        match Ramp::new(p).unwrap().repeat(n) {
            Ok(repeated) => prop_assert_eq!(repeated.period(), p * n),
            Err(err) => prop_assert_eq!(n, 0, "unexpected {}", err),
        }
    });
}
