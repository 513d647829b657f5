#![cfg(feature = "macros")]

use syncwave::{Ramp, SyncFunction, millis, presets::pwm};

#[test]
fn test_millis_units() {
    assert_eq!(millis!("250ms"), 250);
    assert_eq!(millis!("2s"), 2_000);
    assert_eq!(millis!("3m"), 180_000);
    assert_eq!(millis!("1h"), 3_600_000);
}

#[test]
fn test_millis_compound() {
    assert_eq!(millis!("1m 30s"), 90_000);
    assert_eq!(millis!("2s500ms"), 2_500);
    assert_eq!(millis!("1h 1m 1s 1ms"), 3_661_001);
}

#[test]
fn test_millis_in_constructors() {
    let ramp = Ramp::new(millis!("1s")).unwrap();
    assert_eq!(ramp.period(), 1_000);

    let mut led = pwm(millis!("100ms"), millis!("1s")).unwrap();
    assert_eq!(led.value_at(millis!("5s 50ms")), 1.0);
    assert_eq!(led.value_at(millis!("5s 150ms")), 0.0);
}
