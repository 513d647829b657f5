//! Raised sinusoids.

use std::f32::consts::TAU;

use delegate::delegate;

use crate::core::require_period;
use crate::{Millis, Result, SyncFunction, Tick, Timing};

/// One cycle of `0.5 * sin(2π * elapsed / period) + 0.5`.
///
/// Starts and ends at 0.5, peaking at a quarter of the period.
///
/// # Examples
///
/// ```
/// use syncwave::{Sine, SyncFunction};
///
/// let mut sine = Sine::new(1000)?;
/// assert_eq!(sine.value_at(0), 0.5);
/// assert!((sine.value_at(250) - 1.0).abs() < 1e-6);
/// assert_eq!(sine.value_at(1001), 0.0);
/// # Ok::<(), syncwave::SyncError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sine {
    timing: Timing,
}

impl Sine {
    /// Creates a sine; fails on a zero period.
    pub fn new(period: Millis) -> Result<Self> {
        require_period("Sine", period)?;
        Ok(Self {
            timing: Timing::new(period),
        })
    }
}

impl SyncFunction for Sine {
    fn value_at(&mut self, elapsed: Millis) -> f32 {
        let period = self.timing.period();
        if elapsed > period {
            return 0.0;
        }
        0.5 * (TAU * elapsed as f32 / period as f32).sin() + 0.5
    }

    delegate! {
        to self.timing {
            fn period(&self) -> Millis;
            fn start_time(&self) -> Tick;
            fn restart_at(&mut self, now: Tick);
        }
    }
}

/// One cycle of `0.5 * cos(2π * elapsed / period) + 0.5`.
///
/// Starts and ends at 1.0 with a trough halfway, which makes it a natural
/// "breathing" curve when inverted.
///
/// # Examples
///
/// ```
/// use syncwave::{Cosine, SyncFunction};
///
/// let mut cosine = Cosine::new(1000)?;
/// assert_eq!(cosine.value_at(0), 1.0);
/// assert!(cosine.value_at(500).abs() < 1e-6);
/// # Ok::<(), syncwave::SyncError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cosine {
    timing: Timing,
}

impl Cosine {
    /// Creates a cosine; fails on a zero period.
    pub fn new(period: Millis) -> Result<Self> {
        require_period("Cosine", period)?;
        Ok(Self {
            timing: Timing::new(period),
        })
    }
}

impl SyncFunction for Cosine {
    fn value_at(&mut self, elapsed: Millis) -> f32 {
        let period = self.timing.period();
        if elapsed > period {
            return 0.0;
        }
        0.5 * (TAU * elapsed as f32 / period as f32).cos() + 0.5
    }

    delegate! {
        to self.timing {
            fn period(&self) -> Millis;
            fn start_time(&self) -> Tick;
            fn restart_at(&mut self, now: Tick);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_sine_cycle() {
        let mut sine = Sine::new(400).unwrap();
        assert!(approx_eq(sine.value_at(0), 0.5));
        assert!(approx_eq(sine.value_at(100), 1.0));
        assert!(approx_eq(sine.value_at(200), 0.5));
        assert!(approx_eq(sine.value_at(300), 0.0));
        assert!(approx_eq(sine.value_at(400), 0.5));
        assert_eq!(sine.value_at(401), 0.0);
    }

    #[test]
    fn test_cosine_cycle() {
        let mut cosine = Cosine::new(400).unwrap();
        assert!(approx_eq(cosine.value_at(0), 1.0));
        assert!(approx_eq(cosine.value_at(100), 0.5));
        assert!(approx_eq(cosine.value_at(200), 0.0));
        assert!(approx_eq(cosine.value_at(400), 1.0));
        assert_eq!(cosine.value_at(401), 0.0);
    }

    #[test]
    fn test_stays_in_unit_range() {
        let mut sine = Sine::new(997).unwrap();
        let mut cosine = Cosine::new(997).unwrap();
        for elapsed in 0..=997 {
            let s = sine.value_at(elapsed);
            let c = cosine.value_at(elapsed);
            assert!((0.0..=1.0).contains(&s));
            assert!((0.0..=1.0).contains(&c));
        }
    }

    #[test]
    fn test_zero_period_rejected() {
        assert!(Sine::new(0).is_err());
        assert!(Cosine::new(0).is_err());
    }
}
