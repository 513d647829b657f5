//! Rectangular step.

use delegate::delegate;

use crate::core::require_period;
use crate::{Millis, Result, SyncFunction, Tick, Timing};

/// 1.0 while elapsed is below the edge, then 0.0.
///
/// Wrapped in an endless repetition this is a PWM pattern with a duty cycle
/// of `high / period`; see [`pwm`](crate::presets::pwm).
///
/// # Examples
///
/// ```
/// use syncwave::{Step, SyncFunction};
///
/// let mut step = Step::new(300, 1000)?;
/// assert_eq!(step.value_at(0), 1.0);
/// assert_eq!(step.value_at(299), 1.0);
/// assert_eq!(step.value_at(300), 0.0);
/// # Ok::<(), syncwave::SyncError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    timing: Timing,
    high: Millis,
}

impl Step {
    /// Creates a step that stays high for `high` milliseconds out of `period`.
    ///
    /// Fails when `period` is zero.
    pub fn new(high: Millis, period: Millis) -> Result<Self> {
        require_period("Step", period)?;
        Ok(Self {
            timing: Timing::new(period),
            high,
        })
    }

    /// Creates a step with a 50% duty cycle.
    pub fn symmetric(period: Millis) -> Result<Self> {
        Self::new(period / 2, period)
    }

    /// Milliseconds spent high.
    pub fn high(&self) -> Millis {
        self.high
    }
}

impl SyncFunction for Step {
    fn value_at(&mut self, elapsed: Millis) -> f32 {
        if elapsed > self.timing.period() {
            return 0.0;
        }
        if elapsed < self.high { 1.0 } else { 0.0 }
    }

    delegate! {
        to self.timing {
            fn period(&self) -> Millis;
            fn start_time(&self) -> Tick;
            fn restart_at(&mut self, now: Tick);
        }
    }
}
