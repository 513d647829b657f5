//! Linear ramps.

use delegate::delegate;

use crate::core::require_period;
use crate::{Millis, Result, SyncFunction, Tick, Timing};

/// Rises linearly from 0.0 at the start to 1.0 at the end of the period.
///
/// # Examples
///
/// ```
/// use syncwave::{Ramp, SyncFunction};
///
/// let mut ramp = Ramp::new(1000)?;
/// assert_eq!(ramp.value_at(0), 0.0);
/// assert_eq!(ramp.value_at(1000), 1.0);
/// assert_eq!(ramp.value_at(1001), 0.0);
/// # Ok::<(), syncwave::SyncError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ramp {
    timing: Timing,
}

impl Ramp {
    /// Creates a ramp; fails on a zero period.
    pub fn new(period: Millis) -> Result<Self> {
        require_period("Ramp", period)?;
        Ok(Self {
            timing: Timing::new(period),
        })
    }
}

impl SyncFunction for Ramp {
    fn value_at(&mut self, elapsed: Millis) -> f32 {
        let period = self.timing.period();
        if elapsed > period {
            return 0.0;
        }
        elapsed as f32 / period as f32
    }

    delegate! {
        to self.timing {
            fn period(&self) -> Millis;
            fn start_time(&self) -> Tick;
            fn restart_at(&mut self, now: Tick);
        }
    }
}

/// Falls linearly from 1.0 at the start to 0.0 at the end of the period.
///
/// # Examples
///
/// ```
/// use syncwave::{InverseRamp, SyncFunction};
///
/// let mut fade = InverseRamp::new(200)?;
/// assert_eq!(fade.value_at(0), 1.0);
/// assert_eq!(fade.value_at(50), 0.75);
/// assert_eq!(fade.value_at(200), 0.0);
/// # Ok::<(), syncwave::SyncError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverseRamp {
    timing: Timing,
}

impl InverseRamp {
    /// Creates a falling ramp; fails on a zero period.
    pub fn new(period: Millis) -> Result<Self> {
        require_period("InverseRamp", period)?;
        Ok(Self {
            timing: Timing::new(period),
        })
    }
}

impl SyncFunction for InverseRamp {
    fn value_at(&mut self, elapsed: Millis) -> f32 {
        let period = self.timing.period();
        if elapsed > period {
            return 0.0;
        }
        1.0 - elapsed as f32 / period as f32
    }

    delegate! {
        to self.timing {
            fn period(&self) -> Millis;
            fn start_time(&self) -> Tick;
            fn restart_at(&mut self, now: Tick);
        }
    }
}
