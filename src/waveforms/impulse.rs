//! Single-shot impulse.

use delegate::delegate;

use crate::core::require_period;
use crate::{Millis, Result, SyncFunction, Tick, Timing};

/// Fires 1.0 on the first evaluation, then 0.0 until [`reset`](SyncFunction::reset).
///
/// This is the only leaf with persistent state. Wrapped in a repetition it
/// fires once per cycle, because repetitions reset their child at every
/// cycle boundary.
///
/// Evaluations beyond the period return 0.0 without consuming the shot.
///
/// # Examples
///
/// ```
/// use syncwave::{Impulse, SyncExt, SyncFunction};
///
/// let mut tick = Impulse::new(100)?.repeat(3)?;
/// assert_eq!(tick.value_at(0), 1.0);
/// assert_eq!(tick.value_at(50), 0.0);
/// assert_eq!(tick.value_at(100), 1.0);
/// # Ok::<(), syncwave::SyncError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impulse {
    timing: Timing,
    fired: bool,
}

impl Impulse {
    /// Creates an armed impulse; fails when `period` is zero.
    pub fn new(period: Millis) -> Result<Self> {
        require_period("Impulse", period)?;
        Ok(Self {
            timing: Timing::new(period),
            fired: false,
        })
    }

    /// Returns true once the impulse has fired and not yet been reset.
    pub fn is_fired(&self) -> bool {
        self.fired
    }
}

impl SyncFunction for Impulse {
    fn value_at(&mut self, elapsed: Millis) -> f32 {
        if elapsed > self.timing.period() || self.fired {
            return 0.0;
        }
        self.fired = true;
        1.0
    }

    fn reset(&mut self) {
        self.fired = false;
    }

    delegate! {
        to self.timing {
            fn period(&self) -> Millis;
            fn start_time(&self) -> Tick;
            fn restart_at(&mut self, now: Tick);
        }
    }
}
