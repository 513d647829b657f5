//! Ready-made patterns.

use crate::core::require_period;
use crate::{Millis, RepeatForever, Result, Step};

/// A pulse-width modulation pattern: high for `high` ms out of every `period` ms.
///
/// Fails when `period` is zero. A `high` at or beyond `period` stays high.
///
/// # Examples
///
/// ```
/// use syncwave::{ManualClock, SyncFunction, presets::pwm};
///
/// let clock = ManualClock::new(0);
/// let mut led = pwm(250, 1000)?;
///
/// clock.set(4_100);
/// assert_eq!(led.value_now(&clock), 1.0);
/// clock.set(4_300);
/// assert_eq!(led.value_now(&clock), 0.0);
/// # Ok::<(), syncwave::SyncError>(())
/// ```
pub fn pwm(high: Millis, period: Millis) -> Result<RepeatForever<Step>> {
    require_period("pwm", period)?;
    RepeatForever::new(Step::new(high, period)?)
}
