//! Millisecond clock sources.
//!
//! The library never reads ambient global time. Callers inject a [`Clock`]
//! into [`value_now`](crate::SyncFunction::value_now),
//! [`restart`](crate::SyncFunction::restart) and
//! [`elapsed_since`](crate::SyncFunction::elapsed_since).

use std::cell::Cell;
use std::time::Instant;

use super::Tick;

/// A monotonically non-decreasing millisecond counter.
///
/// Readings may wrap at `u32::MAX`; the library handles a single rollover
/// through wrapping subtraction.
///
/// Any `Fn() -> Tick` closure is a clock, which makes it easy to plug in a
/// platform's `millis()`:
///
/// ```
/// use syncwave::{Clock, Ramp, SyncFunction};
///
/// let board_millis = || 500;
/// let mut ramp = Ramp::new(1000)?;
/// assert_eq!(ramp.value_now(&board_millis), 0.5);
/// assert_eq!(board_millis.now(), 500);
/// # Ok::<(), syncwave::SyncError>(())
/// ```
pub trait Clock {
    /// Current reading in milliseconds.
    fn now(&self) -> Tick;
}

impl<F: Fn() -> Tick> Clock for F {
    fn now(&self) -> Tick {
        self()
    }
}

/// A clock that only moves when told to.
///
/// Useful for tests and for simulating a device's main loop.
///
/// # Examples
///
/// ```
/// use syncwave::{Clock, ManualClock};
///
/// let clock = ManualClock::new(100);
/// clock.advance(50);
/// assert_eq!(clock.now(), 150);
/// clock.set(u32::MAX);
/// clock.advance(2);
/// assert_eq!(clock.now(), 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct ManualClock {
    now: Cell<Tick>,
}

impl ManualClock {
    /// Creates a clock reading `start`.
    pub fn new(start: Tick) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Moves the clock to `now`.
    pub fn set(&self, now: Tick) {
        self.now.set(now);
    }

    /// Moves the clock forward by `millis`, wrapping on overflow.
    pub fn advance(&self, millis: Tick) {
        self.now.set(self.now.get().wrapping_add(millis));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Tick {
        self.now.get()
    }
}

/// Host clock counting milliseconds since the clock was created.
///
/// Readings are truncated to `u32` and therefore wrap after roughly 49 days,
/// the same way a microcontroller's `millis()` counter does.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    /// Creates a clock whose epoch is the current instant.
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Tick {
        self.epoch.elapsed().as_millis() as Tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock() {
        let clock = ManualClock::default();
        assert_eq!(clock.now(), 0);
        clock.set(42);
        assert_eq!(clock.now(), 42);
        clock.advance(8);
        assert_eq!(clock.now(), 50);
    }

    #[test]
    fn test_manual_clock_wraps() {
        let clock = ManualClock::new(u32::MAX - 1);
        clock.advance(3);
        assert_eq!(clock.now(), 1);
    }

    #[test]
    fn test_closure_clock() {
        let counter = Cell::new(0u32);
        let clock = || {
            counter.set(counter.get() + 10);
            counter.get()
        };
        assert_eq!(clock.now(), 10);
        assert_eq!(clock.now(), 20);
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }
}
