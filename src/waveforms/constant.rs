//! Flat waveforms: silence and a fixed level.

use delegate::delegate;

use crate::core::require_period;
use crate::{Millis, Result, SyncFunction, Tick, Timing};

/// Always 0.
///
/// Mostly useful as a spacer inside a concatenation.
///
/// # Examples
///
/// ```
/// use syncwave::{SyncFunction, Zero};
///
/// let mut pause = Zero::new(500)?;
/// assert_eq!(pause.period(), 500);
/// assert_eq!(pause.value_at(100), 0.0);
/// # Ok::<(), syncwave::SyncError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zero {
    timing: Timing,
}

impl Zero {
    /// Creates a silent stretch; fails when `period` is zero.
    pub fn new(period: Millis) -> Result<Self> {
        require_period("Zero", period)?;
        Ok(Self {
            timing: Timing::new(period),
        })
    }
}

impl SyncFunction for Zero {
    fn value_at(&mut self, _elapsed: Millis) -> f32 {
        0.0
    }

    delegate! {
        to self.timing {
            fn period(&self) -> Millis;
            fn start_time(&self) -> Tick;
            fn restart_at(&mut self, now: Tick);
        }
    }
}

/// A fixed level, clamped into `[0, 1]` at construction.
///
/// Unlike the shaped waveforms the level holds beyond the period.
///
/// # Examples
///
/// ```
/// use syncwave::{Constant, SyncFunction};
///
/// let mut half = Constant::new(1000, 0.5)?;
/// assert_eq!(half.value_at(0), 0.5);
/// assert_eq!(half.value_at(5000), 0.5);
///
/// // Out-of-range levels are clamped
/// assert_eq!(Constant::new(1000, 3.0)?.level(), 1.0);
/// # Ok::<(), syncwave::SyncError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constant {
    timing: Timing,
    level: f32,
}

impl Constant {
    /// Creates a fixed level; fails when `period` is zero.
    pub fn new(period: Millis, level: f32) -> Result<Self> {
        require_period("Constant", period)?;
        Ok(Self {
            timing: Timing::new(period),
            level: level.clamp(0.0, 1.0),
        })
    }

    /// The clamped level.
    pub fn level(&self) -> f32 {
        self.level
    }
}

impl SyncFunction for Constant {
    fn value_at(&mut self, _elapsed: Millis) -> f32 {
        self.level
    }

    delegate! {
        to self.timing {
            fn period(&self) -> Millis;
            fn start_time(&self) -> Tick;
            fn restart_at(&mut self, now: Tick);
        }
    }
}
