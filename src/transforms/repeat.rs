//! Repetition of a child over consecutive cycles.
//!
//! Both repeaters reset their child whenever evaluation crosses into a new
//! cycle, so one-shot children such as [`Impulse`](crate::Impulse) fire once
//! per cycle.

use delegate::delegate;

use crate::core::require_period;
use crate::{Millis, Result, SyncError, SyncFunction, Tick, Transformation};

/// Remembers the last cycle index observed and resets the child on a change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct CycleTracker {
    last_index: u32,
}

impl CycleTracker {
    fn observe<F: SyncFunction>(&mut self, index: u32, source: &mut Transformation<F>) {
        if index != self.last_index {
            log::trace!("cycle {} -> {index}, resetting child", self.last_index);
            self.last_index = index;
            source.reset();
        }
    }

    fn clear(&mut self) {
        self.last_index = 0;
    }
}

/// Plays the child `n` times back to back, then 0.0.
///
/// # Examples
///
/// ```
/// use syncwave::{Ramp, SyncExt, SyncFunction};
///
/// let mut saw = Ramp::new(100)?.repeat(3)?;
/// assert_eq!(saw.period(), 300);
/// assert_eq!(saw.value_at(150), 0.5);
/// assert_eq!(saw.value_at(300), 0.0);
/// # Ok::<(), syncwave::SyncError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RepeatN<F> {
    base: Transformation<F>,
    count: u32,
    cycles: CycleTracker,
}

impl<F: SyncFunction> RepeatN<F> {
    /// Repeats `source` `count` times.
    ///
    /// Fails when the child's period is zero, when `count` is zero, or when
    /// the total overflows.
    pub fn new(source: F, count: u32) -> Result<Self> {
        let cycle = source.period();
        require_period("RepeatN", cycle)?;
        let period = cycle.checked_mul(count).ok_or_else(|| {
            log::debug!("rejecting RepeatN: {count} x {cycle} ms overflows");
            SyncError::PeriodOverflow { node: "RepeatN" }
        })?;
        Ok(Self {
            base: Transformation::with_period("RepeatN", source, period)?,
            count,
            cycles: CycleTracker::default(),
        })
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    delegate! {
        to self.base {
            pub fn source(&self) -> &F;
            pub fn source_mut(&mut self) -> &mut F;
            pub fn into_source(self) -> F;
        }
    }
}

impl<F: SyncFunction> SyncFunction for RepeatN<F> {
    fn value_at(&mut self, elapsed: Millis) -> f32 {
        let cycle = self.base.source().period();
        let index = elapsed / cycle;
        self.cycles.observe(index, &mut self.base);
        if index >= self.count {
            return 0.0;
        }
        self.base.source_at(elapsed % cycle)
    }

    fn reset(&mut self) {
        self.cycles.clear();
        self.base.reset();
    }

    delegate! {
        to self.base {
            fn period(&self) -> Millis;
            fn start_time(&self) -> Tick;
            fn restart_at(&mut self, now: Tick);
        }
    }
}

/// Plays the child indefinitely.
///
/// The reported period is the child's period; evaluation is defined for any
/// elapsed time.
///
/// # Examples
///
/// ```
/// use syncwave::{Step, SyncExt, SyncFunction};
///
/// let mut blink = Step::new(100, 200)?.repeat_forever()?;
/// assert_eq!(blink.period(), 200);
/// assert_eq!(blink.value_at(10_050), 1.0);
/// assert_eq!(blink.value_at(10_150), 0.0);
/// # Ok::<(), syncwave::SyncError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RepeatForever<F> {
    base: Transformation<F>,
    cycles: CycleTracker,
}

impl<F: SyncFunction> RepeatForever<F> {
    /// Repeats `source` forever; fails when the child's period is zero.
    pub fn new(source: F) -> Result<Self> {
        Ok(Self {
            base: Transformation::new("RepeatForever", source)?,
            cycles: CycleTracker::default(),
        })
    }

    delegate! {
        to self.base {
            pub fn source(&self) -> &F;
            pub fn source_mut(&mut self) -> &mut F;
            pub fn into_source(self) -> F;
        }
    }
}

impl<F: SyncFunction> SyncFunction for RepeatForever<F> {
    fn value_at(&mut self, elapsed: Millis) -> f32 {
        let cycle = self.base.period();
        self.cycles.observe(elapsed / cycle, &mut self.base);
        self.base.source_at(elapsed % cycle)
    }

    fn reset(&mut self) {
        self.cycles.clear();
        self.base.reset();
    }

    delegate! {
        to self.base {
            fn period(&self) -> Millis;
            fn start_time(&self) -> Tick;
            fn restart_at(&mut self, now: Tick);
        }
    }
}
