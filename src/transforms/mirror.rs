//! Palindromic playback.

use delegate::delegate;

use crate::{Millis, Result, SyncFunction, Tick, Transformation};

/// Plays the child forward, then backward, doubling the period.
///
/// # Examples
///
/// ```
/// use syncwave::{Ramp, SyncExt, SyncFunction};
///
/// let mut peak = Ramp::new(100)?.mirror()?;
/// assert_eq!(peak.period(), 200);
/// assert_eq!(peak.value_at(100), 1.0);
/// assert_eq!(peak.value_at(150), 0.5);
/// # Ok::<(), syncwave::SyncError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Mirror<F> {
    base: Transformation<F>,
}

impl<F: SyncFunction> Mirror<F> {
    pub fn new(source: F) -> Result<Self> {
        let period = source.period().saturating_mul(2);
        Ok(Self {
            base: Transformation::with_period("Mirror", source, period)?,
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

impl<F: SyncFunction> SyncFunction for Mirror<F> {
    fn value_at(&mut self, elapsed: Millis) -> f32 {
        let half = self.base.source().period();
        let period = self.base.period();
        if elapsed < half {
            self.base.source_at(elapsed)
        } else if elapsed <= period {
            self.base.source_at(period - elapsed)
        } else {
            0.0
        }
    }

    delegate! {
        to self.base {
            fn period(&self) -> Millis;
            fn reset(&mut self);
            fn start_time(&self) -> Tick;
            fn restart_at(&mut self, now: Tick);
        }
    }
}
