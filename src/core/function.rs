//! Core node contract.
//!
//! This module provides the fundamental `SyncFunction` trait that every node
//! of an evaluation tree implements: primitive waveforms, operators and
//! transformations alike.

use super::Clock;

/// A duration in milliseconds.
pub type Millis = u32;

/// An absolute clock reading in milliseconds.
///
/// Readings wrap at the platform's 32-bit width; elapsed times are computed
/// with wrapping subtraction so a rollover never traps.
pub type Tick = u32;

/// Common interface for all nodes of a sync function tree.
///
/// Evaluation is pull-based: the caller asks the root for a value, and each
/// composite node asks its children for their values at a (possibly remapped)
/// elapsed time before combining them.
///
/// Values are typically in `[0, 1]` unless a transformation such as
/// [`ScaleY`](crate::ScaleY) or [`OffsetY`](crate::OffsetY) moves them out of
/// that range.
///
/// The trait is object safe, so heterogeneous trees can be built from
/// `Box<dyn SyncFunction>`.
///
/// # Examples
///
/// ```
/// use syncwave::{ManualClock, Ramp, SyncFunction};
///
/// let clock = ManualClock::new(0);
/// let mut ramp = Ramp::new(1000)?;
///
/// clock.set(250);
/// assert_eq!(ramp.value_now(&clock), 0.25);
/// assert_eq!(ramp.value_at(500), 0.5);
/// # Ok::<(), syncwave::SyncError>(())
/// ```
pub trait SyncFunction {
    /// Evaluates the node `elapsed` milliseconds into its local timeline.
    ///
    /// Never fails: elapsed times beyond [`period`](Self::period) yield the
    /// node's boundary value (0 for shapes with a sharp cutoff).
    ///
    /// Takes `&mut self` because repetition nodes track which cycle they last
    /// observed and impulses remember whether they have fired.
    fn value_at(&mut self, elapsed: Millis) -> f32;

    /// Duration of one full cycle in milliseconds.
    fn period(&self) -> Millis;

    /// Clears one-shot internal state.
    ///
    /// Stateless leaves ignore this. Composite nodes forward it to their
    /// children.
    fn reset(&mut self) {}

    /// The tick at which this node's local clock was last zeroed.
    fn start_time(&self) -> Tick;

    /// Rebinds this node's local clock to `now`.
    ///
    /// Only the node itself is affected; children keep their own start.
    fn restart_at(&mut self, now: Tick);

    /// Rebinds this node's local clock to the clock's current reading.
    fn restart(&mut self, clock: &dyn Clock) {
        self.restart_at(clock.now());
    }

    /// Milliseconds since this node's start, using wrapping subtraction.
    fn elapsed_since(&self, clock: &dyn Clock) -> Millis {
        elapsed_between(self.start_time(), clock.now())
    }

    /// Evaluates the node at the clock's current reading.
    fn value_now(&mut self, clock: &dyn Clock) -> f32 {
        let elapsed = self.elapsed_since(clock);
        self.value_at(elapsed)
    }
}

/// Milliseconds from `start` to `now`, wrapping across a clock rollover.
///
/// # Examples
///
/// ```
/// use syncwave::elapsed_between;
///
/// assert_eq!(elapsed_between(100, 350), 250);
/// // The clock wrapped between the two readings
/// assert_eq!(elapsed_between(u32::MAX - 9, 10), 20);
/// ```
pub fn elapsed_between(start: Tick, now: Tick) -> Millis {
    now.wrapping_sub(start)
}

/// Allow boxed nodes to be used as nodes (for dynamic dispatch).
impl<F: SyncFunction + ?Sized> SyncFunction for Box<F> {
    fn value_at(&mut self, elapsed: Millis) -> f32 {
        (**self).value_at(elapsed)
    }

    fn period(&self) -> Millis {
        (**self).period()
    }

    fn reset(&mut self) {
        (**self).reset()
    }

    fn start_time(&self) -> Tick {
        (**self).start_time()
    }

    fn restart_at(&mut self, now: Tick) {
        (**self).restart_at(now)
    }
}

/// Allow borrowed nodes to be used as children without giving up ownership.
impl<F: SyncFunction + ?Sized> SyncFunction for &mut F {
    fn value_at(&mut self, elapsed: Millis) -> f32 {
        (**self).value_at(elapsed)
    }

    fn period(&self) -> Millis {
        (**self).period()
    }

    fn reset(&mut self) {
        (**self).reset()
    }

    fn start_time(&self) -> Tick {
        (**self).start_time()
    }

    fn restart_at(&mut self, now: Tick) {
        (**self).restart_at(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Impulse, ManualClock, Ramp, SyncExt};

    #[test]
    fn test_elapsed_between_wraps() {
        assert_eq!(elapsed_between(0, 0), 0);
        assert_eq!(elapsed_between(10, 5), u32::MAX - 4);
        assert_eq!(elapsed_between(u32::MAX, 0), 1);
    }

    #[test]
    fn test_value_now_uses_own_start() {
        let clock = ManualClock::new(1_000);
        let mut ramp = Ramp::new(100).unwrap();
        ramp.restart(&clock);
        assert_eq!(ramp.start_time(), 1_000);

        clock.advance(50);
        assert_eq!(ramp.elapsed_since(&clock), 50);
        assert_eq!(ramp.value_now(&clock), 0.5);
    }

    #[test]
    fn test_boxed_node() {
        let mut node: Box<dyn SyncFunction> = Box::new(Ramp::new(100).unwrap());
        assert_eq!(node.period(), 100);
        assert_eq!(node.value_at(25), 0.25);
        node.restart_at(7);
        assert_eq!(node.start_time(), 7);
    }

    #[test]
    fn test_borrowed_child_keeps_ownership() {
        let mut impulse = Impulse::new(10).unwrap();
        {
            let mut repeated = (&mut impulse).repeat(2).unwrap();
            assert_eq!(repeated.value_at(0), 1.0);
            assert_eq!(repeated.value_at(5), 0.0);
        }
        // The borrowed impulse was fired through the wrapper
        assert_eq!(impulse.value_at(0), 0.0);
        impulse.reset();
        assert_eq!(impulse.value_at(0), 1.0);
    }
}
