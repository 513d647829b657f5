//! Transformations of the time axis.

use delegate::delegate;

use crate::{Millis, Result, SyncError, SyncFunction, Tick, Transformation};

/// Plays the child faster (factor > 1) or slower (factor < 1).
///
/// The period becomes `child.period / factor` and the child is read at
/// `elapsed * factor`. The child's value is multiplied by the factor as
/// well, so a doubled ramp peaks at 2.0; follow with
/// [`scale_y`](crate::SyncExt::scale_y) to undo the amplitude change.
///
/// # Examples
///
/// ```
/// use syncwave::{Ramp, SyncExt, SyncFunction};
///
/// let mut fast = Ramp::new(1000)?.speed(2.0)?;
/// assert_eq!(fast.period(), 500);
/// assert_eq!(fast.value_at(250), 1.0);
/// # Ok::<(), syncwave::SyncError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Speed<F> {
    base: Transformation<F>,
    factor: f32,
}

impl<F: SyncFunction> Speed<F> {
    /// Creates a time-scaled node.
    ///
    /// The factor must be finite and positive, and the scaled period must
    /// land between 1 ms and `u32::MAX` ms.
    pub fn new(source: F, factor: f32) -> Result<Self> {
        if !factor.is_finite() || factor <= 0.0 {
            log::debug!("rejecting Speed: factor {factor}");
            return Err(SyncError::InvalidFactor {
                node: "Speed",
                factor,
            });
        }
        let period = source.period() as f64 / factor as f64;
        if period > Millis::MAX as f64 {
            log::debug!("rejecting Speed: period {period} ms overflows");
            return Err(SyncError::PeriodOverflow { node: "Speed" });
        }
        Ok(Self {
            base: Transformation::with_period("Speed", source, period as Millis)?,
            factor,
        })
    }

    pub fn factor(&self) -> f32 {
        self.factor
    }

    delegate! {
        to self.base {
            pub fn source(&self) -> &F;
            pub fn source_mut(&mut self) -> &mut F;
            pub fn into_source(self) -> F;
        }
    }
}

impl<F: SyncFunction> SyncFunction for Speed<F> {
    fn value_at(&mut self, elapsed: Millis) -> f32 {
        let scaled = (elapsed as f64 * self.factor as f64) as Millis;
        self.factor * self.base.source_at(scaled)
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

/// Phase-shifts the child by `offset` milliseconds, wrapping within the period.
///
/// The child is read at `(elapsed + offset) mod period`; negative offsets
/// shift the other way. Past the period the output is 0.0.
///
/// # Examples
///
/// ```
/// use syncwave::{Ramp, SyncExt, SyncFunction};
///
/// let mut shifted = Ramp::new(1000)?.slice_x(200)?;
/// assert_eq!(shifted.value_at(0), 0.2);
/// assert_eq!(shifted.value_at(900), 0.1);
/// # Ok::<(), syncwave::SyncError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SliceX<F> {
    base: Transformation<F>,
    offset: i32,
}

impl<F: SyncFunction> SliceX<F> {
    /// Creates a phase-shifted node; fails when the child's period is zero.
    pub fn new(source: F, offset: i32) -> Result<Self> {
        Ok(Self {
            base: Transformation::new("SliceX", source)?,
            offset,
        })
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    delegate! {
        to self.base {
            pub fn source(&self) -> &F;
            pub fn source_mut(&mut self) -> &mut F;
            pub fn into_source(self) -> F;
        }
    }
}

impl<F: SyncFunction> SyncFunction for SliceX<F> {
    fn value_at(&mut self, elapsed: Millis) -> f32 {
        let period = self.base.period();
        if elapsed > period {
            return 0.0;
        }
        let shifted = (elapsed as i64 + self.offset as i64).rem_euclid(period as i64);
        self.base.source_at(shifted as Millis)
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

/// Prepends `delay` milliseconds of 0.0 before the child starts.
///
/// # Examples
///
/// ```
/// use syncwave::{Ramp, SyncExt, SyncFunction};
///
/// let mut late = Ramp::new(100)?.delay(50)?;
/// assert_eq!(late.period(), 150);
/// assert_eq!(late.value_at(25), 0.0);
/// assert_eq!(late.value_at(100), 0.5);
/// # Ok::<(), syncwave::SyncError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Delay<F> {
    base: Transformation<F>,
    delay: Millis,
}

impl<F: SyncFunction> Delay<F> {
    pub fn new(source: F, delay: Millis) -> Result<Self> {
        let period = source.period().saturating_add(delay);
        Ok(Self {
            base: Transformation::with_period("Delay", source, period)?,
            delay,
        })
    }

    pub fn delay(&self) -> Millis {
        self.delay
    }

    delegate! {
        to self.base {
            pub fn source(&self) -> &F;
            pub fn source_mut(&mut self) -> &mut F;
            pub fn into_source(self) -> F;
        }
    }
}

impl<F: SyncFunction> SyncFunction for Delay<F> {
    fn value_at(&mut self, elapsed: Millis) -> f32 {
        if elapsed > self.base.period() || elapsed < self.delay {
            return 0.0;
        }
        self.base.source_at(elapsed - self.delay)
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

/// Plays the child backwards over its own period.
///
/// Reads the child at `period - elapsed`; past the period the output is 0.0.
///
/// # Examples
///
/// ```
/// use syncwave::{Ramp, SyncExt, SyncFunction};
///
/// let mut backwards = Ramp::new(100)?.reverse()?;
/// assert_eq!(backwards.value_at(0), 1.0);
/// assert_eq!(backwards.value_at(75), 0.25);
/// # Ok::<(), syncwave::SyncError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Reverse<F> {
    base: Transformation<F>,
}

impl<F: SyncFunction> Reverse<F> {
    pub fn new(source: F) -> Result<Self> {
        Ok(Self {
            base: Transformation::new("Reverse", source)?,
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

impl<F: SyncFunction> SyncFunction for Reverse<F> {
    fn value_at(&mut self, elapsed: Millis) -> f32 {
        let period = self.base.period();
        if elapsed > period {
            return 0.0;
        }
        self.base.source_at(period - elapsed)
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::Blip;
    use crate::{Constant, Ramp, Step, Zero};

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_speed_period() {
        let fast = Speed::new(Ramp::new(1000).unwrap(), 4.0).unwrap();
        assert_eq!(fast.period(), 250);

        let slow = Speed::new(Ramp::new(1000).unwrap(), 0.5).unwrap();
        assert_eq!(slow.period(), 2000);

        // Truncated towards zero
        let odd = Speed::new(Ramp::new(1000).unwrap(), 3.0).unwrap();
        assert_eq!(odd.period(), 333);
    }

    #[test]
    fn test_speed_also_scales_value() {
        // The value is multiplied by the factor along with the time axis
        let mut fast = Speed::new(Constant::new(100, 0.25).unwrap(), 2.0).unwrap();
        assert_eq!(fast.value_at(10), 0.5);

        let mut slow = Speed::new(Ramp::new(100).unwrap(), 0.5).unwrap();
        assert_eq!(slow.value_at(200), 0.5);
        assert_eq!(slow.value_at(100), 0.25);
    }

    #[test]
    fn test_speed_rejects_bad_factors() {
        for factor in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let result = Speed::new(Zero::new(10).unwrap(), factor);
            assert!(
                matches!(result, Err(SyncError::InvalidFactor { node: "Speed", .. })),
                "factor {factor} should be rejected"
            );
        }
    }

    #[test]
    fn test_speed_rejects_truncation_to_zero() {
        // 1000 / 2000 truncates to 0
        assert_eq!(
            Speed::new(Ramp::new(1000).unwrap(), 2000.0).map(|s| s.period()),
            Err(SyncError::ZeroPeriod { node: "Speed" })
        );
        assert_eq!(Speed::new(Ramp::new(1000).unwrap(), 1000.0).unwrap().period(), 1);
    }

    #[test]
    fn test_speed_overflow() {
        assert_eq!(
            Speed::new(Zero::new(u32::MAX).unwrap(), 0.5).map(|s| s.period()),
            Err(SyncError::PeriodOverflow { node: "Speed" })
        );
    }

    #[test]
    fn test_slice_x_wraps() {
        let mut ramp = Ramp::new(1000).unwrap();
        let mut sliced = SliceX::new(Ramp::new(1000).unwrap(), 200).unwrap();
        assert_eq!(sliced.value_at(0), ramp.value_at(200));
        assert_eq!(sliced.value_at(799), ramp.value_at(999));
        assert_eq!(sliced.value_at(800), ramp.value_at(0));
        assert_eq!(sliced.value_at(900), ramp.value_at(100));
        assert_eq!(sliced.value_at(1000), ramp.value_at(200));
        assert_eq!(sliced.value_at(1001), 0.0);
    }

    #[test]
    fn test_slice_x_negative_offset() {
        let mut sliced = SliceX::new(Ramp::new(1000).unwrap(), -200).unwrap();
        assert!(approx_eq(sliced.value_at(0), 0.8));
        assert!(approx_eq(sliced.value_at(199), 0.999));
        assert_eq!(sliced.value_at(200), 0.0);
        assert!(approx_eq(sliced.value_at(500), 0.3));
    }

    #[test]
    fn test_slice_x_offset_larger_than_period() {
        let mut a = SliceX::new(Ramp::new(100).unwrap(), 30).unwrap();
        let mut b = SliceX::new(Ramp::new(100).unwrap(), 330).unwrap();
        for elapsed in 0..=100 {
            assert_eq!(a.value_at(elapsed), b.value_at(elapsed));
        }
    }

    #[test]
    fn test_slice_x_rejects_zero_period() {
        assert_eq!(
            SliceX::new(Blip::default(), 5).map(|s| s.offset()),
            Err(SyncError::ZeroPeriod { node: "SliceX" })
        );
    }

    #[test]
    fn test_delay() {
        let mut delayed = Delay::new(Step::new(50, 100).unwrap(), 200).unwrap();
        assert_eq!(delayed.period(), 300);
        assert_eq!(delayed.delay(), 200);
        assert_eq!(delayed.value_at(0), 0.0);
        assert_eq!(delayed.value_at(199), 0.0);
        assert_eq!(delayed.value_at(200), 1.0);
        assert_eq!(delayed.value_at(249), 1.0);
        assert_eq!(delayed.value_at(250), 0.0);
        assert_eq!(delayed.value_at(301), 0.0);
    }

    #[test]
    fn test_delay_of_constant_ends_at_period() {
        let mut delayed = Delay::new(Constant::new(100, 1.0).unwrap(), 50).unwrap();
        assert_eq!(delayed.value_at(150), 1.0);
        assert_eq!(delayed.value_at(151), 0.0);
    }

    #[test]
    fn test_delay_rejects_zero_period() {
        assert_eq!(
            Delay::new(Blip::default(), 0).map(|d| d.period()),
            Err(SyncError::ZeroPeriod { node: "Delay" })
        );
        // A delay alone gives the node a period
        assert_eq!(Delay::new(Blip::default(), 5).unwrap().period(), 5);
    }

    #[test]
    fn test_reverse_rejects_zero_period() {
        assert_eq!(
            Reverse::new(Blip::default()).map(|r| r.period()),
            Err(SyncError::ZeroPeriod { node: "Reverse" })
        );
    }

    #[test]
    fn test_reverse() {
        let mut reversed = Reverse::new(Ramp::new(100).unwrap()).unwrap();
        assert_eq!(reversed.period(), 100);
        assert_eq!(reversed.value_at(0), 1.0);
        assert_eq!(reversed.value_at(50), 0.5);
        assert_eq!(reversed.value_at(100), 0.0);
        assert_eq!(reversed.value_at(101), 0.0);
    }
}
