//! Piecewise-linear rise/fall shapes.

use delegate::delegate;

use crate::core::require_segment;
use crate::{Millis, Result, SyncError, SyncFunction, Tick, Timing};

/// Rises linearly to 1.0 over `rise`, then falls back to 0.0 over `fall`.
///
/// # Examples
///
/// ```
/// use syncwave::{SyncFunction, Triangular};
///
/// let mut tri = Triangular::new(100, 300)?;
/// assert_eq!(tri.period(), 400);
/// assert_eq!(tri.value_at(50), 0.5);
/// assert_eq!(tri.value_at(100), 1.0);
/// assert_eq!(tri.value_at(250), 0.5);
/// assert_eq!(tri.value_at(400), 0.0);
/// # Ok::<(), syncwave::SyncError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangular {
    timing: Timing,
    rise: Millis,
    fall: Millis,
}

impl Triangular {
    /// Creates a triangle from its rise and fall durations.
    ///
    /// Both segments are divided by, so neither may be zero.
    pub fn new(rise: Millis, fall: Millis) -> Result<Self> {
        require_segment("Triangular", "rise", rise)?;
        require_segment("Triangular", "fall", fall)?;
        let period = rise
            .checked_add(fall)
            .ok_or(SyncError::PeriodOverflow { node: "Triangular" })?;
        Ok(Self {
            timing: Timing::new(period),
            rise,
            fall,
        })
    }

    /// Creates a symmetric triangle peaking halfway through `period`.
    pub fn symmetric(period: Millis) -> Result<Self> {
        let rise = period / 2;
        Self::new(rise, period - rise)
    }

    pub fn rise(&self) -> Millis {
        self.rise
    }

    pub fn fall(&self) -> Millis {
        self.fall
    }
}

impl SyncFunction for Triangular {
    fn value_at(&mut self, elapsed: Millis) -> f32 {
        if elapsed > self.timing.period() {
            return 0.0;
        }
        if elapsed < self.rise {
            return elapsed as f32 / self.rise as f32;
        }
        1.0 - (elapsed - self.rise) as f32 / self.fall as f32
    }

    delegate! {
        to self.timing {
            fn period(&self) -> Millis;
            fn start_time(&self) -> Tick;
            fn restart_at(&mut self, now: Tick);
        }
    }
}

/// Rises over `rise`, holds 1.0 for `hold`, then falls over `fall`.
///
/// # Examples
///
/// ```
/// use syncwave::{SyncFunction, Trapezoidal};
///
/// let mut trap = Trapezoidal::new(100, 200, 100)?;
/// assert_eq!(trap.period(), 400);
/// assert_eq!(trap.value_at(50), 0.5);
/// assert_eq!(trap.value_at(200), 1.0);
/// assert_eq!(trap.value_at(350), 0.5);
/// # Ok::<(), syncwave::SyncError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trapezoidal {
    timing: Timing,
    rise: Millis,
    hold: Millis,
    fall: Millis,
}

impl Trapezoidal {
    /// Creates a trapezoid from its three segment durations.
    ///
    /// The plateau may be empty; the sloped segments may not.
    pub fn new(rise: Millis, hold: Millis, fall: Millis) -> Result<Self> {
        require_segment("Trapezoidal", "rise", rise)?;
        require_segment("Trapezoidal", "fall", fall)?;
        let period = rise
            .checked_add(hold)
            .and_then(|p| p.checked_add(fall))
            .ok_or(SyncError::PeriodOverflow {
                node: "Trapezoidal",
            })?;
        Ok(Self {
            timing: Timing::new(period),
            rise,
            hold,
            fall,
        })
    }

    /// Splits `period` into three roughly equal segments.
    ///
    /// The fall absorbs the remainder of the division.
    pub fn even(period: Millis) -> Result<Self> {
        let third = period / 3;
        Self::new(third, third, period - 2 * third)
    }

    pub fn rise(&self) -> Millis {
        self.rise
    }

    pub fn hold(&self) -> Millis {
        self.hold
    }

    pub fn fall(&self) -> Millis {
        self.fall
    }
}

impl SyncFunction for Trapezoidal {
    fn value_at(&mut self, elapsed: Millis) -> f32 {
        if elapsed > self.timing.period() {
            return 0.0;
        }
        if elapsed < self.rise {
            elapsed as f32 / self.rise as f32
        } else if elapsed < self.rise + self.hold {
            1.0
        } else {
            1.0 - (elapsed - self.rise - self.hold) as f32 / self.fall as f32
        }
    }

    delegate! {
        to self.timing {
            fn period(&self) -> Millis;
            fn start_time(&self) -> Tick;
            fn restart_at(&mut self, now: Tick);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_triangular_boundaries() {
        let mut tri = Triangular::new(100, 100).unwrap();
        assert_eq!(tri.value_at(0), 0.0);
        assert_eq!(tri.value_at(100), 1.0);
        assert_eq!(tri.value_at(200), 0.0);
        assert_eq!(tri.value_at(201), 0.0);
    }

    #[test]
    fn test_triangular_symmetric() {
        let tri = Triangular::symmetric(301).unwrap();
        assert_eq!(tri.rise(), 150);
        assert_eq!(tri.fall(), 151);
        assert_eq!(tri.period(), 301);
    }

    #[test]
    fn test_triangular_rejects_zero_segments() {
        assert_eq!(
            Triangular::new(0, 10),
            Err(SyncError::ZeroSegment {
                node: "Triangular",
                segment: "rise"
            })
        );
        assert_eq!(
            Triangular::new(10, 0),
            Err(SyncError::ZeroSegment {
                node: "Triangular",
                segment: "fall"
            })
        );
        assert!(Triangular::symmetric(1).is_err());
    }

    #[test]
    fn test_triangular_overflow() {
        assert_eq!(
            Triangular::new(u32::MAX, 1),
            Err(SyncError::PeriodOverflow { node: "Triangular" })
        );
    }

    #[test]
    fn test_trapezoidal_segments() {
        let mut trap = Trapezoidal::new(100, 100, 200).unwrap();
        assert_eq!(trap.value_at(0), 0.0);
        assert!(approx_eq(trap.value_at(25), 0.25));
        assert_eq!(trap.value_at(100), 1.0);
        assert_eq!(trap.value_at(199), 1.0);
        assert_eq!(trap.value_at(200), 1.0);
        assert!(approx_eq(trap.value_at(300), 0.5));
        assert_eq!(trap.value_at(400), 0.0);
        assert_eq!(trap.value_at(401), 0.0);
    }

    #[test]
    fn test_trapezoidal_empty_plateau() {
        let mut trap = Trapezoidal::new(50, 0, 50).unwrap();
        assert_eq!(trap.value_at(50), 1.0);
        assert!(approx_eq(trap.value_at(75), 0.5));
    }

    #[test]
    fn test_trapezoidal_even() {
        let trap = Trapezoidal::even(1000).unwrap();
        assert_eq!(trap.rise(), 333);
        assert_eq!(trap.hold(), 333);
        assert_eq!(trap.fall(), 334);
        assert_eq!(trap.period(), 1000);
        assert!(Trapezoidal::even(2).is_err());
    }
}
