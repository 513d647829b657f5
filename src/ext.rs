//! Fluent builder surface.
//!
//! [`SyncExt`] is implemented for every [`SyncFunction`], so trees read left
//! to right:
//!
//! ```
//! use syncwave::{Ramp, SyncExt, SyncFunction};
//!
//! let mut breathe = Ramp::new(1000)?
//!     .mirror()?
//!     .scale_y(0.8)?
//!     .offset_y(0.1)?
//!     .repeat_forever()?;
//! assert_eq!(breathe.period(), 2000);
//! assert!((breathe.value_at(1000) - 0.9).abs() < 1e-6);
//! # Ok::<(), syncwave::SyncError>(())
//! ```
//!
//! The `+` operator concatenates any two nodes:
//!
//! ```
//! use syncwave::{InverseRamp, Ramp, SyncFunction};
//!
//! let mut tent = Ramp::new(100)? + InverseRamp::new(100)?;
//! assert_eq!(tent.period(), 200);
//! assert_eq!(tent.value_at(150), 0.5);
//! # Ok::<(), syncwave::SyncError>(())
//! ```

use crate::combinators::{Add, And, Concat, Max, Min, Or, Subtract};
use crate::transforms::{
    Delay, Inverse, Mirror, OffsetY, RepeatForever, RepeatN, Reverse, ScaleY, SliceX, Speed,
};
use crate::waveforms::{
    Constant, Cosine, Impulse, InverseRamp, Ramp, Sine, Step, Trapezoidal, Triangular, Zero,
};
use crate::{Clock, Millis, Result, SyncFunction};

/// Extension trait providing the fluent builder API for all nodes.
pub trait SyncExt: SyncFunction + Sized {
    /// Plays this node faster or slower; see [`Speed`].
    fn speed(self, factor: f32) -> Result<Speed<Self>> {
        Speed::new(self, factor)
    }

    /// Multiplies the output by `factor`.
    fn scale_y(self, factor: f32) -> Result<ScaleY<Self>> {
        ScaleY::new(self, factor)
    }

    /// Adds `offset` to the output.
    fn offset_y(self, offset: f32) -> Result<OffsetY<Self>> {
        OffsetY::new(self, offset)
    }

    /// Phase-shifts this node within its period; see [`SliceX`].
    fn slice_x(self, offset: i32) -> Result<SliceX<Self>> {
        SliceX::new(self, offset)
    }

    /// Prepends `delay` milliseconds of silence.
    fn delay(self, delay: Millis) -> Result<Delay<Self>> {
        Delay::new(self, delay)
    }

    /// Flips the output, `1 - v`.
    fn inverse(self) -> Result<Inverse<Self>> {
        Inverse::new(self)
    }

    /// Plays this node backwards.
    fn reverse(self) -> Result<Reverse<Self>> {
        Reverse::new(self)
    }

    /// Plays this node `count` times.
    fn repeat(self, count: u32) -> Result<RepeatN<Self>> {
        RepeatN::new(self, count)
    }

    /// Plays this node indefinitely.
    fn repeat_forever(self) -> Result<RepeatForever<Self>> {
        RepeatForever::new(self)
    }

    /// Plays this node forward then backward.
    fn mirror(self) -> Result<Mirror<Self>> {
        Mirror::new(self)
    }

    /// Plays `next` once this node's period has elapsed.
    fn then<B: SyncFunction>(self, next: B) -> Result<Concat<Self, B>> {
        Concat::new(self, next)
    }

    /// Sums this node with another.
    ///
    /// Named `sum` rather than `add` so it never competes with the `+`
    /// operator's [`std::ops::Add::add`].
    fn sum<B: SyncFunction>(self, other: B) -> Result<Add<Self, B>> {
        Add::new(self, other)
    }

    /// Subtracts another node from this one, clamping at zero.
    fn subtract<B: SyncFunction>(self, other: B) -> Result<Subtract<Self, B>> {
        Subtract::new(self, other)
    }

    /// Takes the larger of the two outputs.
    fn max<B: SyncFunction>(self, other: B) -> Result<Max<Self, B>> {
        Max::new(self, other)
    }

    /// Takes the smaller of the two outputs.
    fn min<B: SyncFunction>(self, other: B) -> Result<Min<Self, B>> {
        Min::new(self, other)
    }

    /// 1.0 where both outputs are high.
    fn and<B: SyncFunction>(self, other: B) -> Result<And<Self, B>> {
        And::new(self, other)
    }

    /// 1.0 where either output is high.
    fn or<B: SyncFunction>(self, other: B) -> Result<Or<Self, B>> {
        Or::new(self, other)
    }

    /// Anchors this node's start at the clock's current reading.
    ///
    /// Constructors anchor at tick 0, the epoch of a clock created alongside
    /// the tree. Use this when the clock has already been running:
    ///
    /// ```
    /// use syncwave::{ManualClock, Ramp, SyncExt, SyncFunction};
    ///
    /// let clock = ManualClock::new(5_000);
    /// let mut ramp = Ramp::new(1000)?.started(&clock);
    /// assert_eq!(ramp.elapsed_since(&clock), 0);
    /// assert_eq!(ramp.value_now(&clock), 0.0);
    /// # Ok::<(), syncwave::SyncError>(())
    /// ```
    fn started(mut self, clock: &dyn Clock) -> Self {
        self.restart(clock);
        self
    }

    /// Erases the concrete type, e.g. to store trees of different shapes together.
    fn boxed(self) -> Box<dyn SyncFunction>
    where
        Self: 'static,
    {
        Box::new(self)
    }

    /// Iterates `(elapsed, value)` pairs from 0 through the period, `step` apart.
    ///
    /// A `step` of 0 is treated as 1.
    ///
    /// ```
    /// use syncwave::{Ramp, SyncExt};
    ///
    /// let mut ramp = Ramp::new(100)?;
    /// let points: Vec<_> = ramp.samples(50).collect();
    /// assert_eq!(points, vec![(0, 0.0), (50, 0.5), (100, 1.0)]);
    /// # Ok::<(), syncwave::SyncError>(())
    /// ```
    fn samples(&mut self, step: Millis) -> Samples<'_, Self> {
        Samples {
            period: self.period(),
            source: self,
            step: step.max(1),
            next: Some(0),
        }
    }
}

impl<T: SyncFunction> SyncExt for T {}

/// Iterator returned by [`SyncExt::samples`].
#[derive(Debug)]
pub struct Samples<'a, F> {
    source: &'a mut F,
    period: Millis,
    step: Millis,
    next: Option<Millis>,
}

impl<F: SyncFunction> Iterator for Samples<'_, F> {
    type Item = (Millis, f32);

    fn next(&mut self) -> Option<Self::Item> {
        let elapsed = self.next.filter(|&e| e <= self.period)?;
        self.next = elapsed.checked_add(self.step);
        Some((elapsed, self.source.value_at(elapsed)))
    }
}

/// Implements `+` as concatenation for the node types of this crate.
///
/// The left-hand side always has a non-zero period, so the concatenation
/// cannot fail.
macro_rules! impl_concat_operator {
    (unary: $($ty:ident),* $(,)?) => {
        $(
            impl<F: SyncFunction, R: SyncFunction> std::ops::Add<R> for $ty<F> {
                type Output = Concat<Self, R>;

                fn add(self, rhs: R) -> Self::Output {
                    Concat::extending(self, rhs)
                }
            }
        )*
    };
    (binary: $($ty:ident),* $(,)?) => {
        $(
            impl<A: SyncFunction, B: SyncFunction, R: SyncFunction> std::ops::Add<R> for $ty<A, B> {
                type Output = Concat<Self, R>;

                fn add(self, rhs: R) -> Self::Output {
                    Concat::extending(self, rhs)
                }
            }
        )*
    };
    ($($ty:ident),* $(,)?) => {
        $(
            impl<R: SyncFunction> std::ops::Add<R> for $ty {
                type Output = Concat<Self, R>;

                fn add(self, rhs: R) -> Self::Output {
                    Concat::extending(self, rhs)
                }
            }
        )*
    };
}

impl_concat_operator!(
    Zero,
    Constant,
    Impulse,
    Step,
    Ramp,
    InverseRamp,
    Triangular,
    Trapezoidal,
    Sine,
    Cosine,
);
impl_concat_operator!(
    unary: Speed,
    ScaleY,
    OffsetY,
    SliceX,
    Delay,
    Inverse,
    Reverse,
    RepeatN,
    RepeatForever,
    Mirror,
);
impl_concat_operator!(binary: Add, Subtract, Max, Min, And, Or, Concat);
