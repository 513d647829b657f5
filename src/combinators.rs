//! Algebraic operators for combining two sync functions.
//!
//! Every operator evaluates both children at the *same* elapsed time and
//! combines the results point-wise. The period is the longer of the two
//! children's periods, except for [`Concat`], which plays its children one
//! after the other. Construction fails when that period would be zero.

use delegate::delegate;

use crate::{Millis, Operation, Result, SyncFunction, Tick};

/// Sums two functions (unclamped).
///
/// # Examples
///
/// ```
/// use syncwave::{Constant, Ramp, SyncFunction, combinators::Add};
///
/// let mut sum = Add::new(Ramp::new(100)?, Constant::new(100, 0.5)?)?;
/// assert_eq!(sum.value_at(100), 1.5);
/// # Ok::<(), syncwave::SyncError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Add<A, B> {
    op: Operation<A, B>,
}

impl<A: SyncFunction, B: SyncFunction> Add<A, B> {
    /// Creates a new Add operator.
    pub fn new(a: A, b: B) -> Result<Self> {
        Ok(Self {
            op: Operation::new("Add", a, b)?,
        })
    }

    /// Both children.
    pub fn operands(&self) -> &Operation<A, B> {
        &self.op
    }

    pub fn operands_mut(&mut self) -> &mut Operation<A, B> {
        &mut self.op
    }
}

impl<A: SyncFunction, B: SyncFunction> SyncFunction for Add<A, B> {
    fn value_at(&mut self, elapsed: Millis) -> f32 {
        let (a, b) = self.op.values_at(elapsed);
        a + b
    }

    delegate! {
        to self.op {
            fn period(&self) -> Millis;
            fn reset(&mut self);
            fn start_time(&self) -> Tick;
            fn restart_at(&mut self, now: Tick);
        }
    }
}

/// Subtracts the second function from the first, clamping at zero.
///
/// This is `max(a - b, 0)`, not a symmetric difference: wherever `b` exceeds
/// `a` the output is 0.0.
///
/// # Examples
///
/// ```
/// use syncwave::{Constant, Ramp, SyncFunction, combinators::Subtract};
///
/// let mut diff = Subtract::new(Ramp::new(100)?, Constant::new(100, 0.5)?)?;
/// assert_eq!(diff.value_at(100), 0.5);
/// assert_eq!(diff.value_at(20), 0.0);
/// # Ok::<(), syncwave::SyncError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Subtract<A, B> {
    op: Operation<A, B>,
}

impl<A: SyncFunction, B: SyncFunction> Subtract<A, B> {
    /// Creates a new Subtract operator.
    pub fn new(a: A, b: B) -> Result<Self> {
        Ok(Self {
            op: Operation::new("Subtract", a, b)?,
        })
    }

    pub fn operands(&self) -> &Operation<A, B> {
        &self.op
    }

    pub fn operands_mut(&mut self) -> &mut Operation<A, B> {
        &mut self.op
    }
}

impl<A: SyncFunction, B: SyncFunction> SyncFunction for Subtract<A, B> {
    fn value_at(&mut self, elapsed: Millis) -> f32 {
        let (a, b) = self.op.values_at(elapsed);
        (a - b).max(0.0)
    }

    delegate! {
        to self.op {
            fn period(&self) -> Millis;
            fn reset(&mut self);
            fn start_time(&self) -> Tick;
            fn restart_at(&mut self, now: Tick);
        }
    }
}

/// Takes the maximum of two functions.
///
/// # Examples
///
/// ```
/// use syncwave::{InverseRamp, Ramp, SyncFunction, combinators::Max};
///
/// // A "V" shape: falling then rising
/// let mut vee = Max::new(Ramp::new(100)?, InverseRamp::new(100)?)?;
/// assert_eq!(vee.value_at(0), 1.0);
/// assert_eq!(vee.value_at(50), 0.5);
/// assert_eq!(vee.value_at(75), 0.75);
/// # Ok::<(), syncwave::SyncError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Max<A, B> {
    op: Operation<A, B>,
}

impl<A: SyncFunction, B: SyncFunction> Max<A, B> {
    /// Creates a new Max operator.
    pub fn new(a: A, b: B) -> Result<Self> {
        Ok(Self {
            op: Operation::new("Max", a, b)?,
        })
    }

    pub fn operands(&self) -> &Operation<A, B> {
        &self.op
    }

    pub fn operands_mut(&mut self) -> &mut Operation<A, B> {
        &mut self.op
    }
}

impl<A: SyncFunction, B: SyncFunction> SyncFunction for Max<A, B> {
    fn value_at(&mut self, elapsed: Millis) -> f32 {
        let (a, b) = self.op.values_at(elapsed);
        a.max(b)
    }

    delegate! {
        to self.op {
            fn period(&self) -> Millis;
            fn reset(&mut self);
            fn start_time(&self) -> Tick;
            fn restart_at(&mut self, now: Tick);
        }
    }
}

/// Takes the minimum of two functions.
///
/// # Examples
///
/// ```
/// use syncwave::{InverseRamp, Ramp, SyncFunction, combinators::Min};
///
/// // A "Λ" shape: rising then falling
/// let mut peak = Min::new(Ramp::new(100)?, InverseRamp::new(100)?)?;
/// assert_eq!(peak.value_at(0), 0.0);
/// assert_eq!(peak.value_at(50), 0.5);
/// assert_eq!(peak.value_at(75), 0.25);
/// # Ok::<(), syncwave::SyncError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Min<A, B> {
    op: Operation<A, B>,
}

impl<A: SyncFunction, B: SyncFunction> Min<A, B> {
    /// Creates a new Min operator.
    pub fn new(a: A, b: B) -> Result<Self> {
        Ok(Self {
            op: Operation::new("Min", a, b)?,
        })
    }

    pub fn operands(&self) -> &Operation<A, B> {
        &self.op
    }

    pub fn operands_mut(&mut self) -> &mut Operation<A, B> {
        &mut self.op
    }
}

impl<A: SyncFunction, B: SyncFunction> SyncFunction for Min<A, B> {
    fn value_at(&mut self, elapsed: Millis) -> f32 {
        let (a, b) = self.op.values_at(elapsed);
        a.min(b)
    }

    delegate! {
        to self.op {
            fn period(&self) -> Millis;
            fn reset(&mut self);
            fn start_time(&self) -> Tick;
            fn restart_at(&mut self, now: Tick);
        }
    }
}

/// 1.0 when both functions are above zero, otherwise 0.0.
///
/// # Examples
///
/// ```
/// use syncwave::{Step, SyncFunction, combinators::And};
///
/// let mut both = And::new(Step::new(60, 100)?, Step::new(30, 100)?)?;
/// assert_eq!(both.value_at(10), 1.0);
/// assert_eq!(both.value_at(40), 0.0);
/// # Ok::<(), syncwave::SyncError>(())
/// ```
#[derive(Debug, Clone)]
pub struct And<A, B> {
    op: Operation<A, B>,
}

impl<A: SyncFunction, B: SyncFunction> And<A, B> {
    /// Creates a new And operator.
    pub fn new(a: A, b: B) -> Result<Self> {
        Ok(Self {
            op: Operation::new("And", a, b)?,
        })
    }

    pub fn operands(&self) -> &Operation<A, B> {
        &self.op
    }

    pub fn operands_mut(&mut self) -> &mut Operation<A, B> {
        &mut self.op
    }
}

impl<A: SyncFunction, B: SyncFunction> SyncFunction for And<A, B> {
    fn value_at(&mut self, elapsed: Millis) -> f32 {
        let (a, b) = self.op.values_at(elapsed);
        if a > 0.0 && b > 0.0 { 1.0 } else { 0.0 }
    }

    delegate! {
        to self.op {
            fn period(&self) -> Millis;
            fn reset(&mut self);
            fn start_time(&self) -> Tick;
            fn restart_at(&mut self, now: Tick);
        }
    }
}

/// 1.0 when either function is above zero, otherwise 0.0.
///
/// # Examples
///
/// ```
/// use syncwave::{Step, SyncFunction, Zero, combinators::Or};
///
/// let mut either = Or::new(Step::new(30, 100)?, Zero::new(100)?)?;
/// assert_eq!(either.value_at(10), 1.0);
/// assert_eq!(either.value_at(40), 0.0);
/// # Ok::<(), syncwave::SyncError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Or<A, B> {
    op: Operation<A, B>,
}

impl<A: SyncFunction, B: SyncFunction> Or<A, B> {
    /// Creates a new Or operator.
    pub fn new(a: A, b: B) -> Result<Self> {
        Ok(Self {
            op: Operation::new("Or", a, b)?,
        })
    }

    pub fn operands(&self) -> &Operation<A, B> {
        &self.op
    }

    pub fn operands_mut(&mut self) -> &mut Operation<A, B> {
        &mut self.op
    }
}

impl<A: SyncFunction, B: SyncFunction> SyncFunction for Or<A, B> {
    fn value_at(&mut self, elapsed: Millis) -> f32 {
        let (a, b) = self.op.values_at(elapsed);
        if a > 0.0 || b > 0.0 { 1.0 } else { 0.0 }
    }

    delegate! {
        to self.op {
            fn period(&self) -> Millis;
            fn reset(&mut self);
            fn start_time(&self) -> Tick;
            fn restart_at(&mut self, now: Tick);
        }
    }
}

/// Plays the first function, then the second.
///
/// The period is the sum of both periods. Up to and including the first
/// child's period the first child plays; after that the second child plays,
/// shifted so that it starts from its own zero.
///
/// This is the sequencing primitive multi-stage patterns are built from. The
/// `+` operator on any node is shorthand for it.
///
/// # Examples
///
/// ```
/// use syncwave::{InverseRamp, Ramp, SyncFunction, combinators::Concat};
///
/// let mut saw = Concat::new(Ramp::new(100)?, InverseRamp::new(200)?)?;
/// assert_eq!(saw.period(), 300);
/// assert_eq!(saw.value_at(50), 0.5);
/// assert_eq!(saw.value_at(150), 0.75);
/// # Ok::<(), syncwave::SyncError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Concat<A, B> {
    op: Operation<A, B>,
}

impl<A: SyncFunction, B: SyncFunction> Concat<A, B> {
    /// Creates a new Concat operator.
    pub fn new(a: A, b: B) -> Result<Self> {
        let period = a.period().saturating_add(b.period());
        Ok(Self {
            op: Operation::with_period("Concat", a, b, period)?,
        })
    }

    /// Appends `b` to `a`, where `a` is a node of this crate.
    ///
    /// Every node built here has a non-zero period, so the sum cannot be zero.
    pub(crate) fn extending(a: A, b: B) -> Self {
        let period = a.period().saturating_add(b.period());
        Self {
            op: Operation::extending(a, b, period),
        }
    }

    pub fn operands(&self) -> &Operation<A, B> {
        &self.op
    }

    pub fn operands_mut(&mut self) -> &mut Operation<A, B> {
        &mut self.op
    }
}

impl<A: SyncFunction, B: SyncFunction> SyncFunction for Concat<A, B> {
    fn value_at(&mut self, elapsed: Millis) -> f32 {
        let split = self.op.first().period();
        if elapsed <= split {
            self.op.first_mut().value_at(elapsed)
        } else {
            self.op.second_mut().value_at(elapsed - split)
        }
    }

    delegate! {
        to self.op {
            fn period(&self) -> Millis;
            fn reset(&mut self);
            fn start_time(&self) -> Tick;
            fn restart_at(&mut self, now: Tick);
        }
    }
}
