//! Timing anchor and the one-child / two-child composition helpers.
//!
//! Every node embeds a [`Timing`]. Combinators embed it through
//! [`Transformation`] (one child) or [`Operation`] (two children), which own
//! their children and expose them through accessors. Both helpers refuse to
//! build a combinator whose period would be zero.

use delegate::delegate;

use super::{Millis, Result, SyncFunction, Tick, require_period};

/// A node's period together with the tick its local clock was zeroed at.
///
/// The period is fixed at construction. The start tick moves only through
/// [`restart_at`](Self::restart_at).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timing {
    period: Millis,
    start: Tick,
}

impl Timing {
    /// Creates a timing anchored at tick 0, the epoch of a clock created
    /// alongside the tree.
    pub fn new(period: Millis) -> Self {
        Self { period, start: 0 }
    }

    pub fn period(&self) -> Millis {
        self.period
    }

    pub fn start_time(&self) -> Tick {
        self.start
    }

    pub fn restart_at(&mut self, now: Tick) {
        self.start = now;
    }
}

/// Shape shared by all single-child combinators.
#[derive(Debug, Clone)]
pub struct Transformation<F> {
    timing: Timing,
    source: F,
}

impl<F: SyncFunction> Transformation<F> {
    /// Wraps `source` keeping its period.
    pub fn new(node: &'static str, source: F) -> Result<Self> {
        let period = source.period();
        Self::with_period(node, source, period)
    }

    /// Wraps `source` with a period derived by the combinator `node`.
    pub fn with_period(node: &'static str, source: F, period: Millis) -> Result<Self> {
        require_period(node, period)?;
        Ok(Self {
            timing: Timing::new(period),
            source,
        })
    }

    /// The wrapped node.
    pub fn source(&self) -> &F {
        &self.source
    }

    /// The wrapped node, e.g. to restart its own clock.
    pub fn source_mut(&mut self) -> &mut F {
        &mut self.source
    }

    /// Unwraps the combinator, returning the child.
    pub fn into_source(self) -> F {
        self.source
    }

    /// Evaluates the child at `elapsed`.
    pub fn source_at(&mut self, elapsed: Millis) -> f32 {
        self.source.value_at(elapsed)
    }

    /// Resets the child.
    pub fn reset(&mut self) {
        self.source.reset();
    }

    delegate! {
        to self.timing {
            pub fn period(&self) -> Millis;
            pub fn start_time(&self) -> Tick;
            pub fn restart_at(&mut self, now: Tick);
        }
    }
}

/// Shape shared by all two-child operators.
#[derive(Debug, Clone)]
pub struct Operation<A, B> {
    timing: Timing,
    first: A,
    second: B,
}

impl<A: SyncFunction, B: SyncFunction> Operation<A, B> {
    /// Combines two nodes; the period is the longer of the two.
    pub fn new(node: &'static str, first: A, second: B) -> Result<Self> {
        let period = first.period().max(second.period());
        Self::with_period(node, first, second, period)
    }

    /// Combines two nodes with a period derived by the operator `node`.
    pub fn with_period(node: &'static str, first: A, second: B, period: Millis) -> Result<Self> {
        require_period(node, period)?;
        Ok(Self::extending(first, second, period))
    }

    /// Combines two nodes whose derived period is already known to be non-zero.
    pub(crate) fn extending(first: A, second: B, period: Millis) -> Self {
        debug_assert!(period > 0, "operator built with a zero period");
        Self {
            timing: Timing::new(period),
            first,
            second,
        }
    }

    pub fn first(&self) -> &A {
        &self.first
    }

    pub fn first_mut(&mut self) -> &mut A {
        &mut self.first
    }

    pub fn second(&self) -> &B {
        &self.second
    }

    pub fn second_mut(&mut self) -> &mut B {
        &mut self.second
    }

    /// Evaluates both children at the same elapsed time.
    pub fn values_at(&mut self, elapsed: Millis) -> (f32, f32) {
        (
            self.first.value_at(elapsed),
            self.second.value_at(elapsed),
        )
    }

    /// Resets both children.
    pub fn reset(&mut self) {
        self.first.reset();
        self.second.reset();
    }

    delegate! {
        to self.timing {
            pub fn period(&self) -> Millis;
            pub fn start_time(&self) -> Tick;
            pub fn restart_at(&mut self, now: Tick);
        }
    }
}
