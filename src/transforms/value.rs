//! Transformations of the value axis.

use delegate::delegate;

use crate::{Millis, Result, SyncFunction, Tick, Transformation};

/// Multiplies the child's value by a factor; the period is unchanged.
///
/// # Examples
///
/// ```
/// use syncwave::{Ramp, SyncExt, SyncFunction};
///
/// let mut dimmed = Ramp::new(100)?.scale_y(0.5)?;
/// assert_eq!(dimmed.value_at(100), 0.5);
/// # Ok::<(), syncwave::SyncError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ScaleY<F> {
    base: Transformation<F>,
    factor: f32,
}

impl<F: SyncFunction> ScaleY<F> {
    pub fn new(source: F, factor: f32) -> Result<Self> {
        Ok(Self {
            base: Transformation::new("ScaleY", source)?,
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

impl<F: SyncFunction> SyncFunction for ScaleY<F> {
    fn value_at(&mut self, elapsed: Millis) -> f32 {
        self.factor * self.base.source_at(elapsed)
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

/// Adds a constant offset to the child's value; the period is unchanged.
///
/// # Examples
///
/// ```
/// use syncwave::{Ramp, SyncExt, SyncFunction};
///
/// // Never fully dark
/// let mut glow = Ramp::new(100)?.scale_y(0.75)?.offset_y(0.25)?;
/// assert_eq!(glow.value_at(0), 0.25);
/// assert_eq!(glow.value_at(100), 1.0);
/// # Ok::<(), syncwave::SyncError>(())
/// ```
#[derive(Debug, Clone)]
pub struct OffsetY<F> {
    base: Transformation<F>,
    offset: f32,
}

impl<F: SyncFunction> OffsetY<F> {
    pub fn new(source: F, offset: f32) -> Result<Self> {
        Ok(Self {
            base: Transformation::new("OffsetY", source)?,
            offset,
        })
    }

    pub fn offset(&self) -> f32 {
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

impl<F: SyncFunction> SyncFunction for OffsetY<F> {
    fn value_at(&mut self, elapsed: Millis) -> f32 {
        self.offset + self.base.source_at(elapsed)
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

/// Complements the child's value: `1 - value`.
///
/// # Examples
///
/// ```
/// use syncwave::{Ramp, SyncExt, SyncFunction};
///
/// let mut falling = Ramp::new(100)?.inverse()?;
/// assert_eq!(falling.value_at(25), 0.75);
/// # Ok::<(), syncwave::SyncError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Inverse<F> {
    base: Transformation<F>,
}

impl<F: SyncFunction> Inverse<F> {
    pub fn new(source: F) -> Result<Self> {
        Ok(Self {
            base: Transformation::new("Inverse", source)?,
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

impl<F: SyncFunction> SyncFunction for Inverse<F> {
    fn value_at(&mut self, elapsed: Millis) -> f32 {
        1.0 - self.base.source_at(elapsed)
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
