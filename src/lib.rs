//! Syncwave - time-synchronized waveform trees for Rust
//!
//! Build a tree of primitive shapes, operators and transformations, then
//! sample it against a millisecond clock to drive LED brightness, servo
//! positions or any other value that should follow a pattern over time.
//!
//! ```
//! use syncwave::{ManualClock, Ramp, SyncExt, SyncFunction, Trapezoidal};
//!
//! let clock = ManualClock::new(0);
//! let mut fade = Ramp::new(500)?
//!     .then(Trapezoidal::even(1500)?)?
//!     .repeat(2)?;
//! assert_eq!(fade.period(), 4000);
//!
//! fade.restart(&clock);
//! clock.advance(250);
//! assert_eq!(fade.value_now(&clock), 0.5);
//! # Ok::<(), syncwave::SyncError>(())
//! ```
//!
//! Evaluation never fails. Every node has a period of at least 1 ms: a
//! constructor whose result would have a zero-length period returns a
//! [`SyncError`] instead.

pub mod combinators;
pub mod core;
pub mod ext;
pub mod presets;
pub mod transforms;
pub mod waveforms;

// Re-export commonly used types at the crate root
pub use crate::core::{
    Clock, ManualClock, Millis, Operation, Result, SyncError, SyncFunction, SystemClock, Tick,
    Timing, Transformation, elapsed_between,
};
pub use combinators::{Add, And, Concat, Max, Min, Or, Subtract};
pub use ext::{Samples, SyncExt};
pub use transforms::{
    Delay, Inverse, Mirror, OffsetY, RepeatForever, RepeatN, Reverse, ScaleY, SliceX, Speed,
};
pub use waveforms::{
    Constant, Cosine, Impulse, InverseRamp, Ramp, Sine, Step, Trapezoidal, Triangular, Zero,
};

#[cfg(feature = "macros")]
pub use syncwave_macros::millis;
