//! Core node types and traits.
//!
//! This module provides the abstractions every tree is built from:
//! - `SyncFunction` trait, the evaluate/period/reset/restart contract
//! - `Timing` anchor plus the `Transformation` and `Operation` helpers
//! - `Clock` trait with manual, system and closure clocks
//! - `SyncError` for rejected constructions

mod clock;
mod error;
mod function;
mod timing;

pub use clock::{Clock, ManualClock, SystemClock};
pub(crate) use error::{require_period, require_segment};
pub use error::{Result, SyncError};
pub use function::{Millis, SyncFunction, Tick, elapsed_between};
pub use timing::{Operation, Timing, Transformation};

#[cfg(test)]
pub(crate) mod testing;
