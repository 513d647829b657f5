//! Single-child transformations.
//!
//! Each transformation owns its child and remaps either the time axis
//! ([`Speed`], [`SliceX`], [`Delay`], [`Reverse`], [`Mirror`], the
//! repeaters) or the value axis ([`ScaleY`], [`OffsetY`], [`Inverse`]).

mod mirror;
mod repeat;
mod time;
mod value;

pub use mirror::Mirror;
pub use repeat::{RepeatForever, RepeatN};
pub use time::{Delay, Reverse, SliceX, Speed};
pub use value::{Inverse, OffsetY, ScaleY};
