//! Primitive waveforms.
//!
//! Each primitive is a closed-form function of elapsed time within one
//! period, producing values in `[0, 1]`. Beyond the period every shape
//! returns 0.0 except [`Constant`], whose support is unbounded.

mod constant;
mod impulse;
mod ramp;
mod sine;
mod step;
mod triangular;

pub use constant::{Constant, Zero};
pub use impulse::Impulse;
pub use ramp::{InverseRamp, Ramp};
pub use sine::{Cosine, Sine};
pub use step::Step;
pub use triangular::{Trapezoidal, Triangular};
