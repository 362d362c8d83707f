//! Effect processors
//!
//! Both steppers run from the control loop. Each is gated by elapsed refresh
//! ticks, so their speed does not depend on how often the loop runs.

pub mod crossfade;
pub mod gate;
pub mod shuffle;

pub use crossfade::{CrossfadeStepper, CROSSFADE_RATE_TICKS};
pub use gate::RateGate;
pub use shuffle::ShuffleStepper;
