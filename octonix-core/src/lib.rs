//! Board-agnostic core logic for the eight tube display
//!
//! This crate contains everything that does not depend on a specific chip:
//!
//! - Tube state table and the per-tube effect state machine
//! - Refresh scheduler (multiplexing, duty-cycle dimming, crossfade dithering)
//! - Effect processors (crossfade and shuffle steppers)
//! - Command dispatcher with the lock gate
//! - Engine configuration
//!
//! Two execution contexts share the tube table: the refresh scheduler runs
//! from a periodic high-priority context, the control loop (dispatcher and
//! effect processors) from the cooperative main loop. [`tube::SharedTubes`]
//! is the only state they share besides the [`refresh::TickCounter`].

#![no_std]
#![deny(unsafe_code)]

pub mod brightness;
pub mod config;
pub mod control;
pub mod effects;
pub mod engine;
pub mod random;
pub mod refresh;
pub mod tube;

pub use config::{ConfigError, EngineConfig};
pub use control::{ControlLoop, PassReport, Rejection};
pub use engine::DisplayEngine;
pub use refresh::{OutputFrame, RefreshScheduler, TickCounter};
pub use tube::{Effect, Glyph, SharedTubes, Tube, TubeTable};

pub use octonix_protocol as protocol;
