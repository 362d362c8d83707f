//! Multiplexed refresh
//!
//! One tube is driven per tick. The scheduler picks the next position,
//! decides which cathode (if any) is lit on this visit and packs the result
//! into an [`OutputFrame`] for the shift register chain.

pub mod frame;
pub mod scheduler;

pub use frame::{OutputFrame, FRAME_LEN};
pub use scheduler::{render, RefreshScheduler, TickCounter};
