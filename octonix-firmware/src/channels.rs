//! State shared between the refresh context and the main loop
//!
//! The refresh task runs on the interrupt executor and preempts everything
//! on the thread executor, so these statics only use primitives that are
//! safe across priority levels.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use octonix_core::{SharedTubes, TickCounter};
use octonix_protocol::CommandBuffer;

/// Tube records, read per tick by the refresh task
pub static TUBES: SharedTubes = SharedTubes::new();

/// Refresh tick counter (incremented only by the refresh task)
pub static TICKS: TickCounter = TickCounter::new();

/// Latest command received on the bus (a newer write replaces an unread one)
pub static PENDING_COMMAND: Signal<CriticalSectionRawMutex, CommandBuffer> = Signal::new();
