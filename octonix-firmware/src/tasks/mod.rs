//! Embassy async tasks
//!
//! Each task runs independently and communicates via the statics in
//! `channels`.

pub mod bus_rx;
pub mod control;
pub mod refresh;

pub use bus_rx::bus_rx_task;
pub use control::control_task;
pub use refresh::{refresh_task, ShiftChain};
