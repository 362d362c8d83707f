//! Control task
//!
//! The cooperative main loop: one pass handles the latest bus command and
//! advances the effects, then yields so the bus task can run.

use defmt::*;
use embassy_futures::yield_now;
use octonix_core::{ControlLoop, Rejection};

use crate::channels::{PENDING_COMMAND, TICKS, TUBES};

#[embassy_executor::task]
pub async fn control_task(mut control: ControlLoop) {
    info!("Control task started (locked: {})", control.is_locked());

    loop {
        let pending = PENDING_COMMAND.try_take();
        let report = control.run_pass(&TUBES, TICKS.now(), pending);

        match report.command {
            Some(Ok(command)) => debug!("Applied {:?}", command),
            Some(Err(Rejection::Locked)) => trace!("Locked, command dropped"),
            Some(Err(Rejection::Invalid(e))) => debug!("Ignored command: {:?}", e),
            None => {}
        }
        if report.crossfades_completed > 0 {
            trace!("{} crossfades completed", report.crossfades_completed);
        }

        yield_now().await;
    }
}
