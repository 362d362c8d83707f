//! Refresh task
//!
//! Runs on the high-priority interrupt executor. Every tick drives one tube
//! position through the shift register chain.

use defmt::*;
use embassy_time::{Duration, Ticker};
use octonix_core::refresh::{RefreshScheduler, FRAME_LEN};
use octonix_drivers::Hc595Chain;
use octonix_hal::ShiftOutput;
use octonix_hal_stm32f0::PinOutput;

use crate::channels::{TICKS, TUBES};
use crate::config::TICK_HZ;

/// The five-register output chain
pub type ShiftChain =
    Hc595Chain<PinOutput<'static>, PinOutput<'static>, PinOutput<'static>, FRAME_LEN>;

#[embassy_executor::task]
pub async fn refresh_task(mut chain: ShiftChain) {
    info!("Refresh task started at {} Hz", TICK_HZ);

    let mut scheduler = RefreshScheduler::new();
    let mut ticker = Ticker::every(Duration::from_hz(TICK_HZ));

    loop {
        ticker.next().await;

        let frame = scheduler.tick(&TUBES, &TICKS);
        if let Err(e) = chain.write_all(frame.as_bytes()) {
            error!("Shift chain write failed: {:?}", e);
        }
    }
}
