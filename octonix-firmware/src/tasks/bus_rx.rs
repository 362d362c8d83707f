//! I2C target receive task
//!
//! Answers the bus master. A write becomes the pending command; a read gets
//! a single filler byte, since the display has no status to report.

use defmt::*;
use embassy_stm32::i2c::{I2c, MultiMaster, SlaveCommandKind};
use embassy_stm32::mode::Async;
use embassy_time::{Duration, Timer};
use octonix_hal::i2c::READ_FILLER;
use octonix_hal_stm32f0::I2cTargetError;
use octonix_protocol::CommandBuffer;

use crate::channels::PENDING_COMMAND;

/// Receive buffer; anything past the command length is dropped when the
/// buffer is converted
const RX_BUF_LEN: usize = 32;

#[embassy_executor::task]
pub async fn bus_rx_task(mut i2c: I2c<'static, Async, MultiMaster>) {
    info!("Bus RX task started");

    let mut buf = [0u8; RX_BUF_LEN];

    loop {
        let command = match i2c.listen().await {
            Ok(command) => command,
            Err(e) => {
                warn!("I2C listen error: {:?}", I2cTargetError::from(e));
                Timer::after(Duration::from_millis(1)).await;
                continue;
            }
        };

        match command.kind {
            SlaveCommandKind::Write => match i2c.respond_to_write(&mut buf).await {
                Ok(len) => {
                    let received = CommandBuffer::from_slice(&buf[..len.min(RX_BUF_LEN)]);
                    trace!("Received {:?}", received);
                    PENDING_COMMAND.signal(received);
                }
                Err(e) => warn!("I2C write error: {:?}", I2cTargetError::from(e)),
            },
            SlaveCommandKind::Read => {
                if let Err(e) = i2c.respond_to_read(&[READ_FILLER]).await {
                    warn!("I2C read error: {:?}", I2cTargetError::from(e));
                }
            }
        }
    }
}
