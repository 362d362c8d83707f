//! Octonix - Eight Tube Display Firmware
//!
//! Firmware for the STM32F042K6 display controller. Multiplexes eight tube
//! positions through a 74HC595 chain and takes commands as a passive I2C
//! target.
//!
//! Two priority levels:
//!
//! - Interrupt executor (USART1 vector, unused as a UART): the refresh task,
//!   one tube per tick
//! - Thread executor: the I2C target task and the control loop

#![no_std]
#![no_main]

mod channels;
mod config;
mod tasks;

use cortex_m_rt::entry;
use defmt::*;
use embassy_executor::{Executor, InterruptExecutor};
use embassy_stm32::gpio::{Level, Output, Speed};
use embassy_stm32::i2c::{self, I2c};
use embassy_stm32::interrupt;
use embassy_stm32::interrupt::{InterruptExt, Priority};
use embassy_stm32::peripherals::I2C1;
use embassy_stm32::{bind_interrupts, Config};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use octonix_core::ControlLoop;
use octonix_drivers::Hc595Chain;
use octonix_hal_stm32f0::{slave_addr_config, PinOutput};

use crate::channels::TUBES;
use crate::tasks::ShiftChain;

bind_interrupts!(struct Irqs {
    I2C1 => i2c::EventInterruptHandler<I2C1>, i2c::ErrorInterruptHandler<I2C1>;
});

static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();
static EXECUTOR_LOW: StaticCell<Executor> = StaticCell::new();

#[interrupt]
unsafe fn USART1() {
    EXECUTOR_HIGH.on_interrupt()
}

#[entry]
fn main() -> ! {
    info!("Octonix firmware starting...");

    let p = embassy_stm32::init(Config::default());
    info!("Peripherals initialized");

    // Engine state is set up before refresh starts so the first sweep
    // already uses the configured crossfade length
    let control = unwrap!(ControlLoop::new(&config::ENGINE));
    unwrap!(control.boot(&TUBES));
    info!(
        "Engine configured: crossfade {} steps, rate index {}, shuffle every {} ticks",
        config::ENGINE.crossfade_steps,
        config::ENGINE.crossfade_rate_index,
        config::ENGINE.shuffle_rate
    );

    // Shift register chain (PA7=DATA, PA5=CLOCK, PA4=LATCH)
    let chain: ShiftChain = Hc595Chain::new(
        PinOutput::new(Output::new(p.PA7, Level::Low, Speed::VeryHigh)),
        PinOutput::new(Output::new(p.PA5, Level::Low, Speed::VeryHigh)),
        PinOutput::new(Output::new(p.PA4, Level::Low, Speed::VeryHigh)),
    );

    // I2C target (PB6=SCL, PB7=SDA)
    let i2c = I2c::new(
        p.I2C1,
        p.PB6,
        p.PB7,
        Irqs,
        p.DMA1_CH2,
        p.DMA1_CH3,
        i2c::Config::default(),
    )
    .into_slave_multimaster(slave_addr_config(&config::BUS));
    info!("I2C target at address {=u8:#x}", config::BUS.address.get());

    // Refresh preempts the thread executor
    interrupt::USART1.set_priority(Priority::P1);
    let spawner = EXECUTOR_HIGH.start(interrupt::USART1);
    spawner.spawn(tasks::refresh_task(chain)).unwrap();

    let executor = EXECUTOR_LOW.init(Executor::new());
    executor.run(|spawner| {
        spawner.spawn(tasks::bus_rx_task(i2c)).unwrap();
        spawner.spawn(tasks::control_task(control)).unwrap();
        info!("All tasks spawned");
    })
}
