//! STM32F0-specific HAL for the Octonix firmware
//!
//! Adapters from embassy-stm32 peripherals to the `octonix-hal` traits.
//! Supported chips:
//!
//! - STM32F042K6 (reference board)
//! - STM32F042F6
//!
//! # Features
//!
//! - `stm32f042k6`, `stm32f042f6` - Chip selection
//! - `defmt` - Enable debug formatting support

#![no_std]

pub mod gpio;
pub mod i2c;

pub use gpio::PinOutput;
pub use i2c::{slave_addr_config, I2cTargetError};
