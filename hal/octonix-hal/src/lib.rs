//! Octonix Hardware Abstraction Layer
//!
//! Traits and configuration types that chip-specific HALs implement, so the
//! display drivers and the engine stay chip-agnostic.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  octonix-firmware                       │
//! └─────────────────────────────────────────┘
//!          │                     │
//!          ▼                     ▼
//! ┌─────────────────┐   ┌─────────────────┐
//! │ octonix-drivers │   │ octonix-hal-    │
//! │ (74HC595 chain) │   │    stm32f0      │
//! └─────────────────┘   └─────────────────┘
//!          │                     │
//!          └──────────┬──────────┘
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  octonix-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output
//! - [`shift::ShiftOutput`] - Serial-in parallel-out register chains
//! - [`i2c::TargetAddress`], [`i2c::I2cTargetConfig`] - Passive I2C target setup

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod i2c;
pub mod shift;

pub use gpio::OutputPin;
pub use i2c::{AddressError, I2cTargetConfig, TargetAddress};
pub use shift::ShiftOutput;
