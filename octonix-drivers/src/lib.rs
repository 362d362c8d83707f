//! Hardware driver implementations
//!
//! Concrete implementations of the `octonix-hal` traits built from plain
//! GPIO pins:
//!
//! - 74HC595 shift register chain (cathode, dot and anode lines)

#![no_std]
#![deny(unsafe_code)]

pub mod shift_register;

pub use shift_register::{Hc595Chain, ShiftError};
