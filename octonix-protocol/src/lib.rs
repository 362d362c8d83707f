//! Octonix Command Protocol
//!
//! This crate defines the byte-level protocol a bus master uses to drive the
//! eight tube display. The display is a passive I2C target: every write
//! transaction carries one command, there are no replies.
//!
//! # Protocol Overview
//!
//! A command is a single write of up to eight bytes:
//! ```text
//! ┌────────┬──────────────────────────────┐
//! │ OPCODE │ PARAMETERS                   │
//! │ 1B     │ 0–7B (most opcodes use 0–2)  │
//! └────────┴──────────────────────────────┘
//! ```
//!
//! Opcodes are grouped in ranges; the low nibble of a ranged opcode usually
//! selects the tube. Anything malformed or out of range parses to a
//! [`CommandError`] and the display leaves its state untouched.

#![no_std]
#![deny(unsafe_code)]

pub mod buffer;
pub mod command;
pub mod values;

pub use buffer::{CommandBuffer, MAX_COMMAND_LEN};
pub use command::{is_unlock_opcode, Command, CommandError, UNLOCK_KEY};
pub use values::{CrossfadeRate, CrossfadeSteps, Digit, DotSide, Scope, ShuffleRate, TubeIndex, TUBE_COUNT};
