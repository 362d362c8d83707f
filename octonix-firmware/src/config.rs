//! Board configuration
//!
//! Generated by build.rs from display.toml, which it has already validated.
//! The generated file defines `BUS`, `TICK_HZ` and `ENGINE`.

include!(concat!(env!("OUT_DIR"), "/board_config.rs"));
