//! 74HC595 shift register chain
//!
//! Bit-banged over three GPIO lines: serial data, shift clock and storage
//! latch. The chain is shifted with the latch held low, so the parallel
//! outputs switch in one step when the latch rises.

use octonix_hal::{OutputPin, ShiftOutput};

/// Error from a chain write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ShiftError {
    /// Slice length differs from the number of registers
    LengthMismatch { expected: usize, got: usize },
}

/// Chain of `N` daisy-chained 74HC595 registers
///
/// `bytes[0]` of a write lands in the first register of the chain (the one
/// fed by the MCU), `bytes[N - 1]` in the last. Each byte is shifted most
/// significant bit first, so bit 7 ends up on output QH.
pub struct Hc595Chain<D, C, L, const N: usize> {
    data: D,
    clock: C,
    latch: L,
}

impl<D, C, L, const N: usize> Hc595Chain<D, C, L, N>
where
    D: OutputPin,
    C: OutputPin,
    L: OutputPin,
{
    /// Create a chain driver and park all lines low
    pub fn new(data: D, clock: C, latch: L) -> Self {
        let mut chain = Self { data, clock, latch };
        chain.data.set_low();
        chain.clock.set_low();
        chain.latch.set_low();
        chain
    }

    /// Number of registers in the chain
    pub const fn registers(&self) -> usize {
        N
    }

    fn shift_byte(&mut self, byte: u8) {
        for bit in (0..8).rev() {
            self.data.set_state(byte & (1 << bit) != 0);
            self.clock.set_high();
            self.clock.set_low();
        }
    }
}

impl<D, C, L, const N: usize> ShiftOutput for Hc595Chain<D, C, L, N>
where
    D: OutputPin,
    C: OutputPin,
    L: OutputPin,
{
    type Error = ShiftError;

    fn write_all(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        if bytes.len() != N {
            return Err(ShiftError::LengthMismatch {
                expected: N,
                got: bytes.len(),
            });
        }

        self.latch.set_low();
        // The first byte shifted travels furthest down the chain
        for &byte in bytes.iter().rev() {
            self.shift_byte(byte);
        }
        self.latch.set_high();
        Ok(())
    }
}
