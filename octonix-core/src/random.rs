//! Pseudo-random digits for the shuffle effect
//!
//! A 16-bit linear congruential generator. The state keeps only the low
//! 16 bits of each step, so the sequence is short but more than random
//! enough for flickering digits.

use octonix_protocol::Digit;

const LCG_MULTIPLIER: u32 = 1_103_515_245;
const LCG_INCREMENT: u32 = 12_345;

/// Power-on seed
pub const DEFAULT_SEED: u16 = 12_345;

/// Stateful source of shuffle digits
#[derive(Debug, Clone)]
pub struct DigitSource {
    state: u16,
}

impl Default for DigitSource {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl DigitSource {
    /// Create a generator from a seed
    pub const fn new(seed: u16) -> Self {
        Self { state: seed }
    }

    /// Advance the generator and return the new state
    pub fn next_raw(&mut self) -> u16 {
        let next = (self.state as u32)
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT)
            & 0x7FFF_FFFF;
        self.state = next as u16;
        self.state
    }

    /// Draw a digit 0-9
    pub fn next_digit(&mut self) -> Digit {
        let value = (self.next_raw() % 10) as u8;
        // Always in range after the modulo
        Digit::new(value).unwrap_or(Digit::ZERO)
    }
}
