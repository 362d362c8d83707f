//! Output frame for the five-register shift chain
//!
//! | byte | bits |
//! |------|------|
//! | 0    | cathodes for digits 0-7 (bit n = digit n) |
//! | 1    | bit 0 digit 8, bit 1 digit 9, bit 2 left dot, bit 3 right dot |
//! | 2, 3 | unused, always zero |
//! | 4    | anode of the driven position (bit p = position p) |

use octonix_protocol::{Digit, TubeIndex};

/// Number of bytes in one frame
pub const FRAME_LEN: usize = 5;

const CATHODE_LOW: usize = 0;
const CATHODE_HIGH: usize = 1;
const ANODES: usize = 4;

const LEFT_DOT_BIT: u8 = 1 << 2;
const RIGHT_DOT_BIT: u8 = 1 << 3;

/// One tick's worth of output lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutputFrame([u8; FRAME_LEN]);

impl OutputFrame {
    /// All lines off
    pub const EMPTY: Self = Self([0; FRAME_LEN]);

    /// Light the cathode for `digit`
    pub fn light_digit(&mut self, digit: Digit) {
        let value = digit.value();
        if value < 8 {
            self.0[CATHODE_LOW] |= 1 << value;
        } else {
            self.0[CATHODE_HIGH] |= 1 << (value - 8);
        }
    }

    /// Light the left dot
    pub fn light_left_dot(&mut self) {
        self.0[CATHODE_HIGH] |= LEFT_DOT_BIT;
    }

    /// Light the right dot
    pub fn light_right_dot(&mut self) {
        self.0[CATHODE_HIGH] |= RIGHT_DOT_BIT;
    }

    /// Drive the anode of `index`
    pub fn select(&mut self, index: TubeIndex) {
        self.0[ANODES] |= 1 << index.get();
    }

    /// True if no line is driven
    pub fn is_dark(&self) -> bool {
        self.0 == [0; FRAME_LEN]
    }

    /// Raw bytes in register order
    pub fn as_bytes(&self) -> &[u8; FRAME_LEN] {
        &self.0
    }
}
