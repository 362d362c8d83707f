//! Per-tube record

use octonix_protocol::{CrossfadeSteps, Digit};

use crate::brightness::Brightness;

/// What a tube shows when its digit is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Glyph {
    /// No cathode lit
    Blank,
    /// One numeral cathode lit
    Digit(Digit),
}

impl Glyph {
    /// The digit, if not blank
    pub fn digit(self) -> Option<Digit> {
        match self {
            Glyph::Blank => None,
            Glyph::Digit(digit) => Some(digit),
        }
    }
}

impl From<Digit> for Glyph {
    fn from(digit: Digit) -> Self {
        Glyph::Digit(digit)
    }
}

/// Effect currently running on a tube
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Effect {
    /// Static display
    None,
    /// Dithered blend from `previous` to `target`; `step` counts completed
    /// stepper intervals and always stays below the tube's crossfade length
    Crossfade { step: u8 },
    /// Random cycling until stopped
    Shuffle,
}

/// One display position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tube {
    /// Glyph rendered when no crossfade is running
    pub displayed: Glyph,
    /// Duty-cycle level for `displayed`
    pub brightness: Brightness,
    /// Left dot indicator
    pub dot_left: bool,
    /// Right dot indicator
    pub dot_right: bool,
    /// Digit the current or last transition moves toward
    pub target: Digit,
    /// Glyph the current or last transition moves away from
    pub previous: Glyph,
    /// Running effect
    pub effect: Effect,
    /// Crossfade length for this tube
    pub crossfade_steps: CrossfadeSteps,
    /// Digit a stopped shuffle settles on
    pub shuffle_target: Digit,
}

impl Tube {
    /// Power-on record showing `digit` at full brightness
    pub const fn showing(digit: Digit, crossfade_steps: CrossfadeSteps) -> Self {
        Self {
            displayed: Glyph::Digit(digit),
            brightness: Brightness::FULL,
            dot_left: false,
            dot_right: false,
            target: digit,
            previous: Glyph::Digit(digit),
            effect: Effect::None,
            crossfade_steps,
            shuffle_target: digit,
        }
    }

    /// True while shuffling
    pub fn is_shuffling(&self) -> bool {
        matches!(self.effect, Effect::Shuffle)
    }

    /// True while crossfading
    pub fn is_crossfading(&self) -> bool {
        matches!(self.effect, Effect::Crossfade { .. })
    }
}
