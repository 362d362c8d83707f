//! Effect state machine
//!
//! Every transition is a method on [`Tube`] taking `&mut self`, so a caller
//! holding the table lock applies one transition as a single update.

use octonix_protocol::{CrossfadeSteps, Digit, DotSide};

use super::state::{Effect, Glyph, Tube};
use crate::brightness::Brightness;

impl Tube {
    /// Show `digit`, blending from the current glyph when it differs
    ///
    /// A shuffling tube is stopped and settles on `digit` instead.
    pub fn set_digit(&mut self, digit: Digit) {
        if self.is_shuffling() {
            self.stop_shuffle(digit);
            return;
        }

        let from = self.displayed;
        self.displayed = Glyph::Digit(digit);
        self.target = digit;
        self.brightness = Brightness::FULL;

        if from != Glyph::Digit(digit) {
            self.begin_crossfade(from, digit);
        }
    }

    fn begin_crossfade(&mut self, from: Glyph, to: Digit) {
        self.previous = from;
        self.target = to;
        self.effect = Effect::Crossfade { step: 0 };
    }

    /// Begin random cycling, replacing any running crossfade
    pub fn start_shuffle(&mut self) {
        self.effect = Effect::Shuffle;
    }

    /// Settle a shuffling tube on `digit`
    ///
    /// The settle digit is recorded on every addressed tube. Returns false
    /// and changes nothing else if the tube was not shuffling.
    pub fn stop_shuffle(&mut self, digit: Digit) -> bool {
        self.shuffle_target = digit;
        if !self.is_shuffling() {
            return false;
        }

        self.effect = Effect::None;
        self.previous = self.displayed;

        if self.displayed != Glyph::Digit(digit) {
            self.begin_crossfade(self.displayed, digit);
        } else {
            self.target = digit;
            self.brightness = Brightness::FULL;
        }
        true
    }

    /// Stop shuffling on whatever digit is showing
    pub fn freeze(&mut self) -> bool {
        if !self.is_shuffling() {
            return false;
        }
        self.effect = Effect::None;
        self.brightness = Brightness::FULL;
        true
    }

    /// Blank the digit, optionally switching both dots off
    ///
    /// A running crossfade is left alone and still lands on its target.
    pub fn blank(&mut self, clear_dots: bool) {
        self.displayed = Glyph::Blank;
        self.brightness = Brightness::OFF;
        if clear_dots {
            self.clear_dots();
        }
    }

    /// Switch one dot
    pub fn set_dot(&mut self, side: DotSide, on: bool) {
        match side {
            DotSide::Left => self.dot_left = on,
            DotSide::Right => self.dot_right = on,
        }
    }

    /// Switch both dots off
    pub fn clear_dots(&mut self) {
        self.dot_left = false;
        self.dot_right = false;
    }

    /// Change the crossfade length
    ///
    /// A crossfade in flight keeps running; its step is pulled back so it
    /// stays below the new length.
    pub fn set_crossfade_steps(&mut self, steps: CrossfadeSteps) {
        self.crossfade_steps = steps;
        if let Effect::Crossfade { step } = &mut self.effect {
            let last = steps.get() - 1;
            if *step > last {
                *step = last;
            }
        }
    }

    /// One crossfade stepper interval
    ///
    /// Returns true when the crossfade completed on this step.
    pub fn advance_crossfade(&mut self) -> bool {
        let Effect::Crossfade { step } = self.effect else {
            return false;
        };

        let next = step + 1;
        if next >= self.crossfade_steps.get() {
            self.effect = Effect::None;
            self.displayed = Glyph::Digit(self.target);
            self.brightness = Brightness::FULL;
            true
        } else {
            self.effect = Effect::Crossfade { step: next };
            false
        }
    }

    /// Show a freshly drawn shuffle digit
    pub fn show_shuffled(&mut self, digit: Digit) {
        if self.is_shuffling() {
            self.displayed = Glyph::Digit(digit);
            self.brightness = Brightness::FULL;
        }
    }
}
