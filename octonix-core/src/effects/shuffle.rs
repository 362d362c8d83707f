//! Shuffle stepper

use octonix_protocol::ShuffleRate;

use super::gate::RateGate;
use crate::random::DigitSource;
use crate::tube::SharedTubes;

/// Draws a new digit for every shuffling tube once per rate interval
#[derive(Debug, Clone)]
pub struct ShuffleStepper {
    rate: ShuffleRate,
    gate: RateGate,
    source: DigitSource,
}

impl ShuffleStepper {
    pub const fn new(rate: ShuffleRate, seed: u16) -> Self {
        Self {
            rate,
            gate: RateGate::new(),
            source: DigitSource::new(seed),
        }
    }

    pub fn rate(&self) -> ShuffleRate {
        self.rate
    }

    pub fn set_rate(&mut self, rate: ShuffleRate) {
        self.rate = rate;
    }

    /// Draw digits if an interval elapsed
    ///
    /// Returns the number of tubes that got a new digit, or `None` if the
    /// interval has not elapsed yet.
    pub fn poll(&mut self, tubes: &SharedTubes, now: u32) -> Option<usize> {
        if !self.gate.elapsed(now, self.rate.ticks()) {
            return None;
        }
        let source = &mut self.source;
        Some(tubes.count_updates(|tube| {
            if !tube.is_shuffling() {
                return false;
            }
            tube.show_shuffled(source.next_digit());
            true
        }))
    }
}

impl Default for ShuffleStepper {
    fn default() -> Self {
        Self::new(ShuffleRate::DEFAULT, crate::random::DEFAULT_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brightness::Brightness;
    use crate::random::DEFAULT_SEED;
    use crate::tube::Glyph;
    use octonix_protocol::{Scope, TubeIndex};

    #[test]
    fn test_poll_draws_for_shuffling_tubes_only() {
        let tubes = SharedTubes::new();
        let two = TubeIndex::new(2).unwrap();
        let five = TubeIndex::new(5).unwrap();
        tubes.update_scope(Scope::Tube(two), |tube| tube.start_shuffle());
        tubes.update_scope(Scope::Tube(five), |tube| tube.start_shuffle());

        let mut stepper = ShuffleStepper::default();
        assert_eq!(stepper.poll(&tubes, 25), None);
        assert_eq!(stepper.poll(&tubes, 26), Some(2));

        // Draws follow the generator in position order
        let mut expected = DigitSource::new(DEFAULT_SEED);
        assert_eq!(tubes.snapshot(two).displayed, Glyph::Digit(expected.next_digit()));
        assert_eq!(tubes.snapshot(five).displayed, Glyph::Digit(expected.next_digit()));
        assert_eq!(tubes.snapshot(five).brightness, Brightness::FULL);

        let untouched = tubes.snapshot(TubeIndex::new(3).unwrap());
        assert_eq!(untouched.displayed.digit().map(|d| d.value()), Some(3));
    }

    #[test]
    fn test_rate_change_applies_to_next_poll() {
        let tubes = SharedTubes::new();
        let mut stepper = ShuffleStepper::default();
        stepper.set_rate(ShuffleRate::new(200).unwrap());
        assert_eq!(stepper.poll(&tubes, 199), None);
        assert_eq!(stepper.poll(&tubes, 200), Some(0));
    }
}
