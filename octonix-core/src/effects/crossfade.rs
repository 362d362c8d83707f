//! Crossfade stepper

use octonix_protocol::CrossfadeRate;

use super::gate::RateGate;
use crate::tube::SharedTubes;

/// Ticks per crossfade step for each rate index
///
/// At 1440 Hz these are roughly 9, 18, 23, 46, 92, 138 and 183 ms.
pub const CROSSFADE_RATE_TICKS: [u32; 7] = [13, 26, 33, 66, 132, 198, 264];

/// Advances every crossfading tube once per rate interval
#[derive(Debug, Clone)]
pub struct CrossfadeStepper {
    rate: CrossfadeRate,
    gate: RateGate,
}

impl CrossfadeStepper {
    pub const fn new(rate: CrossfadeRate) -> Self {
        Self {
            rate,
            gate: RateGate::new(),
        }
    }

    pub fn rate(&self) -> CrossfadeRate {
        self.rate
    }

    pub fn set_rate(&mut self, rate: CrossfadeRate) {
        self.rate = rate;
    }

    /// Ticks between steps at the current rate
    pub fn interval(&self) -> u32 {
        CROSSFADE_RATE_TICKS[self.rate.index()]
    }

    /// Step all crossfades if an interval elapsed
    ///
    /// Returns the number of crossfades that completed, or `None` if the
    /// interval has not elapsed yet.
    pub fn poll(&mut self, tubes: &SharedTubes, now: u32) -> Option<usize> {
        if !self.gate.elapsed(now, self.interval()) {
            return None;
        }
        Some(tubes.count_updates(|tube| tube.advance_crossfade()))
    }
}

impl Default for CrossfadeStepper {
    fn default() -> Self {
        Self::new(CrossfadeRate::DEFAULT)
    }
}
