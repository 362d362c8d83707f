//! Per-tick refresh scheduler

use octonix_protocol::TubeIndex;
use portable_atomic::{AtomicU32, Ordering};

use super::frame::OutputFrame;
use crate::brightness::{PwmPhase, PWM_RESOLUTION};
use crate::tube::{Effect, Glyph, SharedTubes, Tube};

/// Offset added per position to the crossfade dither cycle, so neighboring
/// tubes do not switch glyphs on the same tick
const DITHER_SPREAD: u32 = 3;

/// Refresh tick counter, the only time base of the engine
///
/// Written by the refresh context, read by the control loop. Wraps after
/// about a month at 1440 Hz; every consumer compares with wrapping
/// arithmetic.
pub struct TickCounter(AtomicU32);

impl TickCounter {
    pub const fn new() -> Self {
        Self(AtomicU32::new(0))
    }

    /// Count one tick and return the new value
    pub fn advance(&self) -> u32 {
        self.0.fetch_add(1, Ordering::Relaxed).wrapping_add(1)
    }

    /// Current tick
    pub fn now(&self) -> u32 {
        self.0.load(Ordering::Relaxed)
    }
}

impl Default for TickCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Refresh state private to the periodic context
#[derive(Debug, Clone)]
pub struct RefreshScheduler {
    phase: PwmPhase,
    current: TubeIndex,
}

impl Default for RefreshScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl RefreshScheduler {
    pub const fn new() -> Self {
        Self {
            phase: PwmPhase::ZERO,
            current: TubeIndex::FIRST,
        }
    }

    /// Position the next call will drive
    pub fn current(&self) -> TubeIndex {
        self.current
    }

    /// Run one refresh tick and return the frame to shift out
    pub fn tick(&mut self, tubes: &SharedTubes, ticks: &TickCounter) -> OutputFrame {
        let tick = ticks.advance();
        self.phase = self.phase.next();

        let index = self.current;
        let tube = tubes.snapshot(index);
        self.current = index.next();

        render(&tube, index, tick, self.phase)
    }
}

/// Frame for `tube` at position `index` on refresh tick `tick`
pub fn render(tube: &Tube, index: TubeIndex, tick: u32, phase: PwmPhase) -> OutputFrame {
    let glyph = match tube.effect {
        Effect::Crossfade { step } => Some(crossfade_glyph(tube, step, index, tick)),
        _ if tube.brightness.is_lit_at(phase) => Some(tube.displayed),
        _ => None,
    };

    let mut frame = OutputFrame::EMPTY;
    if let Some(Glyph::Digit(digit)) = glyph {
        frame.light_digit(digit);
        frame.select(index);
    }
    if tube.dot_left {
        frame.light_left_dot();
        frame.select(index);
    }
    if tube.dot_right {
        frame.light_right_dot();
        frame.select(index);
    }
    frame
}

/// Glyph shown on this tick of a crossfade
///
/// The old glyph gets `(duration - step) / duration` of a fast cycle, the
/// target the rest. Crossfades always run at full brightness.
fn crossfade_glyph(tube: &Tube, step: u8, index: TubeIndex, tick: u32) -> Glyph {
    let resolution = PWM_RESOLUTION as u32;
    let duration = tube.crossfade_steps.get() as u32;
    let remaining = duration.saturating_sub(step as u32);

    let fast_cycle = tick.wrapping_add(index.get() as u32 * DITHER_SPREAD) % resolution;
    let old_threshold = remaining * resolution / duration;

    if fast_cycle < old_threshold {
        tube.previous
    } else {
        Glyph::Digit(tube.target)
    }
}
