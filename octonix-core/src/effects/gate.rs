//! Sub-rate gating against the tick counter

/// Lets an action through at most once per interval
#[derive(Debug, Clone, Default)]
pub struct RateGate {
    last: u32,
}

impl RateGate {
    pub const fn new() -> Self {
        Self { last: 0 }
    }

    /// Returns true and rearms if `interval` ticks passed since the last run
    pub fn elapsed(&mut self, now: u32, interval: u32) -> bool {
        if now.wrapping_sub(self.last) < interval {
            return false;
        }
        self.last = now;
        true
    }
}
