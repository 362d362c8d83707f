//! Duty-cycle brightness math
//!
//! Brightness is an abstract duty ratio out of [`PWM_RESOLUTION`] refresh
//! visits, not a photometric value. A tube is lit on a visit when the shared
//! PWM phase is below its brightness.

/// Number of PWM levels; also the PWM phase period in ticks
pub const PWM_RESOLUTION: u8 = 20;

/// Duty-cycle level, 0 (dark) to [`PWM_RESOLUTION`] (always lit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Brightness(u8);

impl Brightness {
    /// Never lit
    pub const OFF: Self = Self(0);
    /// Lit on every visit
    pub const FULL: Self = Self::from_percent(100);

    /// Create a level, clamped to [`PWM_RESOLUTION`]
    pub const fn new(level: u8) -> Self {
        if level > PWM_RESOLUTION {
            Self(PWM_RESOLUTION)
        } else {
            Self(level)
        }
    }

    /// Level for a percentage of full scale, clamped to 100%
    pub const fn from_percent(percent: u8) -> Self {
        Self::new(((PWM_RESOLUTION as u16 * percent as u16) / 100) as u8)
    }

    /// Raw level
    pub const fn level(self) -> u8 {
        self.0
    }

    /// True if the tube is lit at this phase of the PWM cycle
    pub const fn is_lit_at(self, phase: PwmPhase) -> bool {
        phase.0 < self.0
    }
}

/// Position within the PWM cycle, advanced once per refresh tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PwmPhase(u8);

impl PwmPhase {
    /// Start of the cycle
    pub const ZERO: Self = Self(0);

    /// The next phase, wrapping at [`PWM_RESOLUTION`]
    pub const fn next(self) -> Self {
        if self.0 + 1 >= PWM_RESOLUTION {
            Self(0)
        } else {
            Self(self.0 + 1)
        }
    }

    /// Raw phase value
    pub const fn get(self) -> u8 {
        self.0
    }
}
