//! Validated parameter values carried by commands
//!
//! Every numeric parameter on the wire has a documented range. Parsing goes
//! through these constructors, so a value that exists is always in range.

/// Number of tube positions on the display
pub const TUBE_COUNT: usize = 8;

/// A decimal digit, 0 to 9
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Digit(u8);

impl Digit {
    /// Digit zero
    pub const ZERO: Self = Self(0);
    /// Highest digit value
    pub const MAX: u8 = 9;

    /// Create a digit, `None` above 9
    pub const fn new(value: u8) -> Option<Self> {
        if value <= Self::MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Numeric value (0-9)
    pub const fn value(self) -> u8 {
        self.0
    }
}

/// Index of one tube position, 0 to 7
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TubeIndex(u8);

impl TubeIndex {
    /// First position
    pub const FIRST: Self = Self(0);

    /// Create an index, `None` for 8 and above
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < TUBE_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Raw index (0-7)
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Index usable for array access
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// The following position, wrapping from 7 back to 0
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % TUBE_COUNT as u8)
    }

    /// All positions in ascending order
    pub fn all() -> impl Iterator<Item = TubeIndex> {
        (0..TUBE_COUNT as u8).map(TubeIndex)
    }
}

/// Crossfade length in stepper steps, 1 to 10
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CrossfadeSteps(u8);

impl CrossfadeSteps {
    /// Shortest crossfade
    pub const MIN: u8 = 1;
    /// Longest crossfade
    pub const MAX: u8 = 10;
    /// Power-on crossfade length (about one second at the default rate)
    pub const DEFAULT: Self = Self(5);

    /// Create a step count, `None` outside 1..=10
    pub const fn new(steps: u8) -> Option<Self> {
        if steps >= Self::MIN && steps <= Self::MAX {
            Some(Self(steps))
        } else {
            None
        }
    }

    /// Number of steps
    pub const fn get(self) -> u8 {
        self.0
    }
}

/// Index into the crossfade rate table, 0 (fastest) to 6 (slowest)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CrossfadeRate(u8);

impl CrossfadeRate {
    /// Slowest rate index
    pub const MAX: u8 = 6;
    /// Power-on rate ("standard")
    pub const DEFAULT: Self = Self(3);

    /// Create a rate index, `None` above 6
    pub const fn new(index: u8) -> Option<Self> {
        if index <= Self::MAX {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Table index
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Ticks between shuffle draws, 10 to 200
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ShuffleRate(u8);

impl ShuffleRate {
    /// Fastest shuffle
    pub const MIN: u8 = 10;
    /// Slowest shuffle
    pub const MAX: u8 = 200;
    /// Power-on shuffle rate (about 18 ms at 1440 Hz)
    pub const DEFAULT: Self = Self(26);

    /// Create a rate, `None` outside 10..=200
    pub const fn new(ticks: u8) -> Option<Self> {
        if ticks >= Self::MIN && ticks <= Self::MAX {
            Some(Self(ticks))
        } else {
            None
        }
    }

    /// Interval in refresh ticks
    pub const fn ticks(self) -> u32 {
        self.0 as u32
    }
}

/// Which of the two dot indicators a command addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DotSide {
    Left,
    Right,
}

/// Whether a command addresses every tube or a single one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Scope {
    /// All eight positions
    All,
    /// One position
    Tube(TubeIndex),
}

impl Scope {
    /// Returns true if `index` is addressed by this scope
    pub fn contains(&self, index: TubeIndex) -> bool {
        match self {
            Scope::All => true,
            Scope::Tube(tube) => *tube == index,
        }
    }
}
