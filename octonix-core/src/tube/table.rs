//! The eight tube records and their shared store

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use octonix_protocol::{CrossfadeSteps, Digit, Scope, TubeIndex, TUBE_COUNT};

use super::state::Tube;

/// All tube records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TubeTable {
    tubes: [Tube; TUBE_COUNT],
}

impl TubeTable {
    /// Power-on table: tube `i` shows digit `i` at full brightness
    pub const fn new(crossfade_steps: CrossfadeSteps) -> Self {
        let mut tubes = [Tube::showing(Digit::ZERO, crossfade_steps); TUBE_COUNT];
        let mut i = 0;
        while i < TUBE_COUNT {
            let digit = match Digit::new(i as u8) {
                Some(digit) => digit,
                None => Digit::ZERO,
            };
            tubes[i] = Tube::showing(digit, crossfade_steps);
            i += 1;
        }
        Self { tubes }
    }

    /// One record
    pub fn get(&self, index: TubeIndex) -> &Tube {
        &self.tubes[index.as_usize()]
    }

    /// One record, mutably
    pub fn get_mut(&mut self, index: TubeIndex) -> &mut Tube {
        &mut self.tubes[index.as_usize()]
    }

    /// All records in position order
    pub fn iter(&self) -> impl Iterator<Item = &Tube> {
        self.tubes.iter()
    }
}

impl Default for TubeTable {
    fn default() -> Self {
        Self::new(CrossfadeSteps::DEFAULT)
    }
}

/// Tube table shared between the refresh context and the control loop
///
/// Every access runs inside one critical section, so a reader never sees a
/// half-applied update of a record. Updates are applied per tube: a command
/// addressing all tubes takes the lock once per tube and never holds it
/// across the whole table.
pub struct SharedTubes {
    inner: Mutex<CriticalSectionRawMutex, RefCell<TubeTable>>,
}

impl SharedTubes {
    /// Store initialized to the power-on table
    pub const fn new() -> Self {
        Self::with_table(TubeTable::new(CrossfadeSteps::DEFAULT))
    }

    /// Store initialized to `table`
    pub const fn with_table(table: TubeTable) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(table)),
        }
    }

    /// Copy of one record
    pub fn snapshot(&self, index: TubeIndex) -> Tube {
        self.inner.lock(|table| *table.borrow().get(index))
    }

    /// Copy of the whole table
    pub fn snapshot_all(&self) -> TubeTable {
        self.inner.lock(|table| table.borrow().clone())
    }

    /// Apply `f` to one record as a single update
    pub fn update<R>(&self, index: TubeIndex, f: impl FnOnce(&mut Tube) -> R) -> R {
        self.inner.lock(|table| f(table.borrow_mut().get_mut(index)))
    }

    /// Apply `f` to every record in `scope`, one critical section per tube
    pub fn update_scope(&self, scope: Scope, mut f: impl FnMut(&mut Tube)) {
        for index in TubeIndex::all().filter(|index| scope.contains(*index)) {
            self.update(index, &mut f);
        }
    }

    /// Apply `f` to every record, one critical section per tube
    ///
    /// Returns how many calls returned true.
    pub fn count_updates(&self, mut f: impl FnMut(&mut Tube) -> bool) -> usize {
        TubeIndex::all()
            .filter(|index| self.update(*index, &mut f))
            .count()
    }
}

impl Default for SharedTubes {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brightness::Brightness;
    use crate::tube::{Effect, Glyph};

    fn index(i: u8) -> TubeIndex {
        TubeIndex::new(i).unwrap()
    }

    #[test]
    fn test_power_on_table() {
        let table = TubeTable::default();
        for (i, tube) in table.iter().enumerate() {
            let digit = Digit::new(i as u8).unwrap();
            assert_eq!(tube.displayed, Glyph::Digit(digit));
            assert_eq!(tube.target, digit);
            assert_eq!(tube.previous, Glyph::Digit(digit));
            assert_eq!(tube.shuffle_target, digit);
            assert_eq!(tube.brightness, Brightness::FULL);
            assert_eq!(tube.effect, Effect::None);
            assert!(!tube.dot_left && !tube.dot_right);
            assert_eq!(tube.crossfade_steps, CrossfadeSteps::DEFAULT);
        }
    }

    #[test]
    fn test_update_one_tube() {
        let tubes = SharedTubes::new();
        tubes.update(index(2), |tube| tube.blank(false));

        assert_eq!(tubes.snapshot(index(2)).displayed, Glyph::Blank);
        assert_eq!(
            tubes.snapshot(index(3)).displayed,
            Glyph::Digit(Digit::new(3).unwrap())
        );
    }

    #[test]
    fn test_update_scope() {
        let tubes = SharedTubes::new();
        tubes.update_scope(Scope::All, |tube| tube.start_shuffle());
        assert!(tubes.snapshot_all().iter().all(Tube::is_shuffling));

        let changed = tubes.count_updates(|tube| tube.freeze());
        assert_eq!(changed, TUBE_COUNT);
        assert_eq!(tubes.count_updates(|tube| tube.freeze()), 0);
    }

    #[test]
    fn test_static_store() {
        static TUBES: SharedTubes = SharedTubes::new();
        TUBES.update(index(7), |tube| tube.start_shuffle());
        assert!(TUBES.snapshot(index(7)).is_shuffling());
    }
}
