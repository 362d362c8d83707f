//! Single-owner engine
//!
//! [`DisplayEngine`] owns every part of the display state and drives both
//! contexts from one caller. The firmware splits the same parts between its
//! refresh and control tasks; the engine is what tests and host simulations
//! use.

use octonix_protocol::{CommandBuffer, TubeIndex};

use crate::config::{ConfigError, EngineConfig};
use crate::control::{ControlLoop, PassReport};
use crate::refresh::{OutputFrame, RefreshScheduler, TickCounter};
use crate::tube::{SharedTubes, Tube, TubeTable};

pub struct DisplayEngine {
    tubes: SharedTubes,
    ticks: TickCounter,
    scheduler: RefreshScheduler,
    control: ControlLoop,
    pending: Option<CommandBuffer>,
}

impl DisplayEngine {
    pub fn new(config: &EngineConfig) -> Result<Self, ConfigError> {
        let control = ControlLoop::new(config)?;
        let tubes = SharedTubes::with_table(TubeTable::new(config.crossfade_steps()?));
        Ok(Self {
            tubes,
            ticks: TickCounter::new(),
            scheduler: RefreshScheduler::new(),
            control,
            pending: None,
        })
    }

    /// One refresh tick
    pub fn tick(&mut self) -> OutputFrame {
        self.scheduler.tick(&self.tubes, &self.ticks)
    }

    /// Hand over a received buffer; a buffer not yet consumed is replaced
    pub fn deliver(&mut self, buf: CommandBuffer) {
        self.pending = Some(buf);
    }

    /// One control loop pass at the current tick
    pub fn run_pass(&mut self) -> PassReport {
        let pending = self.pending.take();
        self.control.run_pass(&self.tubes, self.ticks.now(), pending)
    }

    /// Interleave `ticks` refresh ticks with one control pass after each
    pub fn run_for(&mut self, ticks: u32) {
        for _ in 0..ticks {
            self.tick();
            self.run_pass();
        }
    }

    /// Copy of one tube record
    pub fn tube(&self, index: TubeIndex) -> Tube {
        self.tubes.snapshot(index)
    }

    /// Copy of the whole table
    pub fn table(&self) -> TubeTable {
        self.tubes.snapshot_all()
    }

    pub fn is_locked(&self) -> bool {
        self.control.is_locked()
    }

    /// Current tick
    pub fn now(&self) -> u32 {
        self.ticks.now()
    }

    pub fn control(&self) -> &ControlLoop {
        &self.control
    }
}
