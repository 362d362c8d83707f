//! Cooperative control loop
//!
//! One pass consumes the latest received command, then advances the shuffle
//! and crossfade steppers. Nothing in a pass waits; the refresh context keeps
//! running underneath and only ever contends for one tube record at a time.

mod dispatch;

use octonix_protocol::{is_unlock_opcode, Command, CommandBuffer, CommandError};

use crate::config::{ConfigError, EngineConfig};
use crate::effects::{CrossfadeStepper, ShuffleStepper};
use crate::tube::SharedTubes;

/// Why a received buffer changed nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rejection {
    /// The lock is engaged and the buffer is not an unlock command
    Locked,
    /// The buffer did not decode
    Invalid(CommandError),
}

impl From<CommandError> for Rejection {
    fn from(err: CommandError) -> Self {
        Rejection::Invalid(err)
    }
}

/// Outcome of one control loop pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PassReport {
    /// Result of the command handled this pass, if one was pending
    pub command: Option<Result<Command, Rejection>>,
    /// Tubes that received a new shuffle digit
    pub shuffled: usize,
    /// Crossfades that completed
    pub crossfades_completed: usize,
}

/// Dispatcher and effect processors
#[derive(Debug, Clone)]
pub struct ControlLoop {
    crossfade: CrossfadeStepper,
    shuffle: ShuffleStepper,
    config: EngineConfig,
    locked: bool,
}

impl ControlLoop {
    /// Build a control loop from a validated configuration
    pub fn new(config: &EngineConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            crossfade: CrossfadeStepper::new(config.crossfade_rate()?),
            shuffle: ShuffleStepper::new(config.shuffle_rate()?, config.shuffle_seed),
            config: *config,
            locked: config.start_locked,
        })
    }

    /// Apply the configured crossfade length to every tube
    pub fn boot(&self, tubes: &SharedTubes) -> Result<(), ConfigError> {
        let steps = self.config.crossfade_steps()?;
        tubes.update_scope(octonix_protocol::Scope::All, |tube| {
            tube.set_crossfade_steps(steps)
        });
        Ok(())
    }

    /// True while only the unlock command is accepted
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn crossfade(&self) -> &CrossfadeStepper {
        &self.crossfade
    }

    pub fn shuffle(&self) -> &ShuffleStepper {
        &self.shuffle
    }

    /// Decode and apply one received buffer
    ///
    /// While locked, the raw opcode is checked before decoding and anything
    /// other than the unlock opcode is dropped.
    pub fn dispatch(
        &mut self,
        tubes: &SharedTubes,
        buf: &CommandBuffer,
    ) -> Result<Command, Rejection> {
        let op = buf.opcode().ok_or(CommandError::Empty)?;
        if self.locked && !is_unlock_opcode(op) {
            return Err(Rejection::Locked);
        }

        let command = Command::parse(buf)?;
        self.apply(tubes, command);
        Ok(command)
    }

    /// Advance both steppers if their intervals elapsed
    ///
    /// Does nothing while locked. Returns `(shuffled, crossfades_completed)`.
    pub fn step_effects(&mut self, tubes: &SharedTubes, now: u32) -> (usize, usize) {
        if self.locked {
            return (0, 0);
        }
        let shuffled = self.shuffle.poll(tubes, now).unwrap_or(0);
        let completed = self.crossfade.poll(tubes, now).unwrap_or(0);
        (shuffled, completed)
    }

    /// One full pass: pending command first, then the effects
    pub fn run_pass(
        &mut self,
        tubes: &SharedTubes,
        now: u32,
        pending: Option<CommandBuffer>,
    ) -> PassReport {
        let command = pending.map(|buf| self.dispatch(tubes, &buf));
        let (shuffled, crossfades_completed) = self.step_effects(tubes, now);
        PassReport {
            command,
            shuffled,
            crossfades_completed,
        }
    }
}
