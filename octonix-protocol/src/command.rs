//! Opcode table and typed commands
//!
//! Opcodes are laid out in bands:
//! - `0x0_`, `0x1_`: digits
//! - `0x2_`, `0x3_`, `0x8_`, `0xB_`..`0xD_`: dots
//! - `0x6_`, `0x7_`: effect configuration and shuffle control
//! - `0xA_`: shuffle stop with a settle digit
//! - `0xE_`, `0xF_`: blanking
//! - `0x4D`: unlock
//!
//! The `0x90..=0x9F` band is reserved; only `0xA0..=0xA7` of the shuffle stop
//! block is assigned.

use crate::buffer::CommandBuffer;
use crate::values::{
    CrossfadeRate, CrossfadeSteps, Digit, DotSide, Scope, ShuffleRate, TubeIndex,
};

// Digit opcodes
pub const OP_SET_ALL_FIRST: u8 = 0x00;
pub const OP_SET_ALL_LAST: u8 = 0x09;
pub const OP_SET_DIGIT: u8 = 0x10;

// Per-tube dot opcodes
pub const OP_LEFT_DOT: u8 = 0x20;
pub const OP_RIGHT_DOT: u8 = 0x30;

// Effect configuration
pub const OP_CROSSFADE_STEPS_ALL: u8 = 0x60;
pub const OP_CROSSFADE_STEPS: u8 = 0x61;
pub const OP_CROSSFADE_RATE: u8 = 0x70;
pub const OP_SHUFFLE_RATE: u8 = 0x71;

// Shuffle control
pub const OP_SHUFFLE_START_ALL: u8 = 0x72;
pub const OP_SHUFFLE_STOP_ALL: u8 = 0x73;
pub const OP_SHUFFLE_START: u8 = 0x74;
pub const OP_SHUFFLE_FREEZE: u8 = 0x7C;
pub const OP_SHUFFLE_STOP: u8 = 0xA0;

// All-tube dot opcodes
pub const OP_LEFT_DOT_ALL: u8 = 0x80;
pub const OP_RIGHT_DOT_ALL: u8 = 0x81;
pub const OP_LEFT_DOT_ALL_OFF: u8 = 0xBF;
pub const OP_RIGHT_DOT_ALL_OFF: u8 = 0xCF;
pub const OP_DOTS_OFF: u8 = 0xD1;
pub const OP_DOTS_OFF_ALL: u8 = 0xDF;

// Blanking
pub const OP_BLANK: u8 = 0xE0;
pub const OP_BLANK_ALL: u8 = 0xEF;
pub const OP_BLANK_WITH_DOTS: u8 = 0xF0;
pub const OP_BLANK_WITH_DOTS_ALL: u8 = 0xFF;

// Lock
pub const OP_UNLOCK: u8 = 0x4D;

/// Parameter bytes that must follow [`OP_UNLOCK`] ("SX", completing "MSX")
pub const UNLOCK_KEY: [u8; 2] = [0x53, 0x58];

/// Reasons a received buffer does not map to a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// Write carried no bytes at all
    Empty,
    /// Opcode is unassigned or reserved
    UnknownOpcode(u8),
    /// A parameter byte the opcode needs was not delivered
    MissingParameter,
    /// Digit parameter above 9
    DigitOutOfRange(u8),
    /// Numeric parameter outside its documented bounds
    ParameterOutOfRange(u8),
    /// Unlock opcode with the wrong key bytes
    BadUnlockKey,
}

/// A decoded command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Show a digit (`0x00..=0x09` for all tubes, `0x10..=0x17` per tube)
    SetDigit { scope: Scope, digit: Digit },
    /// Switch one dot indicator (`0x20`, `0x30`, `0x80`, `0x81`, `0xBF`, `0xCF`)
    SetDot { scope: Scope, side: DotSide, on: bool },
    /// Switch off both dots (`0xD1..=0xD7`, `0xDF`)
    ClearDots(Scope),
    /// Crossfade length (`0x60` for all tubes, `0x61..=0x68` per tube)
    SetCrossfadeSteps { scope: Scope, steps: CrossfadeSteps },
    /// Crossfade stepping speed (`0x70`)
    SetCrossfadeRate(CrossfadeRate),
    /// Shuffle drawing speed (`0x71`)
    SetShuffleRate(ShuffleRate),
    /// Begin random cycling (`0x72` all, `0x74..=0x7B` per tube)
    StartShuffle(Scope),
    /// End random cycling and settle on a digit (`0x73` all, `0xA0..=0xA7` per tube)
    StopShuffle { scope: Scope, digit: Digit },
    /// Emergency stop: every shuffling tube keeps its last digit (`0x7C`)
    FreezeShuffle,
    /// Blank the digit; `clear_dots` also switches both dots off
    /// (`0xE0..=0xE7`, `0xEF`, `0xF0..=0xF7`, `0xFF`)
    Blank { scope: Scope, clear_dots: bool },
    /// Release the command lock (`0x4D 0x53 0x58`)
    Unlock,
}

impl Command {
    /// Decode a received buffer
    pub fn parse(buf: &CommandBuffer) -> Result<Self, CommandError> {
        let op = buf.opcode().ok_or(CommandError::Empty)?;

        let command = match op {
            OP_SET_ALL_FIRST..=OP_SET_ALL_LAST => Command::SetDigit {
                scope: Scope::All,
                digit: digit(op)?,
            },
            0x10..=0x17 => Command::SetDigit {
                scope: tube(op - OP_SET_DIGIT)?,
                digit: digit(param(buf, 1)?)?,
            },
            0x20..=0x27 => Command::SetDot {
                scope: tube(op - OP_LEFT_DOT)?,
                side: DotSide::Left,
                on: param(buf, 1)? > 0,
            },
            0x30..=0x37 => Command::SetDot {
                scope: tube(op - OP_RIGHT_DOT)?,
                side: DotSide::Right,
                on: param(buf, 1)? > 0,
            },
            OP_CROSSFADE_STEPS_ALL => Command::SetCrossfadeSteps {
                scope: Scope::All,
                steps: steps(param(buf, 1)?)?,
            },
            0x61..=0x68 => Command::SetCrossfadeSteps {
                scope: tube(op - OP_CROSSFADE_STEPS)?,
                steps: steps(param(buf, 1)?)?,
            },
            OP_CROSSFADE_RATE => {
                let value = param(buf, 1)?;
                Command::SetCrossfadeRate(
                    CrossfadeRate::new(value).ok_or(CommandError::ParameterOutOfRange(value))?,
                )
            }
            OP_SHUFFLE_RATE => {
                let value = param(buf, 1)?;
                Command::SetShuffleRate(
                    ShuffleRate::new(value).ok_or(CommandError::ParameterOutOfRange(value))?,
                )
            }
            OP_SHUFFLE_START_ALL => Command::StartShuffle(Scope::All),
            OP_SHUFFLE_STOP_ALL => Command::StopShuffle {
                scope: Scope::All,
                digit: digit(param(buf, 1)?)?,
            },
            0x74..=0x7B => Command::StartShuffle(tube(op - OP_SHUFFLE_START)?),
            OP_SHUFFLE_FREEZE => Command::FreezeShuffle,
            OP_LEFT_DOT_ALL => Command::SetDot {
                scope: Scope::All,
                side: DotSide::Left,
                on: param(buf, 1)? > 0,
            },
            OP_RIGHT_DOT_ALL => Command::SetDot {
                scope: Scope::All,
                side: DotSide::Right,
                on: param(buf, 1)? > 0,
            },
            0xA0..=0xA7 => Command::StopShuffle {
                scope: tube(op - OP_SHUFFLE_STOP)?,
                digit: digit(param(buf, 1)?)?,
            },
            OP_LEFT_DOT_ALL_OFF => Command::SetDot {
                scope: Scope::All,
                side: DotSide::Left,
                on: false,
            },
            OP_RIGHT_DOT_ALL_OFF => Command::SetDot {
                scope: Scope::All,
                side: DotSide::Right,
                on: false,
            },
            // 0xD0 is not assigned, so position 7 has no single-tube opcode here
            0xD1..=0xD7 => Command::ClearDots(tube(op - OP_DOTS_OFF)?),
            OP_DOTS_OFF_ALL => Command::ClearDots(Scope::All),
            0xE0..=0xE7 => Command::Blank {
                scope: tube(op - OP_BLANK)?,
                clear_dots: false,
            },
            OP_BLANK_ALL => Command::Blank {
                scope: Scope::All,
                clear_dots: false,
            },
            0xF0..=0xF7 => Command::Blank {
                scope: tube(op - OP_BLANK_WITH_DOTS)?,
                clear_dots: true,
            },
            OP_BLANK_WITH_DOTS_ALL => Command::Blank {
                scope: Scope::All,
                clear_dots: true,
            },
            OP_UNLOCK => {
                let key = [param(buf, 1)?, param(buf, 2)?];
                if key != UNLOCK_KEY {
                    return Err(CommandError::BadUnlockKey);
                }
                Command::Unlock
            }
            other => return Err(CommandError::UnknownOpcode(other)),
        };

        Ok(command)
    }
}

/// Returns true if `opcode` is the unlock opcode
///
/// The lock gate checks the raw opcode before any parsing happens.
pub fn is_unlock_opcode(opcode: u8) -> bool {
    opcode == OP_UNLOCK
}

fn param(buf: &CommandBuffer, n: usize) -> Result<u8, CommandError> {
    buf.byte(n).ok_or(CommandError::MissingParameter)
}

fn digit(value: u8) -> Result<Digit, CommandError> {
    Digit::new(value).ok_or(CommandError::DigitOutOfRange(value))
}

fn steps(value: u8) -> Result<CrossfadeSteps, CommandError> {
    CrossfadeSteps::new(value).ok_or(CommandError::ParameterOutOfRange(value))
}

fn tube(offset: u8) -> Result<Scope, CommandError> {
    TubeIndex::new(offset)
        .map(Scope::Tube)
        .ok_or(CommandError::ParameterOutOfRange(offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(bytes: &[u8]) -> Result<Command, CommandError> {
        Command::parse(&CommandBuffer::from_slice(bytes))
    }

    fn tube_scope(index: u8) -> Scope {
        Scope::Tube(TubeIndex::new(index).unwrap())
    }

    fn d(value: u8) -> Digit {
        Digit::new(value).unwrap()
    }

    #[test]
    fn test_set_all_uses_opcode_as_digit() {
        assert_eq!(
            parse(&[0x03]),
            Ok(Command::SetDigit {
                scope: Scope::All,
                digit: d(3)
            })
        );
        assert_eq!(
            parse(&[0x09]),
            Ok(Command::SetDigit {
                scope: Scope::All,
                digit: d(9)
            })
        );
    }

    #[test]
    fn test_set_digit_per_tube() {
        assert_eq!(
            parse(&[0x15, 7]),
            Ok(Command::SetDigit {
                scope: tube_scope(5),
                digit: d(7)
            })
        );
        assert_eq!(parse(&[0x15, 15]), Err(CommandError::DigitOutOfRange(15)));
        assert_eq!(parse(&[0x15]), Err(CommandError::MissingParameter));
    }

    #[test]
    fn test_position_nine_is_unassigned() {
        assert_eq!(parse(&[0x19, 1]), Err(CommandError::UnknownOpcode(0x19)));
    }

    #[test]
    fn test_dots() {
        assert_eq!(
            parse(&[0x25, 0x01]),
            Ok(Command::SetDot {
                scope: tube_scope(5),
                side: DotSide::Left,
                on: true
            })
        );
        assert_eq!(
            parse(&[0x32, 0x00]),
            Ok(Command::SetDot {
                scope: tube_scope(2),
                side: DotSide::Right,
                on: false
            })
        );
        assert_eq!(
            parse(&[0x81, 0x80]),
            Ok(Command::SetDot {
                scope: Scope::All,
                side: DotSide::Right,
                on: true
            })
        );
        assert_eq!(
            parse(&[0xBF]),
            Ok(Command::SetDot {
                scope: Scope::All,
                side: DotSide::Left,
                on: false
            })
        );
        assert_eq!(parse(&[0xD1]), Ok(Command::ClearDots(tube_scope(0))));
        assert_eq!(parse(&[0xD7]), Ok(Command::ClearDots(tube_scope(6))));
        assert_eq!(parse(&[0xD0]), Err(CommandError::UnknownOpcode(0xD0)));
        assert_eq!(parse(&[0xDF]), Ok(Command::ClearDots(Scope::All)));
    }

    #[test]
    fn test_crossfade_configuration() {
        assert_eq!(
            parse(&[0x68, 10]),
            Ok(Command::SetCrossfadeSteps {
                scope: tube_scope(7),
                steps: CrossfadeSteps::new(10).unwrap()
            })
        );
        assert_eq!(parse(&[0x60, 0]), Err(CommandError::ParameterOutOfRange(0)));
        assert_eq!(parse(&[0x60, 11]), Err(CommandError::ParameterOutOfRange(11)));
        assert_eq!(parse(&[0x70, 7]), Err(CommandError::ParameterOutOfRange(7)));
        assert!(parse(&[0x70, 6]).is_ok());
    }

    #[test]
    fn test_shuffle_commands() {
        assert_eq!(parse(&[0x72]), Ok(Command::StartShuffle(Scope::All)));
        assert_eq!(parse(&[0x7B]), Ok(Command::StartShuffle(tube_scope(7))));
        assert_eq!(
            parse(&[0x73, 0x07]),
            Ok(Command::StopShuffle {
                scope: Scope::All,
                digit: d(7)
            })
        );
        assert_eq!(
            parse(&[0xA3, 2]),
            Ok(Command::StopShuffle {
                scope: tube_scope(3),
                digit: d(2)
            })
        );
        assert_eq!(parse(&[0x7C]), Ok(Command::FreezeShuffle));
        assert_eq!(parse(&[0x71, 9]), Err(CommandError::ParameterOutOfRange(9)));
        assert_eq!(parse(&[0x71, 201]), Err(CommandError::ParameterOutOfRange(201)));
    }

    #[test]
    fn test_reserved_bands_are_unknown() {
        for op in [0x7D, 0x7F, 0x90, 0x9F, 0xA8, 0xAF] {
            assert_eq!(parse(&[op, 1]), Err(CommandError::UnknownOpcode(op)));
        }
    }

    #[test]
    fn test_blank_commands() {
        assert_eq!(
            parse(&[0xE4]),
            Ok(Command::Blank {
                scope: tube_scope(4),
                clear_dots: false
            })
        );
        assert_eq!(
            parse(&[0xFF]),
            Ok(Command::Blank {
                scope: Scope::All,
                clear_dots: true
            })
        );
    }

    #[test]
    fn test_unlock_key() {
        assert_eq!(parse(&[0x4D, 0x53, 0x58]), Ok(Command::Unlock));
        assert_eq!(parse(&[0x4D, 0x53, 0x59]), Err(CommandError::BadUnlockKey));
        assert_eq!(parse(&[0x4D, 0x53]), Err(CommandError::MissingParameter));
        assert!(is_unlock_opcode(0x4D));
        assert!(!is_unlock_opcode(0x4E));
    }

    #[test]
    fn test_empty_buffer() {
        assert_eq!(parse(&[]), Err(CommandError::Empty));
    }
}
