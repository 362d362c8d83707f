//! Command application

use octonix_protocol::Command;

use super::ControlLoop;
use crate::tube::SharedTubes;

impl ControlLoop {
    /// Apply a decoded command to the tubes and stepper settings
    pub(super) fn apply(&mut self, tubes: &SharedTubes, command: Command) {
        match command {
            Command::SetDigit { scope, digit } => {
                tubes.update_scope(scope, |tube| tube.set_digit(digit));
            }
            Command::SetDot { scope, side, on } => {
                tubes.update_scope(scope, |tube| tube.set_dot(side, on));
            }
            Command::ClearDots(scope) => {
                tubes.update_scope(scope, |tube| tube.clear_dots());
            }
            Command::SetCrossfadeSteps { scope, steps } => {
                tubes.update_scope(scope, |tube| tube.set_crossfade_steps(steps));
            }
            Command::SetCrossfadeRate(rate) => self.crossfade.set_rate(rate),
            Command::SetShuffleRate(rate) => self.shuffle.set_rate(rate),
            Command::StartShuffle(scope) => {
                tubes.update_scope(scope, |tube| tube.start_shuffle());
            }
            Command::StopShuffle { scope, digit } => {
                tubes.update_scope(scope, |tube| {
                    tube.stop_shuffle(digit);
                });
            }
            Command::FreezeShuffle => {
                tubes.count_updates(|tube| tube.freeze());
            }
            Command::Blank { scope, clear_dots } => {
                tubes.update_scope(scope, |tube| tube.blank(clear_dots));
            }
            Command::Unlock => self.locked = false,
        }
    }
}

#[cfg(test)]
mod tests {
    use octonix_protocol::{CommandBuffer, CommandError, Digit, TubeIndex};

    use super::*;
    use crate::brightness::Brightness;
    use crate::config::EngineConfig;
    use crate::control::Rejection;
    use crate::tube::{Effect, Glyph};

    fn setup() -> (SharedTubes, ControlLoop) {
        let tubes = SharedTubes::new();
        let control = ControlLoop::new(&EngineConfig::DEFAULT).unwrap();
        (tubes, control)
    }

    fn send(control: &mut ControlLoop, tubes: &SharedTubes, bytes: &[u8]) -> Result<Command, Rejection> {
        control.dispatch(tubes, &CommandBuffer::from_slice(bytes))
    }

    fn index(i: u8) -> TubeIndex {
        TubeIndex::new(i).unwrap()
    }

    fn digit(value: u8) -> Digit {
        Digit::new(value).unwrap()
    }

    #[test]
    fn test_set_all() {
        let (tubes, mut control) = setup();
        send(&mut control, &tubes, &[0x03]).unwrap();
        for i in TubeIndex::all() {
            let tube = tubes.snapshot(i);
            assert_eq!(tube.target, digit(3));
            assert_eq!(tube.displayed, Glyph::Digit(digit(3)));
            let expected = if i.get() == 3 {
                Effect::None
            } else {
                Effect::Crossfade { step: 0 }
            };
            assert_eq!(tube.effect, expected);
        }
    }

    #[test]
    fn test_set_one_tube() {
        let (tubes, mut control) = setup();
        send(&mut control, &tubes, &[0x14, 0x09]).unwrap();
        assert_eq!(tubes.snapshot(index(4)).target, digit(9));
        assert_eq!(tubes.snapshot(index(5)).target, digit(5));
    }

    #[test]
    fn test_dots() {
        let (tubes, mut control) = setup();
        send(&mut control, &tubes, &[0x25, 0x01]).unwrap();
        send(&mut control, &tubes, &[0x81, 0x01]).unwrap();
        let five = tubes.snapshot(index(5));
        assert!(five.dot_left && five.dot_right);
        assert!(!tubes.snapshot(index(4)).dot_left);

        send(&mut control, &tubes, &[0xCF]).unwrap();
        assert!(!tubes.snapshot(index(0)).dot_right);
        assert!(tubes.snapshot(index(5)).dot_left);

        send(&mut control, &tubes, &[0xD5]).unwrap();
        assert!(!tubes.snapshot(index(4)).dot_left);
        // 0xD5 addresses position 4
        let after = tubes.snapshot(index(5));
        assert!(after.dot_left);

        send(&mut control, &tubes, &[0xDF]).unwrap();
        assert!(!tubes.snapshot(index(5)).dot_left);
    }

    #[test]
    fn test_crossfade_settings() {
        let (tubes, mut control) = setup();
        send(&mut control, &tubes, &[0x60, 0x08]).unwrap();
        send(&mut control, &tubes, &[0x63, 0x02]).unwrap();
        send(&mut control, &tubes, &[0x70, 0x00]).unwrap();

        assert_eq!(tubes.snapshot(index(2)).crossfade_steps.get(), 2);
        assert_eq!(tubes.snapshot(index(3)).crossfade_steps.get(), 8);
        assert_eq!(control.crossfade().interval(), 13);

        send(&mut control, &tubes, &[0x71, 0x64]).unwrap();
        assert_eq!(control.shuffle().rate().ticks(), 100);
    }

    #[test]
    fn test_shuffle_start_stop() {
        let (tubes, mut control) = setup();
        send(&mut control, &tubes, &[0x76]).unwrap();
        assert!(tubes.snapshot(index(2)).is_shuffling());
        assert!(!tubes.snapshot(index(3)).is_shuffling());

        send(&mut control, &tubes, &[0xA2, 0x07]).unwrap();
        let tube = tubes.snapshot(index(2));
        assert_eq!(tube.shuffle_target, digit(7));
        assert_eq!(tube.target, digit(7));
        assert!(tube.is_crossfading());
    }

    #[test]
    fn test_stop_shuffle_all_records_settle_digit() {
        let (tubes, mut control) = setup();
        send(&mut control, &tubes, &[0x76]).unwrap();
        send(&mut control, &tubes, &[0x73, 0x04]).unwrap();

        for i in TubeIndex::all() {
            assert_eq!(tubes.snapshot(i).shuffle_target, digit(4));
        }
        // Idle tubes keep their digit
        let idle = tubes.snapshot(index(5));
        assert_eq!(idle.displayed, Glyph::Digit(digit(5)));
        assert_eq!(idle.effect, Effect::None);
        assert!(tubes.snapshot(index(2)).is_crossfading());
    }

    #[test]
    fn test_freeze() {
        let (tubes, mut control) = setup();
        send(&mut control, &tubes, &[0x72]).unwrap();
        send(&mut control, &tubes, &[0x7C]).unwrap();
        for i in TubeIndex::all() {
            let tube = tubes.snapshot(i);
            assert_eq!(tube.effect, Effect::None);
            assert_eq!(tube.displayed, Glyph::Digit(digit(i.get())));
        }
    }

    #[test]
    fn test_blank_variants() {
        let (tubes, mut control) = setup();
        send(&mut control, &tubes, &[0x80, 0x01]).unwrap();
        send(&mut control, &tubes, &[0xE1]).unwrap();
        let one = tubes.snapshot(index(1));
        assert_eq!(one.displayed, Glyph::Blank);
        assert_eq!(one.brightness, Brightness::OFF);
        assert!(one.dot_left);

        send(&mut control, &tubes, &[0xFF]).unwrap();
        for i in TubeIndex::all() {
            let tube = tubes.snapshot(i);
            assert_eq!(tube.displayed, Glyph::Blank);
            assert!(!tube.dot_left);
        }
    }

    #[test]
    fn test_invalid_commands_change_nothing() {
        let (tubes, mut control) = setup();
        let before = tubes.snapshot_all();

        for bytes in [
            &[0x10, 0x0F][..],
            &[0x19, 0x01][..],
            &[0x60, 0x00][..],
            &[0x70, 0x07][..],
            &[0x71, 0x09][..],
            &[0x90][..],
            &[0xA8, 0x01][..],
            &[0x7E][..],
            &[0x10][..],
        ] {
            assert!(send(&mut control, &tubes, bytes).is_err());
        }

        assert_eq!(tubes.snapshot_all(), before);
        assert_eq!(control.crossfade().interval(), 66);
        assert_eq!(
            send(&mut control, &tubes, &[0x10]),
            Err(Rejection::Invalid(CommandError::MissingParameter))
        );
    }
}
