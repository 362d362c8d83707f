//! End-to-end behavior of the engine driven like the firmware drives it:
//! refresh ticks interleaved with control loop passes.

use octonix_core::protocol::{CommandBuffer, Digit, TubeIndex, TUBE_COUNT};
use octonix_core::{DisplayEngine, Effect, EngineConfig, Glyph, Rejection};

/// Longest a default crossfade can take: five steps of 66 ticks plus one
/// partial interval before the first step
const DEFAULT_CROSSFADE_TICKS: u32 = 6 * 66;

fn engine() -> DisplayEngine {
    DisplayEngine::new(&EngineConfig::DEFAULT).unwrap()
}

fn send(engine: &mut DisplayEngine, bytes: &[u8]) {
    engine.deliver(CommandBuffer::from_slice(bytes));
    engine.run_pass();
}

fn digit(value: u8) -> Digit {
    Digit::new(value).unwrap()
}

fn index(i: u8) -> TubeIndex {
    TubeIndex::new(i).unwrap()
}

#[test]
fn test_power_on_shows_positions() {
    let mut engine = engine();
    for i in 0..TUBE_COUNT as u8 {
        let frame = engine.tick();
        let bytes = frame.as_bytes();
        assert_eq!(bytes[4], 1 << i);
        assert_eq!(bytes[0], 1 << i);
    }
}

#[test]
fn test_set_all_then_settle() {
    let mut engine = engine();
    send(&mut engine, &[0x03]);

    for tube in engine.table().iter() {
        assert_eq!(tube.target, digit(3));
    }

    engine.run_for(DEFAULT_CROSSFADE_TICKS);
    for tube in engine.table().iter() {
        assert_eq!(tube.displayed, Glyph::Digit(digit(3)));
        assert_eq!(tube.effect, Effect::None);
    }
}

#[test]
fn test_left_dot_reaches_frame() {
    let mut engine = engine();
    send(&mut engine, &[0x25, 0x01]);
    assert!(engine.tube(index(5)).dot_left);

    // Drive positions 0..=5; the sixth frame is position 5
    let frame = (0..6).map(|_| engine.tick()).last().unwrap();
    assert_eq!(frame.as_bytes(), &[1 << 5, 0b0100, 0, 0, 1 << 5]);
}

#[test]
fn test_shuffle_then_settle_on_seven() {
    let mut engine = engine();
    send(&mut engine, &[0x72]);
    assert!(engine.table().iter().all(|tube| tube.is_shuffling()));

    engine.run_for(500);
    assert!(engine.table().iter().all(|tube| tube.is_shuffling()));

    send(&mut engine, &[0x73, 0x07]);
    for tube in engine.table().iter() {
        assert!(!tube.is_shuffling());
        assert_eq!(tube.shuffle_target, digit(7));
        assert_eq!(tube.target, digit(7));
    }

    engine.run_for(DEFAULT_CROSSFADE_TICKS);
    for tube in engine.table().iter() {
        assert_eq!(tube.displayed, Glyph::Digit(digit(7)));
        assert_eq!(tube.effect, Effect::None);
    }
}

#[test]
fn test_unlock_clears_lock() {
    let config = EngineConfig {
        start_locked: true,
        ..EngineConfig::DEFAULT
    };
    let mut engine = DisplayEngine::new(&config).unwrap();
    assert!(engine.is_locked());

    engine.deliver(CommandBuffer::from_slice(&[0x05]));
    assert_eq!(engine.run_pass().command, Some(Err(Rejection::Locked)));
    assert_eq!(engine.tube(index(0)).target, digit(0));

    send(&mut engine, &[0x4D, 0x53, 0x58]);
    assert!(!engine.is_locked());

    send(&mut engine, &[0x05]);
    assert_eq!(engine.tube(index(0)).target, digit(5));
}

#[test]
fn test_blank_then_revive() {
    let mut engine = engine();
    send(&mut engine, &[0xE2]);
    assert_eq!(engine.tube(index(2)).displayed, Glyph::Blank);

    // Position 2 renders dark while blank
    let frame = (0..3).map(|_| engine.tick()).last().unwrap();
    assert!(frame.is_dark());

    send(&mut engine, &[0x12, 0x02]);
    let tube = engine.tube(index(2));
    assert_eq!(tube.previous, Glyph::Blank);
    assert!(tube.is_crossfading());

    engine.run_for(DEFAULT_CROSSFADE_TICKS);
    assert_eq!(engine.tube(index(2)).displayed, Glyph::Digit(digit(2)));
}

#[test]
fn test_emergency_stop_keeps_shuffled_digits() {
    let mut engine = engine();
    send(&mut engine, &[0x72]);
    engine.run_for(300);
    let shuffled = engine.table();

    send(&mut engine, &[0x7C]);
    engine.run_for(300);
    for (before, after) in shuffled.iter().zip(engine.table().iter()) {
        assert_eq!(after.effect, Effect::None);
        assert_eq!(after.displayed, before.displayed);
    }
}
