use super::helpers::*;
use crate::{Engine, RotationMode};
use catalog::MemResource;

// --------------------- First tick ---------------------

#[test]
fn first_tick_refreshes_even_off_beat() {
    let mut engine = Engine::new(
        five_records(),
        SharedClock::new(fields_at(3)),
        RotationMode::Sequential,
    );
    let mut sink = VecSink::default();
    engine.on_tick(&mut sink).unwrap();
    assert_eq!(sink.labels, vec!["zero"]);
    assert_eq!(sink.bodies, vec!["first definition"]);
    assert_eq!(engine.current(), 0);
}

// --------------------- Beats ---------------------

#[test]
fn rotation_beat_advances_and_hides_the_definition() {
    let clock = SharedClock::new(fields_at(10));
    let mut engine = Engine::new(five_records(), clock, RotationMode::Sequential);
    let mut sink = VecSink::default();
    engine.on_tick(&mut sink).unwrap();
    assert_eq!(engine.current(), 1);
    assert_eq!(sink.labels, vec!["one"]);
    assert_eq!(sink.bodies, vec![""]);
}

#[test]
fn reveal_beat_shows_the_definition_without_advancing() {
    let clock = SharedClock::new(fields_at(10));
    let mut engine = Engine::new(five_records(), clock.clone(), RotationMode::Sequential);
    let mut sink = VecSink::default();
    engine.on_tick(&mut sink).unwrap(); // rotate to record 1, label only
    clock.set(fields_at(15));
    engine.on_tick(&mut sink).unwrap(); // reveal the definition
    assert_eq!(engine.current(), 1);
    assert_eq!(sink.labels, vec!["one", "one"]);
    assert_eq!(sink.bodies, vec!["", "second"]);
}

#[test]
fn off_beat_ticks_are_ignored_after_the_first() {
    let clock = SharedClock::new(fields_at(15));
    let mut engine = Engine::new(five_records(), clock.clone(), RotationMode::Sequential);
    let mut sink = VecSink::default();
    engine.on_tick(&mut sink).unwrap();
    for sec in [16, 17, 18, 19, 21, 23, 59] {
        clock.set(fields_at(sec));
        engine.on_tick(&mut sink).unwrap();
    }
    assert_eq!(sink.labels.len(), 1);
    assert_eq!(engine.current(), 0);
}

#[test]
fn full_minute_of_sequential_ticks() {
    let clock = SharedClock::new(fields_at(0));
    let mut engine = Engine::new(five_records(), clock.clone(), RotationMode::Sequential);
    let mut sink = VecSink::default();
    for sec in 0..60 {
        clock.set(fields_at(sec));
        engine.on_tick(&mut sink).unwrap();
    }
    // six rotation beats (0, 10, ..., 50) and six reveal beats (5, 15, ..., 55)
    assert_eq!(sink.labels.len(), 12);
    assert_eq!(engine.current(), 6 % 5);
    for (i, body) in sink.bodies.iter().enumerate() {
        if i % 2 == 0 {
            assert!(body.is_empty(), "rotation beat {} should hide the body", i);
        } else {
            assert!(!body.is_empty(), "reveal beat {} should show the body", i);
        }
    }
}

// --------------------- Degenerate catalogs ---------------------

#[test]
fn empty_catalog_tick_leaves_the_sink_untouched() {
    let mut engine = Engine::new(
        MemResource::from(""),
        SharedClock::new(fields_at(0)),
        RotationMode::Sequential,
    );
    let mut sink = VecSink::default();
    engine.on_tick(&mut sink).unwrap();
    assert!(sink.labels.is_empty());
    assert!(sink.bodies.is_empty());
}

#[test]
fn randomized_ticks_on_a_single_record_pin_to_zero() {
    let clock = SharedClock::new(fields_at(10));
    let mut engine = Engine::new(
        MemResource::from("only\tone\n"),
        clock.clone(),
        RotationMode::Randomized,
    );
    let mut sink = VecSink::default();
    for sec in [10, 15, 20, 25, 30] {
        clock.set(fields_at(sec));
        engine.on_tick(&mut sink).unwrap();
        assert_eq!(engine.current(), 0);
    }
    assert!(sink.labels.iter().all(|l| l == "only"));
}
