// Copyright 2026 The rheo authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rheo_core::{RheoError, Signal};

#[test]
fn test_signal_next_accessors() {
    let signal = Signal::Next(42);

    assert!(signal.is_next());
    assert!(!signal.is_error());
    assert_eq!(signal.ok(), Some(42));
}

#[test]
fn test_signal_error_accessors() {
    let signal: Signal<i32> = Signal::Error(RheoError::upstream("source failed"));

    assert!(signal.is_error());
    assert!(!signal.is_next());
    assert!(signal.clone().ok().is_none());
    assert_eq!(signal.err().unwrap().context(), "source failed");
}

#[test]
fn test_signal_map_transforms_value() {
    let signal = Signal::Next(21).map(|v| v * 2);

    assert_eq!(signal.unwrap(), 42);
}

#[test]
fn test_signal_map_propagates_error() {
    let signal: Signal<i32> = Signal::Error(RheoError::computation("bad transform"));
    let mapped = signal.map(|v| v * 2);

    assert!(mapped.is_error());
}

#[test]
fn test_signal_and_then_chains() {
    let signal = Signal::Next(10).and_then(|v| {
        if v > 5 {
            Signal::Next(v + 1)
        } else {
            Signal::Error(RheoError::computation("too small"))
        }
    });

    assert_eq!(signal.unwrap(), 11);
}

#[test]
fn test_signal_equality_ignores_errors() {
    assert_eq!(Signal::Next(1), Signal::Next(1));
    assert_ne!(Signal::Next(1), Signal::Next(2));

    // Errors are never equal, not even to themselves
    let err: Signal<i32> = Signal::Error(RheoError::timeout("50ms"));
    assert_ne!(err.clone(), err);
}

#[test]
fn test_signal_result_round_trip() {
    let ok: Signal<i32> = Ok(5).into();
    assert_eq!(ok, Signal::Next(5));

    let result: Result<i32, RheoError> = Signal::Next(5).into();
    assert_eq!(result.unwrap(), 5);

    let err: Result<i32, RheoError> = Signal::Error(RheoError::timeout("50ms")).into();
    assert!(err.is_err());
}

#[test]
#[should_panic(expected = "called `Signal::unwrap()` on an `Error` signal")]
fn test_signal_unwrap_panics_on_error() {
    let signal: Signal<i32> = Signal::Error(RheoError::upstream("boom"));
    let _ = signal.unwrap();
}

#[test]
#[should_panic(expected = "expected a value")]
fn test_signal_expect_panics_with_message() {
    let signal: Signal<i32> = Signal::Error(RheoError::upstream("boom"));
    let _ = signal.expect("expected a value");
}
