// Copyright 2026 The rheo authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::RheoError;

/// One event in a sequence: a value or a terminating error.
///
/// Sequences are streams of `Signal<T>`; completion is represented by the
/// end of the stream. Operators propagate errors through the stream while
/// processing values, following Rx-style semantics where an error is the
/// sequence's terminal signal: no further signals are delivered after it.
#[derive(Debug, Clone)]
pub enum Signal<T> {
    /// A successfully produced value
    Next(T),
    /// An error that terminates the sequence
    Error(RheoError),
}

impl<T: PartialEq> PartialEq for Signal<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Signal::Next(a), Signal::Next(b)) => a == b,
            _ => false, // Errors are never equal
        }
    }
}

impl<T> Signal<T> {
    /// Returns `true` if this is a `Next`.
    pub const fn is_next(&self) -> bool {
        matches!(self, Signal::Next(_))
    }

    /// Returns `true` if this is an `Error`.
    pub const fn is_error(&self) -> bool {
        matches!(self, Signal::Error(_))
    }

    /// Converts to `Option<T>`, discarding errors.
    pub fn ok(self) -> Option<T> {
        match self {
            Signal::Next(v) => Some(v),
            Signal::Error(_) => None,
        }
    }

    /// Converts to `Option<RheoError>`, discarding values.
    pub fn err(self) -> Option<RheoError> {
        match self {
            Signal::Next(_) => None,
            Signal::Error(e) => Some(e),
        }
    }

    /// Maps a `Signal<T>` to `Signal<U>` by applying a function to the
    /// contained value. Errors are propagated unchanged.
    pub fn map<U, F>(self, f: F) -> Signal<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Signal::Next(v) => Signal::Next(f(v)),
            Signal::Error(e) => Signal::Error(e),
        }
    }

    /// Maps a `Signal<T>` to `Signal<U>` by applying a function that can
    /// itself fail. Errors are propagated unchanged.
    pub fn and_then<U, F>(self, f: F) -> Signal<U>
    where
        F: FnOnce(T) -> Signal<U>,
    {
        match self {
            Signal::Next(v) => f(v),
            Signal::Error(e) => Signal::Error(e),
        }
    }

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics if the signal is an `Error`.
    pub fn unwrap(self) -> T {
        match self {
            Signal::Next(v) => v,
            Signal::Error(e) => {
                panic!("called `Signal::unwrap()` on an `Error` signal: {:?}", e)
            }
        }
    }

    /// Returns the contained value, panicking with a custom message on error.
    ///
    /// # Panics
    ///
    /// Panics with the provided message if the signal is an `Error`.
    pub fn expect(self, msg: &str) -> T {
        match self {
            Signal::Next(v) => v,
            Signal::Error(e) => panic!("{}: {:?}", msg, e),
        }
    }
}

impl<T> From<Result<T, RheoError>> for Signal<T> {
    fn from(result: Result<T, RheoError>) -> Self {
        match result {
            Ok(v) => Signal::Next(v),
            Err(e) => Signal::Error(e),
        }
    }
}

impl<T> From<Signal<T>> for Result<T, RheoError> {
    fn from(signal: Signal<T>) -> Self {
        match signal {
            Signal::Next(v) => Ok(v),
            Signal::Error(e) => Err(e),
        }
    }
}
