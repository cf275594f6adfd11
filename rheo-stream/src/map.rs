// Copyright 2026 The rheo authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Map operators - synchronous one-to-one transformation.
//!
//! `map_values` applies a pure function per element, preserving order and
//! signal cardinality. `try_map_values` applies a fallible function; a
//! failed mapping becomes the sequence's terminal `Computation` error.

use crate::fuse_on_error::FuseOnErrorExt;
use futures::{Stream, StreamExt};
use rheo_core::Signal;

/// Extension trait providing the `map_values` operators for signal streams.
pub trait MapValuesExt<T>: Stream<Item = Signal<T>> + Sized {
    /// Applies a pure function to each value. Errors are propagated unchanged.
    fn map_values<U, F>(self, f: F) -> impl Stream<Item = Signal<U>> + Send
    where
        Self: Send,
        F: FnMut(T) -> U + Send,
        U: Send;

    /// Applies a fallible function to each value.
    ///
    /// The first `Err` returned by `f` terminates the sequence with that
    /// error; no further signals are delivered.
    fn try_map_values<U, F>(self, f: F) -> impl Stream<Item = Signal<U>> + Send
    where
        Self: Send,
        F: FnMut(T) -> rheo_core::Result<U> + Send,
        U: Send;
}

impl<S, T> MapValuesExt<T> for S
where
    S: Stream<Item = Signal<T>> + Sized,
{
    fn map_values<U, F>(self, mut f: F) -> impl Stream<Item = Signal<U>> + Send
    where
        Self: Send,
        F: FnMut(T) -> U + Send,
        U: Send,
    {
        self.map(move |signal| signal.map(&mut f))
    }

    fn try_map_values<U, F>(self, mut f: F) -> impl Stream<Item = Signal<U>> + Send
    where
        Self: Send,
        F: FnMut(T) -> rheo_core::Result<U> + Send,
        U: Send,
    {
        self.map(move |signal| match signal {
            Signal::Next(v) => Signal::from(f(v)),
            Signal::Error(e) => Signal::Error(e),
        })
        .fuse_on_error()
    }
}
