// Copyright 2026 The rheo authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Flat-map operators - one-to-many transformation.
//!
//! `flat_map_values` maps each element to a new sequence and interleaves
//! the inner outputs concurrently; output order is not guaranteed.
//! `concat_map_values` performs the same mapping but runs inner sequences
//! strictly one after the other, preserving input order at the cost of
//! concurrency.
//!
//! In both variants an error - from the upstream or from any inner
//! sequence - terminates the result; remaining inner sequences are dropped.

use crate::fuse_on_error::FuseOnErrorExt;
use crate::BoxSignalStream;
use futures::future::ready;
use futures::stream::once;
use futures::{Stream, StreamExt};
use rheo_core::Signal;

/// Extension trait providing the `flat_map_values` / `concat_map_values`
/// operators for signal streams.
pub trait FlatMapValuesExt<T>: Stream<Item = Signal<T>> + Sized {
    /// Maps each value to an inner sequence and merges the inner outputs
    /// as they arrive. Inner sequences run concurrently, so output order
    /// may differ from input order.
    fn flat_map_values<U, F>(self, f: F) -> impl Stream<Item = Signal<U>> + Send
    where
        Self: Send + 'static,
        F: FnMut(T) -> BoxSignalStream<U> + Send + 'static,
        T: Send + 'static,
        U: Send + 'static;

    /// Maps each value to an inner sequence and drains each inner sequence
    /// completely before starting the next. Output order matches input order.
    fn concat_map_values<U, F>(self, f: F) -> impl Stream<Item = Signal<U>> + Send
    where
        Self: Send + 'static,
        F: FnMut(T) -> BoxSignalStream<U> + Send + 'static,
        T: Send + 'static,
        U: Send + 'static;
}

fn expand<S, T, U, F>(stream: S, mut f: F) -> impl Stream<Item = BoxSignalStream<U>> + Send
where
    S: Stream<Item = Signal<T>> + Send,
    F: FnMut(T) -> BoxSignalStream<U> + Send,
    T: Send,
    U: Send + 'static,
{
    stream.map(move |signal| match signal {
        Signal::Next(v) => f(v),
        Signal::Error(e) => Box::pin(once(ready(Signal::Error(e)))) as BoxSignalStream<U>,
    })
}

impl<S, T> FlatMapValuesExt<T> for S
where
    S: Stream<Item = Signal<T>> + Sized,
{
    fn flat_map_values<U, F>(self, f: F) -> impl Stream<Item = Signal<U>> + Send
    where
        Self: Send + 'static,
        F: FnMut(T) -> BoxSignalStream<U> + Send + 'static,
        T: Send + 'static,
        U: Send + 'static,
    {
        expand(self, f).flatten_unordered(None).fuse_on_error()
    }

    fn concat_map_values<U, F>(self, f: F) -> impl Stream<Item = Signal<U>> + Send
    where
        Self: Send + 'static,
        F: FnMut(T) -> BoxSignalStream<U> + Send + 'static,
        T: Send + 'static,
        U: Send + 'static,
    {
        expand(self, f).flatten().fuse_on_error()
    }
}
