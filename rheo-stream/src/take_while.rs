// Copyright 2026 The rheo authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Take-while operator - emits while a predicate holds.
//!
//! The first value failing the predicate completes the sequence; that value
//! itself is not emitted. Errors arriving before the cutoff propagate.

use futures::future::ready;
use futures::{Stream, StreamExt};
use rheo_core::Signal;

/// Extension trait providing the `take_while_values` operator for signal streams.
pub trait TakeWhileValuesExt<T>: Stream<Item = Signal<T>> + Sized {
    /// Emits values while `predicate` returns `true`, then completes.
    fn take_while_values<P>(self, predicate: P) -> impl Stream<Item = Signal<T>> + Send
    where
        Self: Send,
        T: Send,
        P: FnMut(&T) -> bool + Send;
}

impl<S, T> TakeWhileValuesExt<T> for S
where
    S: Stream<Item = Signal<T>> + Sized,
{
    fn take_while_values<P>(self, mut predicate: P) -> impl Stream<Item = Signal<T>> + Send
    where
        Self: Send,
        T: Send,
        P: FnMut(&T) -> bool + Send,
    {
        self.take_while(move |signal| {
            ready(match signal {
                Signal::Next(v) => predicate(v),
                Signal::Error(_) => true,
            })
        })
    }
}
