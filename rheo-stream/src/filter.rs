// Copyright 2026 The rheo authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Filter operator - keeps only elements satisfying a predicate.
//!
//! Non-matching elements are dropped silently: nothing signals the drop.
//! Order is preserved and errors pass through untouched.

use futures::future::ready;
use futures::{Stream, StreamExt};
use rheo_core::Signal;

/// Extension trait providing the `filter_values` operator for signal streams.
pub trait FilterValuesExt<T>: Stream<Item = Signal<T>> + Sized {
    /// Keeps only values for which the predicate returns `true`.
    fn filter_values<P>(self, predicate: P) -> impl Stream<Item = Signal<T>> + Send
    where
        Self: Send,
        T: Send,
        P: FnMut(&T) -> bool + Send;
}

impl<S, T> FilterValuesExt<T> for S
where
    S: Stream<Item = Signal<T>> + Sized,
{
    fn filter_values<P>(self, mut predicate: P) -> impl Stream<Item = Signal<T>> + Send
    where
        Self: Send,
        T: Send,
        P: FnMut(&T) -> bool + Send,
    {
        self.filter(move |signal| {
            ready(match signal {
                Signal::Next(v) => predicate(v),
                Signal::Error(_) => true,
            })
        })
    }
}
