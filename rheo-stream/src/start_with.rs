// Copyright 2026 The rheo authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Start-with operator - prepends immediate values before the source.

use futures::stream::iter;
use futures::{Stream, StreamExt};
use rheo_core::Signal;

/// Extension trait providing the `start_with` operator for signal streams.
pub trait StartWithExt<T>: Stream<Item = Signal<T>> + Sized {
    /// Emits `values` first, then everything from this sequence.
    fn start_with<I>(self, values: I) -> impl Stream<Item = Signal<T>> + Send
    where
        Self: Send,
        I: IntoIterator<Item = T>,
        I::IntoIter: Send,
        T: Send;
}

impl<S, T> StartWithExt<T> for S
where
    S: Stream<Item = Signal<T>> + Sized,
{
    fn start_with<I>(self, values: I) -> impl Stream<Item = Signal<T>> + Send
    where
        Self: Send,
        I: IntoIterator<Item = T>,
        I::IntoIter: Send,
        T: Send,
    {
        iter(values.into_iter().map(Signal::Next)).chain(self)
    }
}
