// Copyright 2026 The rheo authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Take-items operator - limits a sequence to its first n signals.
//!
//! After the nth signal the sequence completes and the upstream is dropped,
//! so it receives no further demand - a source still holding values is
//! simply never polled again.

use futures::stream::Take;
use futures::{Stream, StreamExt};
use rheo_core::Signal;

/// Extension trait providing the `take_items` operator for signal streams.
pub trait TakeItemsExt<T>: Stream<Item = Signal<T>> + Sized {
    /// Emits only the first `n` signals, then completes.
    fn take_items(self, n: usize) -> Take<Self>;
}

impl<S, T> TakeItemsExt<T> for S
where
    S: Stream<Item = Signal<T>> + Sized,
{
    fn take_items(self, n: usize) -> Take<Self> {
        StreamExt::take(self, n)
    }
}
