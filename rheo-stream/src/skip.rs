// Copyright 2026 The rheo authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Skip-items operator - discards the first n values.
//!
//! Only values count against the skip budget; an error arriving inside the
//! skipped prefix still terminates the sequence.

use futures::future::ready;
use futures::{Stream, StreamExt};
use rheo_core::Signal;

/// Extension trait providing the `skip_items` operator for signal streams.
pub trait SkipItemsExt<T>: Stream<Item = Signal<T>> + Sized {
    /// Discards the first `n` values, then emits the rest unchanged.
    fn skip_items(self, n: usize) -> impl Stream<Item = Signal<T>> + Send
    where
        Self: Send,
        T: Send;
}

impl<S, T> SkipItemsExt<T> for S
where
    S: Stream<Item = Signal<T>> + Sized,
{
    fn skip_items(self, n: usize) -> impl Stream<Item = Signal<T>> + Send
    where
        Self: Send,
        T: Send,
    {
        let mut remaining = n;
        self.filter(move |signal| {
            ready(match signal {
                Signal::Next(_) if remaining > 0 => {
                    remaining -= 1;
                    false
                }
                _ => true,
            })
        })
    }
}
