// Copyright 2026 The rheo authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Buffer operator - accumulates values into fixed-size batches.
//!
//! Values are collected into `Vec<T>` batches of `size` elements; the final
//! batch may be smaller. An error discards the partially filled batch and
//! terminates the sequence.

use futures::Stream;
use pin_project::pin_project;
use rheo_core::Signal;
use std::mem;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Stream produced by [`BufferCountExt::buffer_count`].
#[pin_project]
pub struct BufferCount<S, T> {
    #[pin]
    stream: S,
    size: usize,
    batch: Vec<T>,
    done: bool,
}

impl<S, T> Stream for BufferCount<S, T>
where
    S: Stream<Item = Signal<T>>,
{
    type Item = Signal<Vec<T>>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if *this.done {
            return Poll::Ready(None);
        }

        loop {
            match this.stream.as_mut().poll_next(cx) {
                Poll::Ready(Some(Signal::Next(v))) => {
                    this.batch.push(v);
                    if this.batch.len() == *this.size {
                        return Poll::Ready(Some(Signal::Next(mem::take(this.batch))));
                    }
                }
                Poll::Ready(Some(Signal::Error(e))) => {
                    *this.done = true;
                    this.batch.clear();
                    return Poll::Ready(Some(Signal::Error(e)));
                }
                Poll::Ready(None) => {
                    *this.done = true;
                    if this.batch.is_empty() {
                        return Poll::Ready(None);
                    }
                    return Poll::Ready(Some(Signal::Next(mem::take(this.batch))));
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

/// Extension trait providing the `buffer_count` operator for signal streams.
pub trait BufferCountExt<T>: Stream<Item = Signal<T>> + Sized {
    /// Accumulates values into batches of `size`; the final batch may be
    /// smaller.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    fn buffer_count(self, size: usize) -> BufferCount<Self, T> {
        assert!(size > 0, "buffer size must be positive");
        BufferCount {
            stream: self,
            size,
            batch: Vec::new(),
            done: false,
        }
    }
}

impl<S, T> BufferCountExt<T> for S where S: Stream<Item = Signal<T>> + Sized {}
