// Copyright 2026 The rheo authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error injection for propagation tests.
//!
//! Wraps a stream of plain values into a signal stream, injecting one
//! `Signal::Error` at a chosen position so operator tests can observe how
//! errors travel through a composition.

use rheo_core::{RheoError, Signal};
use futures::Stream;
use std::pin::Pin;
use std::task::{Context, Poll};

/// A stream wrapper that injects an error at a specified position.
///
/// Values from the inner stream come out as `Signal::Next`; at position
/// `inject_error_at` (0-indexed, counted over emitted signals) an
/// `Upstream` error is emitted instead, exactly once. The inner stream is
/// not consumed for the injected position, so the wrapped sequence
/// continues afterwards.
pub struct ErrorInjectingStream<S> {
    inner: S,
    inject_error_at: Option<usize>,
    count: usize,
}

impl<S> ErrorInjectingStream<S> {
    pub fn new(inner: S, inject_error_at: usize) -> Self {
        Self {
            inner,
            inject_error_at: Some(inject_error_at),
            count: 0,
        }
    }
}

impl<S> Stream for ErrorInjectingStream<S>
where
    S: Stream + Unpin,
{
    type Item = Signal<S::Item>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if let Some(error_pos) = self.inject_error_at {
            if self.count == error_pos {
                self.inject_error_at = None;
                self.count += 1;
                return Poll::Ready(Some(Signal::Error(RheoError::upstream(
                    "injected test error",
                ))));
            }
        }

        match Pin::new(&mut self.inner).poll_next(cx) {
            Poll::Ready(Some(item)) => {
                self.count += 1;
                Poll::Ready(Some(Signal::Next(item)))
            }
            Poll::Ready(None) => Poll::Ready(None),
            Poll::Pending => Poll::Pending,
        }
    }
}
