// Copyright 2026 The rheo authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Log operator - traces every signal through `tracing`.
//!
//! Purely observational: signals pass through unchanged. Values and errors
//! are logged at debug level under the caller-supplied category, and the
//! terminal event (complete or error) is logged exactly once.

use futures::Stream;
use pin_project::pin_project;
use rheo_core::Signal;
use std::fmt::Debug;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Stream produced by [`LogSignalsExt::log`].
#[pin_project]
pub struct LogSignals<S> {
    #[pin]
    stream: S,
    category: &'static str,
    terminated: bool,
}

impl<S, T> Stream for LogSignals<S>
where
    S: Stream<Item = Signal<T>>,
    T: Debug,
{
    type Item = Signal<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();

        match this.stream.poll_next(cx) {
            Poll::Ready(Some(Signal::Next(v))) => {
                tracing::debug!(category = *this.category, value = ?v, "onNext");
                Poll::Ready(Some(Signal::Next(v)))
            }
            Poll::Ready(Some(Signal::Error(e))) => {
                if !*this.terminated {
                    *this.terminated = true;
                    tracing::debug!(category = *this.category, error = %e, "onError");
                }
                Poll::Ready(Some(Signal::Error(e)))
            }
            Poll::Ready(None) => {
                if !*this.terminated {
                    *this.terminated = true;
                    tracing::debug!(category = *this.category, "onComplete");
                }
                Poll::Ready(None)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Extension trait providing the `log` operator for signal streams.
pub trait LogSignalsExt<T>: Stream<Item = Signal<T>> + Sized {
    /// Logs each signal and the terminal event under `category`.
    fn log(self, category: &'static str) -> LogSignals<Self> {
        LogSignals {
            stream: self,
            category,
            terminated: false,
        }
    }
}

impl<S, T> LogSignalsExt<T> for S where S: Stream<Item = Signal<T>> + Sized {}
