// Copyright 2026 The rheo authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error-recovery operators - the only places errors are intercepted.
//!
//! `on_error_resume` switches to an alternate sequence chosen dynamically
//! from the error; `on_error_return` is the fixed-value special case. Any
//! error not intercepted here terminates the sequence for all subscribers -
//! there is no silent suppression elsewhere.
//!
//! The substitute sequence is only built when an error actually occurs, and
//! its own signals pass through unchanged - including its errors: a
//! fallback that fails is not resumed again by the same operator.

use crate::BoxSignalStream;
use futures::future::ready;
use futures::stream::once;
use futures::Stream;
use pin_project::pin_project;
use rheo_core::{RheoError, Signal};
use std::pin::Pin;
use std::task::{Context, Poll};

/// Stream produced by [`OnErrorExt::on_error_resume`].
#[pin_project]
pub struct OnErrorResume<S, F, T> {
    #[pin]
    stream: S,
    fallback_fn: F,
    fallback: Option<BoxSignalStream<T>>,
    done: bool,
}

impl<S, F, T> Stream for OnErrorResume<S, F, T>
where
    S: Stream<Item = Signal<T>>,
    F: FnMut(&RheoError) -> BoxSignalStream<T>,
{
    type Item = Signal<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();

        if *this.done {
            return Poll::Ready(None);
        }

        // Once switched, the original source is never polled again
        if let Some(fallback) = this.fallback.as_mut() {
            return match fallback.as_mut().poll_next(cx) {
                Poll::Ready(None) => {
                    *this.done = true;
                    Poll::Ready(None)
                }
                other => other,
            };
        }

        match this.stream.poll_next(cx) {
            Poll::Ready(Some(Signal::Error(e))) => {
                let mut fallback = (this.fallback_fn)(&e);
                let polled = fallback.as_mut().poll_next(cx);
                *this.fallback = Some(fallback);
                match polled {
                    Poll::Ready(None) => {
                        *this.done = true;
                        Poll::Ready(None)
                    }
                    other => other,
                }
            }
            Poll::Ready(Some(next)) => Poll::Ready(Some(next)),
            Poll::Ready(None) => {
                *this.done = true;
                Poll::Ready(None)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Extension trait providing the fallback operators for signal streams.
pub trait OnErrorExt<T>: Stream<Item = Signal<T>> + Sized {
    /// On error, switches to the sequence produced by `fallback_fn`.
    ///
    /// The handler receives the error by reference; dispatch on
    /// [`ErrorKind`](rheo_core::ErrorKind) to choose different substitutes
    /// per kind.
    fn on_error_resume<F>(self, fallback_fn: F) -> OnErrorResume<Self, F, T>
    where
        F: FnMut(&RheoError) -> BoxSignalStream<T>,
    {
        OnErrorResume {
            stream: self,
            fallback_fn,
            fallback: None,
            done: false,
        }
    }

    /// On error, emits `value` once and completes.
    fn on_error_return(
        self,
        value: T,
    ) -> OnErrorResume<Self, impl FnMut(&RheoError) -> BoxSignalStream<T>, T>
    where
        T: Clone + Send + 'static,
    {
        self.on_error_resume(move |_| {
            Box::pin(once(ready(Signal::Next(value.clone())))) as BoxSignalStream<T>
        })
    }
}

impl<S, T> OnErrorExt<T> for S where S: Stream<Item = Signal<T>> + Sized {}
