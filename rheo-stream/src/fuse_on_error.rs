// Copyright 2026 The rheo authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fuse-on-error adapter enforcing the terminal-signal invariant.
//!
//! A sequence delivers no further signals after its terminal `Error`. Most
//! operators preserve this property naturally because well-formed upstreams
//! already end after an error; this adapter enforces it at the seams where
//! an upstream might keep producing (merged sides, concatenated tails,
//! interleaved inner sequences).

use futures::Stream;
use pin_project::pin_project;
use rheo_core::Signal;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Stream adapter that ends the stream right after the first `Error`.
#[pin_project]
pub struct FuseOnError<S> {
    #[pin]
    stream: S,
    done: bool,
}

impl<S, T> Stream for FuseOnError<S>
where
    S: Stream<Item = Signal<T>>,
{
    type Item = Signal<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();

        if *this.done {
            return Poll::Ready(None);
        }

        match this.stream.poll_next(cx) {
            Poll::Ready(Some(Signal::Error(e))) => {
                *this.done = true;
                Poll::Ready(Some(Signal::Error(e)))
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

/// Extension trait providing the `fuse_on_error` adapter.
pub trait FuseOnErrorExt<T>: Stream<Item = Signal<T>> + Sized {
    /// Ends the stream immediately after the first `Error` signal.
    ///
    /// The error itself is still delivered; the upstream is simply never
    /// polled again afterwards.
    fn fuse_on_error(self) -> FuseOnError<Self> {
        FuseOnError {
            stream: self,
            done: false,
        }
    }
}

impl<S, T> FuseOnErrorExt<T> for S where S: Stream<Item = Signal<T>> + Sized {}
