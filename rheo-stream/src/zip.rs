// Copyright 2026 The rheo authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Zip operator - positional pairing across two sources.
//!
//! Elements are paired by index: the nth output combines the nth element of
//! each side. The result completes as soon as the shorter source completes;
//! an unpaired element buffered from the longer side is discarded. An error
//! on either side terminates the pair stream immediately.

use futures::Stream;
use pin_project::pin_project;
use rheo_core::Signal;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Stream produced by [`ZipExt::zip_with`].
#[pin_project]
pub struct ZipWith<S1, S2, T1, T2, F> {
    #[pin]
    left: S1,
    #[pin]
    right: S2,
    pending_left: Option<T1>,
    pending_right: Option<T2>,
    combiner: F,
    done: bool,
}

impl<S1, S2, T1, T2, U, F> Stream for ZipWith<S1, S2, T1, T2, F>
where
    S1: Stream<Item = Signal<T1>>,
    S2: Stream<Item = Signal<T2>>,
    F: FnMut(T1, T2) -> U,
{
    type Item = Signal<U>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();

        if *this.done {
            return Poll::Ready(None);
        }

        if this.pending_left.is_none() {
            match this.left.poll_next(cx) {
                Poll::Ready(Some(Signal::Next(v))) => *this.pending_left = Some(v),
                Poll::Ready(Some(Signal::Error(e))) => {
                    *this.done = true;
                    return Poll::Ready(Some(Signal::Error(e)));
                }
                // Shortest source decides completion
                Poll::Ready(None) => {
                    *this.done = true;
                    return Poll::Ready(None);
                }
                Poll::Pending => {}
            }
        }

        if this.pending_right.is_none() {
            match this.right.poll_next(cx) {
                Poll::Ready(Some(Signal::Next(v))) => *this.pending_right = Some(v),
                Poll::Ready(Some(Signal::Error(e))) => {
                    *this.done = true;
                    return Poll::Ready(Some(Signal::Error(e)));
                }
                Poll::Ready(None) => {
                    *this.done = true;
                    return Poll::Ready(None);
                }
                Poll::Pending => {}
            }
        }

        if this.pending_left.is_some() && this.pending_right.is_some() {
            let l = this.pending_left.take().expect("left buffered");
            let r = this.pending_right.take().expect("right buffered");
            return Poll::Ready(Some(Signal::Next((this.combiner)(l, r))));
        }

        Poll::Pending
    }
}

/// Extension trait providing the `zip_with` operator for signal streams.
pub trait ZipExt<T>: Stream<Item = Signal<T>> + Sized {
    /// Pairs elements positionally with `other`, combining each pair with
    /// `combiner`. Terminates at the shortest source's completion.
    fn zip_with<S2, T2, U, F>(self, other: S2, combiner: F) -> ZipWith<Self, S2, T, T2, F>
    where
        S2: Stream<Item = Signal<T2>>,
        F: FnMut(T, T2) -> U,
    {
        ZipWith {
            left: self,
            right: other,
            pending_left: None,
            pending_right: None,
            combiner,
            done: false,
        }
    }
}

impl<S, T> ZipExt<T> for S where S: Stream<Item = Signal<T>> + Sized {}
