// Copyright 2026 The rheo authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Combine-latest operator - recombines the latest value of each source.
//!
//! Each time either source emits, a combination of the latest values of
//! both sources is emitted - but only once every source has emitted at
//! least once. The combined sequence completes when both sources have
//! completed; it also completes when one source completes without ever
//! emitting, since no combination can ever be produced from that side.
//!
//! Emission order follows arrival order. Compositions that need a
//! deterministic interleaving should drive their sources from a virtual
//! clock (see the timing tests), never from wall-clock races.

use futures::Stream;
use pin_project::pin_project;
use rheo_core::Signal;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Stream produced by [`CombineLatestExt::combine_latest`].
#[pin_project]
pub struct CombineLatest<S1, S2, T1, T2, F> {
    #[pin]
    left: S1,
    #[pin]
    right: S2,
    latest_left: Option<T1>,
    latest_right: Option<T2>,
    left_done: bool,
    right_done: bool,
    done: bool,
    combiner: F,
}

impl<S1, S2, T1, T2, U, F> Stream for CombineLatest<S1, S2, T1, T2, F>
where
    S1: Stream<Item = Signal<T1>>,
    S2: Stream<Item = Signal<T2>>,
    F: FnMut(&T1, &T2) -> U,
{
    type Item = Signal<U>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if *this.done {
            return Poll::Ready(None);
        }

        // Drain both sides until neither can make progress, so a side that
        // produced a value without yielding an emission still gets re-polled
        // before this stream parks.
        loop {
            let mut progressed = false;

            if !*this.left_done {
                match this.left.as_mut().poll_next(cx) {
                    Poll::Ready(Some(Signal::Next(v))) => {
                        progressed = true;
                        *this.latest_left = Some(v);
                        if let (Some(l), Some(r)) =
                            (this.latest_left.as_ref(), this.latest_right.as_ref())
                        {
                            return Poll::Ready(Some(Signal::Next((this.combiner)(l, r))));
                        }
                    }
                    Poll::Ready(Some(Signal::Error(e))) => {
                        *this.done = true;
                        return Poll::Ready(Some(Signal::Error(e)));
                    }
                    Poll::Ready(None) => {
                        progressed = true;
                        *this.left_done = true;
                        // A side that never emitted can never contribute
                        if this.latest_left.is_none() {
                            *this.done = true;
                            return Poll::Ready(None);
                        }
                    }
                    Poll::Pending => {}
                }
            }

            if !*this.right_done {
                match this.right.as_mut().poll_next(cx) {
                    Poll::Ready(Some(Signal::Next(v))) => {
                        progressed = true;
                        *this.latest_right = Some(v);
                        if let (Some(l), Some(r)) =
                            (this.latest_left.as_ref(), this.latest_right.as_ref())
                        {
                            return Poll::Ready(Some(Signal::Next((this.combiner)(l, r))));
                        }
                    }
                    Poll::Ready(Some(Signal::Error(e))) => {
                        *this.done = true;
                        return Poll::Ready(Some(Signal::Error(e)));
                    }
                    Poll::Ready(None) => {
                        progressed = true;
                        *this.right_done = true;
                        if this.latest_right.is_none() {
                            *this.done = true;
                            return Poll::Ready(None);
                        }
                    }
                    Poll::Pending => {}
                }
            }

            if *this.left_done && *this.right_done {
                *this.done = true;
                return Poll::Ready(None);
            }

            if !progressed {
                return Poll::Pending;
            }
        }
    }
}

/// Extension trait providing the `combine_latest` operator for signal streams.
pub trait CombineLatestExt<T>: Stream<Item = Signal<T>> + Sized {
    /// Emits a recomputed combination each time either source emits, once
    /// both sources have emitted at least once.
    fn combine_latest<S2, T2, U, F>(
        self,
        other: S2,
        combiner: F,
    ) -> CombineLatest<Self, S2, T, T2, F>
    where
        S2: Stream<Item = Signal<T2>>,
        F: FnMut(&T, &T2) -> U,
    {
        CombineLatest {
            left: self,
            right: other,
            latest_left: None,
            latest_right: None,
            left_done: false,
            right_done: false,
            done: false,
            combiner,
        }
    }
}

impl<S, T> CombineLatestExt<T> for S where S: Stream<Item = Signal<T>> + Sized {}
