// Copyright 2026 The rheo authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Element-delay operator - holds each value back by a fixed duration.
//!
//! Each value waits out its own delay before being emitted, so a source
//! producing immediately yields one value per `duration` tick. Errors and
//! completion carry no delay of their own; they surface as soon as the
//! operator reaches them.

use futures::Stream;
use pin_project::pin_project;
use rheo_core::Signal;
use rheo_sched::{Timer, TokioTimer};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

/// Stream produced by [`DelayElementsExt::delay_elements`].
#[pin_project]
pub struct DelayElements<S, T, C: Timer> {
    #[pin]
    stream: S,
    timer: C,
    duration: Duration,
    #[pin]
    sleep: Option<C::Sleep>,
    pending: Option<T>,
    done: bool,
}

impl<S, T, C> Stream for DelayElements<S, T, C>
where
    S: Stream<Item = Signal<T>>,
    C: Timer,
{
    type Item = Signal<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if *this.done {
            return Poll::Ready(None);
        }

        // A value already waiting on its timer takes priority
        if this.pending.is_some() {
            match this.sleep.as_mut().as_pin_mut() {
                Some(sleep) => match sleep.poll(cx) {
                    Poll::Ready(()) => {
                        this.sleep.set(None);
                        let value = this.pending.take();
                        return Poll::Ready(value.map(Signal::Next));
                    }
                    Poll::Pending => return Poll::Pending,
                },
                None => unreachable!("pending value always has an armed timer"),
            }
        }

        match this.stream.poll_next(cx) {
            Poll::Ready(Some(Signal::Next(v))) => {
                *this.pending = Some(v);
                let sleep = this.timer.sleep_future(*this.duration);
                this.sleep.set(Some(sleep));
                // Poll the fresh timer so its waker is registered
                match this.sleep.as_mut().as_pin_mut() {
                    Some(sleep) => match sleep.poll(cx) {
                        Poll::Ready(()) => {
                            this.sleep.set(None);
                            let value = this.pending.take();
                            Poll::Ready(value.map(Signal::Next))
                        }
                        Poll::Pending => Poll::Pending,
                    },
                    None => unreachable!("timer armed just above"),
                }
            }
            Poll::Ready(Some(Signal::Error(e))) => {
                *this.done = true;
                *this.pending = None;
                Poll::Ready(Some(Signal::Error(e)))
            }
            Poll::Ready(None) => {
                *this.done = true;
                Poll::Ready(None)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Extension trait providing the `delay_elements` operator for signal streams.
pub trait DelayElementsExt<T>: Stream<Item = Signal<T>> + Sized {
    /// Delays every value by `duration`; errors and completion pass through
    /// undelayed.
    fn delay_elements(self, duration: Duration) -> DelayElements<Self, T, TokioTimer> {
        self.delay_elements_with_timer(duration, TokioTimer)
    }

    /// Same as [`delay_elements`](Self::delay_elements) with an explicit
    /// clock.
    fn delay_elements_with_timer<C: Timer>(
        self,
        duration: Duration,
        timer: C,
    ) -> DelayElements<Self, T, C> {
        DelayElements {
            stream: self,
            timer,
            duration,
            sleep: None,
            pending: None,
            done: false,
        }
    }
}

impl<S, T> DelayElementsExt<T> for S where S: Stream<Item = Signal<T>> + Sized {}
