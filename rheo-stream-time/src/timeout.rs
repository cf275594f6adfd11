// Copyright 2026 The rheo authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Timeout operator - errors when the source stays silent too long.
//!
//! The timer covers the gap between consecutive signals and is rearmed on
//! every signal, including the first. When it fires the operator emits a
//! [`RheoError::Timeout`] and terminates; the source is not polled again.

use futures::Stream;
use pin_project::pin_project;
use rheo_core::{RheoError, Signal};
use rheo_sched::{Timer, TokioTimer};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

/// Stream produced by [`TimeoutExt::timeout_signals`].
#[pin_project]
pub struct Timeout<S, C: Timer> {
    #[pin]
    stream: S,
    timer: C,
    duration: Duration,
    #[pin]
    sleep: Option<C::Sleep>,
    done: bool,
}

impl<S, T, C> Stream for Timeout<S, C>
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

        if this.sleep.is_none() {
            let sleep = this.timer.sleep_future(*this.duration);
            this.sleep.set(Some(sleep));
        }

        match this.stream.poll_next(cx) {
            Poll::Ready(Some(signal)) => {
                // Rearm for the gap to the next signal
                let sleep = this.timer.sleep_future(*this.duration);
                this.sleep.set(Some(sleep));
                if signal.is_error() {
                    *this.done = true;
                }
                return Poll::Ready(Some(signal));
            }
            Poll::Ready(None) => {
                *this.done = true;
                return Poll::Ready(None);
            }
            Poll::Pending => {}
        }

        match this.sleep.as_pin_mut() {
            Some(sleep) => match sleep.poll(cx) {
                Poll::Ready(()) => {
                    *this.done = true;
                    tracing::debug!(duration = ?this.duration, "timeout elapsed without a signal");
                    Poll::Ready(Some(Signal::Error(RheoError::timeout(format!(
                        "no signal within {:?}",
                        this.duration
                    )))))
                }
                Poll::Pending => Poll::Pending,
            },
            None => unreachable!("timeout timer is armed before the source is polled"),
        }
    }
}

/// Extension trait providing the `timeout_signals` operator for signal streams.
pub trait TimeoutExt<T>: Stream<Item = Signal<T>> + Sized {
    /// Errors with [`RheoError::Timeout`] if no signal arrives within
    /// `duration` of the previous one (or of subscription, for the first).
    fn timeout_signals(self, duration: Duration) -> Timeout<Self, TokioTimer> {
        self.timeout_signals_with_timer(duration, TokioTimer)
    }

    /// Same as [`timeout_signals`](Self::timeout_signals) with an explicit
    /// clock.
    fn timeout_signals_with_timer<C: Timer>(
        self,
        duration: Duration,
        timer: C,
    ) -> Timeout<Self, C> {
        Timeout {
            stream: self,
            timer,
            duration,
            sleep: None,
            done: false,
        }
    }
}

impl<S, T> TimeoutExt<T> for S where S: Stream<Item = Signal<T>> + Sized {}
