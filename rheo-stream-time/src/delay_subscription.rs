// Copyright 2026 The rheo authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Subscription-delay operator - defers the first poll of the source.
//!
//! The source is not polled until the delay has elapsed, so a cold source
//! does not even start producing before then. After the delay the operator
//! is fully transparent.

use futures::Stream;
use pin_project::pin_project;
use rheo_core::Signal;
use rheo_sched::{Timer, TokioTimer};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

/// Stream produced by [`DelaySubscriptionExt::delay_subscription`].
#[pin_project]
pub struct DelaySubscription<S, C: Timer> {
    #[pin]
    stream: S,
    #[pin]
    sleep: Option<C::Sleep>,
}

impl<S, T, C> Stream for DelaySubscription<S, C>
where
    S: Stream<Item = Signal<T>>,
    C: Timer,
{
    type Item = Signal<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if let Some(sleep) = this.sleep.as_mut().as_pin_mut() {
            match sleep.poll(cx) {
                Poll::Ready(()) => this.sleep.set(None),
                Poll::Pending => return Poll::Pending,
            }
        }

        this.stream.poll_next(cx)
    }
}

/// Extension trait providing the `delay_subscription` operator for signal
/// streams.
pub trait DelaySubscriptionExt<T>: Stream<Item = Signal<T>> + Sized {
    /// Waits out `duration` before the source is polled for the first time.
    fn delay_subscription(self, duration: Duration) -> DelaySubscription<Self, TokioTimer> {
        self.delay_subscription_with_timer(duration, TokioTimer)
    }

    /// Same as [`delay_subscription`](Self::delay_subscription) with an
    /// explicit clock.
    fn delay_subscription_with_timer<C: Timer>(
        self,
        duration: Duration,
        timer: C,
    ) -> DelaySubscription<Self, C> {
        DelaySubscription {
            stream: self,
            sleep: Some(timer.sleep_future(duration)),
        }
    }
}

impl<S, T> DelaySubscriptionExt<T> for S where S: Stream<Item = Signal<T>> + Sized {}
