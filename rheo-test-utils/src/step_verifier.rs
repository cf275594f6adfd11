// Copyright 2026 The rheo authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Step-by-step assertion over a publisher's signal sequence.

use rheo::{ErrorKind, Flux, RheoError, Subscription};
use std::fmt::Debug;
use std::time::Duration;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

// Upper bound on every await; under a paused clock the runtime
// auto-advances to it, so a wedged stream fails in wall-clock milliseconds.
const STEP_WAIT: Duration = Duration::from_secs(5);

/// One observable event of a subscription, with completion made explicit.
#[derive(Debug, Clone)]
pub enum StepEvent<T> {
    Next(T),
    Error(RheoError),
    Complete,
}

/// Subscribes to a [`Flux`] and asserts its signal sequence step by step.
///
/// All expectation methods panic with a descriptive message on mismatch,
/// which is what a failing test should do.
pub struct StepVerifier<T> {
    events: UnboundedReceiver<StepEvent<T>>,
    subscription: Subscription,
}

impl<T> StepVerifier<T>
where
    T: Debug + PartialEq + Send + 'static,
{
    /// Subscribes with unbounded demand.
    pub fn create(flux: &Flux<T>) -> Self {
        Self::attach(flux, None)
    }

    /// Subscribes with an initial demand of `demand` values; use
    /// [`then_request`](Self::then_request) to release more.
    pub fn with_demand(flux: &Flux<T>, demand: usize) -> Self {
        Self::attach(flux, Some(demand))
    }

    fn attach(flux: &Flux<T>, demand: Option<usize>) -> Self {
        let (tx, events) = unbounded_channel();
        let next_tx = tx.clone();
        let error_tx = tx.clone();
        let on_next = move |v| {
            let _ = next_tx.send(StepEvent::Next(v));
        };
        let on_error = move |e| {
            let _ = error_tx.send(StepEvent::Error(e));
        };
        let on_complete = move || {
            let _ = tx.send(StepEvent::Complete);
        };
        let subscription = match demand {
            None => flux.subscribe(on_next, on_error, on_complete),
            Some(n) => flux.subscribe_with_demand(n, on_next, on_error, on_complete),
        };
        Self {
            events,
            subscription,
        }
    }

    /// The underlying subscription handle, for state and cancellation
    /// assertions.
    pub fn subscription(&self) -> &Subscription {
        &self.subscription
    }

    async fn next_event(&mut self) -> StepEvent<T> {
        match tokio::time::timeout(STEP_WAIT, self.events.recv()).await {
            Ok(Some(event)) => event,
            Ok(None) => panic!("subscription dropped without a terminal event"),
            Err(_) => panic!("no event within {STEP_WAIT:?}"),
        }
    }

    /// Asserts that the next event is `Next(expected)`.
    pub async fn expect_next(&mut self, expected: T) {
        match self.next_event().await {
            StepEvent::Next(v) if v == expected => {}
            other => panic!("expected Next({expected:?}), got {other:?}"),
        }
    }

    /// Asserts that the next `n` events are all values, without inspecting
    /// them.
    pub async fn expect_next_count(&mut self, n: usize) {
        for i in 0..n {
            match self.next_event().await {
                StepEvent::Next(_) => {}
                other => panic!("expected {n} values, got {other:?} after {i}"),
            }
        }
    }

    /// Adds `n` values of demand.
    pub fn then_request(&self, n: usize) {
        self.subscription.request(n);
    }

    /// Lets `duration` elapse before the next expectation.
    pub async fn then_await(&mut self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    /// Asserts that nothing is emitted for `duration`.
    pub async fn expect_no_event(&mut self, duration: Duration) {
        tokio::select! {
            event = self.events.recv() => {
                // A closed channel (None) means no event can ever arrive,
                // which satisfies the assertion
                if let Some(event) = event {
                    panic!("expected no event for {duration:?}, got {event:?}");
                }
            }
            () = tokio::time::sleep(duration) => {}
        }
    }

    /// Asserts that the next event is an error of `kind` and returns it.
    pub async fn expect_error_kind(&mut self, kind: ErrorKind) -> RheoError {
        match self.next_event().await {
            StepEvent::Error(e) if e.kind() == kind => e,
            other => panic!("expected {kind:?} error, got {other:?}"),
        }
    }

    /// Asserts that the sequence completes with no further values.
    pub async fn verify_complete(mut self) {
        match self.next_event().await {
            StepEvent::Complete => {}
            other => panic!("expected completion, got {other:?}"),
        }
    }

    /// Asserts that the sequence terminates with an error and returns it.
    pub async fn verify_error(mut self) -> RheoError {
        match self.next_event().await {
            StepEvent::Error(e) => e,
            other => panic!("expected an error, got {other:?}"),
        }
    }
}
