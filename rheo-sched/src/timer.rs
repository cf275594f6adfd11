// Copyright 2026 The rheo authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt::Debug;
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;

/// Clock abstraction for the timing operators.
///
/// Timing operators never call `tokio::time` directly; they take a `Timer`
/// so the clock is an explicit parameter. Under a paused Tokio runtime the
/// default [`TokioTimer`] observes virtual time, which is how the timing
/// tests avoid real sleeps.
pub trait Timer: Clone + Send + Sync + Debug + 'static {
    /// Future resolving after the requested duration.
    type Sleep: Future<Output = ()> + Send;

    /// A future that completes once `duration` has elapsed.
    fn sleep_future(&self, duration: Duration) -> Self::Sleep;

    /// The current instant on this timer's clock.
    fn now(&self) -> Instant;
}

/// [`Timer`] backed by the Tokio time driver.
#[derive(Clone, Debug, Default)]
pub struct TokioTimer;

impl Timer for TokioTimer {
    type Sleep = tokio::time::Sleep;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        tokio::time::sleep(duration)
    }

    fn now(&self) -> Instant {
        Instant::now()
    }
}
