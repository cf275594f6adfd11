// Copyright 2026 The rheo authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Subscription handle and the producer loop behind `subscribe`.
//!
//! Demand is a plain counter backed by a semaphore: the loop takes one
//! permit per delivered value, and `request(n)` adds permits. Unbounded
//! subscriptions skip the semaphore entirely. The loop peeks one signal
//! ahead of demand, so completion and errors reach the subscriber without
//! outstanding demand. Cancellation propagates by dropping the source
//! stream; a signal already being delivered is not retracted.

use crate::flux::Flux;
use futures::StreamExt;
use rheo_core::{CancellationToken, RheoError, Signal};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use tokio::sync::Semaphore;

enum Peeked {
    Value,
    Error,
    End,
}

const UNSUBSCRIBED: u8 = 0;
const ACTIVE: u8 = 1;
const COMPLETED: u8 = 2;
const ERRORED: u8 = 3;
const CANCELLED: u8 = 4;

/// Lifecycle of a subscription.
///
/// `Unsubscribed → Active → { Completed | Errored | Cancelled }`. The
/// terminal states absorb further `request` and `cancel` calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionState {
    Unsubscribed,
    Active,
    Completed,
    Errored,
    Cancelled,
}

/// Handle to one running subscription.
pub struct Subscription {
    demand: Arc<Semaphore>,
    unbounded: bool,
    token: CancellationToken,
    state: Arc<AtomicU8>,
}

impl Subscription {
    /// Adds `n` values of demand. A no-op on unbounded or terminated
    /// subscriptions.
    pub fn request(&self, n: usize) {
        if self.unbounded {
            return;
        }
        match self.state.load(Ordering::SeqCst) {
            UNSUBSCRIBED | ACTIVE => self.demand.add_permits(n),
            _ => {}
        }
    }

    /// Stops the subscription; the source stream is dropped and no further
    /// signals are delivered. A no-op once terminated.
    pub fn cancel(&self) {
        match self.state.load(Ordering::SeqCst) {
            UNSUBSCRIBED | ACTIVE => self.token.cancel(),
            _ => {}
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> SubscriptionState {
        match self.state.load(Ordering::SeqCst) {
            UNSUBSCRIBED => SubscriptionState::Unsubscribed,
            ACTIVE => SubscriptionState::Active,
            COMPLETED => SubscriptionState::Completed,
            ERRORED => SubscriptionState::Errored,
            _ => SubscriptionState::Cancelled,
        }
    }
}

// Spawns the producer loop for one subscription. Assembly runs inside the
// spawned task, so a subscribe_on scheduler hosts subscription-time work
// too, not just production.
pub(crate) fn drive<T, N, E, C>(
    flux: &Flux<T>,
    initial_demand: Option<usize>,
    mut on_next: N,
    on_error: E,
    on_complete: C,
) -> Subscription
where
    T: Send + 'static,
    N: FnMut(T) + Send + 'static,
    E: FnOnce(RheoError) + Send + 'static,
    C: FnOnce() + Send + 'static,
{
    let unbounded = initial_demand.is_none();
    let demand = Arc::new(Semaphore::new(initial_demand.unwrap_or(0)));
    let token = CancellationToken::new();
    let state = Arc::new(AtomicU8::new(UNSUBSCRIBED));

    let source = Arc::clone(&flux.source);
    let loop_demand = Arc::clone(&demand);
    let loop_token = token.clone();
    let loop_state = Arc::clone(&state);

    let producer = async move {
        let mut stream = (source)().peekable();
        loop_state.store(ACTIVE, Ordering::SeqCst);
        loop {
            // Peek first so terminal signals come through without demand;
            // only value delivery is demand-gated
            let peeked = tokio::select! {
                biased;
                () = loop_token.cancelled() => {
                    loop_state.store(CANCELLED, Ordering::SeqCst);
                    return;
                }
                signal = std::pin::Pin::new(&mut stream).peek() => match signal {
                    None => Peeked::End,
                    Some(Signal::Error(_)) => Peeked::Error,
                    Some(Signal::Next(_)) => Peeked::Value,
                },
            };
            match peeked {
                Peeked::End => {
                    loop_state.store(COMPLETED, Ordering::SeqCst);
                    on_complete();
                    return;
                }
                Peeked::Error => {
                    if let Some(Signal::Error(e)) = stream.next().await {
                        loop_state.store(ERRORED, Ordering::SeqCst);
                        tracing::debug!(error = %e, "subscription errored");
                        on_error(e);
                    }
                    return;
                }
                Peeked::Value => {
                    if !unbounded {
                        tokio::select! {
                            biased;
                            () = loop_token.cancelled() => {
                                loop_state.store(CANCELLED, Ordering::SeqCst);
                                return;
                            }
                            permit = loop_demand.acquire() => match permit {
                                Ok(permit) => permit.forget(),
                                // The semaphore is never closed while the loop runs
                                Err(_) => return,
                            },
                        }
                    }
                    // Resolves immediately, the value was already peeked
                    if let Some(Signal::Next(v)) = stream.next().await {
                        on_next(v);
                    }
                }
            }
        }
    };

    match &flux.subscribe_on {
        Some(scheduler) => {
            scheduler.spawn(producer);
        }
        None => {
            tokio::spawn(producer);
        }
    }

    Subscription {
        demand,
        unbounded,
        token,
        state,
    }
}
