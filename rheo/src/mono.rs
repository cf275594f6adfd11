// Copyright 2026 The rheo authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! `Mono<T>` - a cold single-value publisher.
//!
//! A sequence constrained to at most one value before its terminal signal.
//! Internally a thin wrapper over [`Flux`]; the constructors guarantee the
//! at-most-one shape and the operators preserve it, so the wrapper never
//! needs to re-check it at runtime.

use crate::flux::Flux;
use crate::subscription::Subscription;
use rheo_core::{RheoError, Signal};
use rheo_sched::Scheduler;
use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;

/// A cold publisher of at most one value.
pub struct Mono<T> {
    inner: Flux<T>,
}

impl<T> Clone for Mono<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Send + 'static> Mono<T> {
    pub(crate) fn from_flux(inner: Flux<T>) -> Self {
        Self { inner }
    }

    /// Captures `value` once at assembly and replays it to every
    /// subscriber.
    pub fn just(value: T) -> Self
    where
        T: Clone + Sync,
    {
        Self::from_flux(Flux::just([value]))
    }

    /// Runs `supplier` once per subscription, so subscribers may observe
    /// different values.
    pub fn from_supplier<F>(supplier: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self::from_flux(Flux::from_factory(move || {
            Box::pin(futures::stream::once(futures::future::ready(
                Signal::Next(supplier()),
            )))
        }))
    }

    /// Completes immediately without a value.
    pub fn empty() -> Self {
        Self::from_flux(Flux::empty())
    }

    /// Errors immediately with `error`.
    pub fn error(error: RheoError) -> Self {
        Self::from_flux(Flux::error(error))
    }

    /// Defers assembly itself: `f` runs once per subscription.
    pub fn defer<F>(f: F) -> Self
    where
        F: Fn() -> Mono<T> + Send + Sync + 'static,
    {
        Self::from_flux(Flux::from_factory(move || f().inner.assemble()))
    }

    /// Transforms the value with `f`.
    pub fn map<U, F>(self, f: F) -> Mono<U>
    where
        U: Send + 'static,
        F: Fn(T) -> U + Clone + Send + Sync + 'static,
    {
        Mono::from_flux(self.inner.map(f))
    }

    /// Transforms the value with a fallible `f`; an `Err` becomes the
    /// terminal error signal.
    pub fn try_map<U, F>(self, f: F) -> Mono<U>
    where
        U: Send + 'static,
        F: Fn(T) -> rheo_core::Result<U> + Clone + Send + Sync + 'static,
    {
        Mono::from_flux(self.inner.try_map(f))
    }

    /// Maps the value to another single-value publisher and flattens.
    pub fn flat_map<U, F>(self, f: F) -> Mono<U>
    where
        U: Send + 'static,
        F: Fn(T) -> Mono<U> + Clone + Send + Sync + 'static,
    {
        Mono::from_flux(self.inner.concat_map(move |v| f(v).inner))
    }

    /// Combines this value with `other`'s value through `combiner`. Empty
    /// if either side is empty.
    pub fn zip_with<T2, U, F>(self, other: Mono<T2>, combiner: F) -> Mono<U>
    where
        T2: Send + 'static,
        U: Send + 'static,
        F: Fn(T, T2) -> U + Clone + Send + Sync + 'static,
    {
        Mono::from_flux(self.inner.zip_with(other.inner, combiner))
    }

    /// Delays the value by `duration`.
    pub fn delay_element(self, duration: Duration) -> Mono<T> {
        Mono::from_flux(self.inner.delay_elements(duration))
    }

    /// Holds off the first poll of the source by `duration`.
    pub fn delay_subscription(self, duration: Duration) -> Mono<T> {
        Mono::from_flux(self.inner.delay_subscription(duration))
    }

    /// Errors with a `Timeout` when the value does not arrive within
    /// `duration`.
    pub fn timeout(self, duration: Duration) -> Mono<T> {
        Mono::from_flux(self.inner.timeout(duration))
    }

    /// On error, emits `value` and completes.
    pub fn on_error_return(self, value: T) -> Mono<T>
    where
        T: Clone + Sync,
    {
        Mono::from_flux(self.inner.on_error_return(value))
    }

    /// On error, switches to the publisher produced by `fallback_fn`.
    pub fn on_error_resume<F>(self, fallback_fn: F) -> Mono<T>
    where
        F: Fn(&RheoError) -> Mono<T> + Clone + Send + Sync + 'static,
    {
        Mono::from_flux(self.inner.on_error_resume(move |e| fallback_fn(e).inner))
    }

    /// Logs every signal and the terminal event under `category`.
    pub fn log(self, category: &'static str) -> Mono<T>
    where
        T: Debug,
    {
        Mono::from_flux(self.inner.log(category))
    }

    /// Pins the execution context for subscription-time work. Only the
    /// first directive in a chain takes effect.
    pub fn subscribe_on(self, scheduler: Scheduler) -> Mono<T> {
        Mono::from_flux(self.inner.subscribe_on(scheduler))
    }

    /// Re-channels the sequence through a task on `scheduler`.
    pub fn publish_on(self, scheduler: Scheduler) -> Mono<T> {
        Mono::from_flux(self.inner.publish_on(scheduler))
    }

    /// Widens to the multi-value container without re-subscribing.
    pub fn as_flux(&self) -> Flux<T> {
        Flux {
            source: Arc::clone(&self.inner.source),
            subscribe_on: self.inner.subscribe_on.clone(),
        }
    }

    /// Runs the assembly chain and delivers signals to the callbacks.
    pub fn subscribe<N, E, C>(&self, on_next: N, on_error: E, on_complete: C) -> Subscription
    where
        N: FnMut(T) + Send + 'static,
        E: FnOnce(RheoError) + Send + 'static,
        C: FnOnce() + Send + 'static,
    {
        self.inner.subscribe(on_next, on_error, on_complete)
    }
}
