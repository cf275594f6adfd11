// Copyright 2026 The rheo authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! `Flux<T>` - a cold multi-value publisher.
//!
//! A `Flux` is an assembly recipe, not a running sequence: it wraps a
//! factory producing a fresh signal stream per subscription, so every
//! subscriber observes the sequence from the start and subscriptions never
//! share state. Operators wrap the factory; nothing executes until
//! [`Flux::subscribe`] runs the chain.
//!
//! The only piece of assembly state besides the factory is the
//! `subscribe_on` slot: the first scheduler pinned anywhere in the chain
//! wins, later directives are no-ops.

use crate::mono::Mono;
use crate::subscription::{drive, Subscription};
use rheo_core::{RheoError, Signal};
use rheo_sched::Scheduler;
use rheo_stream::{
    BoxSignalStream, BufferCountExt, CombineLatestExt, ConcatWithExt, DistinctExt,
    FilterValuesExt, FlatMapValuesExt, GroupByCollectExt, LogSignalsExt, MapValuesExt,
    MergeWithExt, OnErrorExt, SkipItemsExt, StartWithExt, TakeItemsExt, TakeWhileValuesExt,
    ZipExt,
};
use rheo_stream_time::{DelayElementsExt, DelaySubscriptionExt, TimeoutExt};
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

pub(crate) type SourceFactory<T> = Arc<dyn Fn() -> BoxSignalStream<T> + Send + Sync>;

/// A cold publisher of zero or more values terminated by completion or an
/// error.
pub struct Flux<T> {
    pub(crate) source: SourceFactory<T>,
    pub(crate) subscribe_on: Option<Scheduler>,
}

impl<T> Clone for Flux<T> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            subscribe_on: self.subscribe_on.clone(),
        }
    }
}

impl<T: Send + 'static> Flux<T> {
    /// Wraps a per-subscription stream factory.
    pub fn from_factory<F>(factory: F) -> Self
    where
        F: Fn() -> BoxSignalStream<T> + Send + Sync + 'static,
    {
        Self {
            source: Arc::new(factory),
            subscribe_on: None,
        }
    }

    /// Emits the given values in order, replayed identically to every
    /// subscriber.
    pub fn just<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Clone + Sync,
    {
        let values: Vec<T> = values.into_iter().collect();
        Self::from_factory(move || {
            Box::pin(futures::stream::iter(
                values.clone().into_iter().map(Signal::Next),
            ))
        })
    }

    /// Emits the values of `iter`, re-iterated per subscription.
    pub fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T> + Clone + Send + Sync + 'static,
        I::IntoIter: Send + 'static,
    {
        Self::from_factory(move || {
            Box::pin(futures::stream::iter(
                iter.clone().into_iter().map(Signal::Next),
            ))
        })
    }

    /// Completes immediately without emitting.
    pub fn empty() -> Self {
        Self::from_factory(|| Box::pin(futures::stream::empty()))
    }

    /// Errors immediately with `error`.
    pub fn error(error: RheoError) -> Self {
        Self::from_factory(move || {
            Box::pin(futures::stream::once(futures::future::ready(
                Signal::Error(error.clone()),
            )))
        })
    }

    /// Defers assembly itself: `f` runs once per subscription and may build
    /// a different chain each time.
    pub fn defer<F>(f: F) -> Self
    where
        F: Fn() -> Flux<T> + Send + Sync + 'static,
    {
        Self::from_factory(move || f().assemble())
    }

    /// Builds the signal stream for one subscription.
    pub(crate) fn assemble(&self) -> BoxSignalStream<T> {
        (self.source)()
    }

    // Wraps the factory with a per-subscription stream transformation,
    // carrying the subscribe_on slot through unchanged.
    fn lift<U, F>(self, op: F) -> Flux<U>
    where
        U: Send + 'static,
        F: Fn(BoxSignalStream<T>) -> BoxSignalStream<U> + Send + Sync + 'static,
    {
        let source = self.source;
        Flux {
            source: Arc::new(move || op((source)())),
            subscribe_on: self.subscribe_on,
        }
    }

    /// Transforms each value with `f`.
    pub fn map<U, F>(self, f: F) -> Flux<U>
    where
        U: Send + 'static,
        F: Fn(T) -> U + Clone + Send + Sync + 'static,
    {
        self.lift(move |s| Box::pin(s.map_values(f.clone())))
    }

    /// Transforms each value with a fallible `f`; an `Err` becomes the
    /// terminal error signal.
    pub fn try_map<U, F>(self, f: F) -> Flux<U>
    where
        U: Send + 'static,
        F: Fn(T) -> rheo_core::Result<U> + Clone + Send + Sync + 'static,
    {
        self.lift(move |s| Box::pin(s.try_map_values(f.clone())))
    }

    /// Keeps only the values matching `predicate`.
    pub fn filter<P>(self, predicate: P) -> Flux<T>
    where
        P: Fn(&T) -> bool + Clone + Send + Sync + 'static,
    {
        self.lift(move |s| Box::pin(s.filter_values(predicate.clone())))
    }

    /// Maps each value to an inner sequence and interleaves the inner
    /// sequences as they produce.
    pub fn flat_map<U, F>(self, f: F) -> Flux<U>
    where
        U: Send + 'static,
        F: Fn(T) -> Flux<U> + Clone + Send + Sync + 'static,
    {
        self.lift(move |s| {
            let f = f.clone();
            Box::pin(s.flat_map_values(move |v| f(v).assemble()))
        })
    }

    /// Maps each value to an inner sequence, draining each inner sequence
    /// fully before starting the next.
    pub fn concat_map<U, F>(self, f: F) -> Flux<U>
    where
        U: Send + 'static,
        F: Fn(T) -> Flux<U> + Clone + Send + Sync + 'static,
    {
        self.lift(move |s| {
            let f = f.clone();
            Box::pin(s.concat_map_values(move |v| f(v).assemble()))
        })
    }

    /// Collects values into batches of `size`; the final batch may be
    /// smaller.
    pub fn buffer(self, size: usize) -> Flux<Vec<T>> {
        self.lift(move |s| Box::pin(s.buffer_count(size)))
    }

    /// Splits the sequence into consecutive sub-sequences of at most `size`
    /// items, surfaced as inner publishers.
    pub fn window(self, size: usize) -> Flux<Flux<T>>
    where
        T: Clone + Sync,
    {
        self.buffer(size).map(Flux::just)
    }

    /// Drops values already seen earlier in this subscription.
    pub fn distinct(self) -> Flux<T>
    where
        T: Clone + Eq + Hash,
    {
        self.lift(|s| Box::pin(s.distinct()))
    }

    /// Emits at most the first `n` values, then completes without polling
    /// the source further.
    pub fn take(self, n: usize) -> Flux<T> {
        self.lift(move |s| Box::pin(s.take_items(n)))
    }

    /// Discards the first `n` values.
    pub fn skip(self, n: usize) -> Flux<T> {
        self.lift(move |s| Box::pin(s.skip_items(n)))
    }

    /// Emits values while `predicate` holds, completing at the first
    /// failure.
    pub fn take_while<P>(self, predicate: P) -> Flux<T>
    where
        P: Fn(&T) -> bool + Clone + Send + Sync + 'static,
    {
        self.lift(move |s| Box::pin(s.take_while_values(predicate.clone())))
    }

    /// Emits `values` before the sequence's own values.
    pub fn start_with<I>(self, values: I) -> Flux<T>
    where
        I: IntoIterator<Item = T>,
        T: Clone + Sync,
    {
        let values: Vec<T> = values.into_iter().collect();
        self.lift(move |s| Box::pin(s.start_with(values.clone())))
    }

    /// Pairs values positionally with `other`, combining each pair with
    /// `combiner`. Completes with the shorter source.
    pub fn zip_with<T2, U, F>(self, other: Flux<T2>, combiner: F) -> Flux<U>
    where
        T2: Send + 'static,
        U: Send + 'static,
        F: Fn(T, T2) -> U + Clone + Send + Sync + 'static,
    {
        self.lift(move |s| Box::pin(s.zip_with(other.assemble(), combiner.clone())))
    }

    /// Interleaves values from both sequences in arrival order.
    pub fn merge_with(self, other: Flux<T>) -> Flux<T> {
        self.lift(move |s| Box::pin(s.merge_with(other.assemble())))
    }

    /// Emits this sequence fully, then `other`.
    pub fn concat_with(self, other: Flux<T>) -> Flux<T> {
        self.lift(move |s| Box::pin(s.concat_with(other.assemble())))
    }

    /// Recomputes a combination from the latest value of each side whenever
    /// either emits, once both have emitted.
    pub fn combine_latest<T2, U, F>(self, other: Flux<T2>, combiner: F) -> Flux<U>
    where
        T2: Send + 'static,
        U: Send + 'static,
        F: Fn(&T, &T2) -> U + Clone + Send + Sync + 'static,
    {
        self.lift(move |s| Box::pin(s.combine_latest(other.assemble(), combiner.clone())))
    }

    /// Buckets values by `key_fn`, emitting one `(key, values)` pair per
    /// bucket at completion, in first-occurrence key order.
    pub fn group_by<K, F>(self, key_fn: F) -> Flux<(K, Vec<T>)>
    where
        K: PartialEq + Send + 'static,
        F: Fn(&T) -> K + Clone + Send + Sync + 'static,
    {
        self.lift(move |s| Box::pin(s.group_by_collect(key_fn.clone())))
    }

    /// Gathers the whole sequence into a single `Vec`; an empty sequence
    /// yields an empty list.
    pub fn collect_list(self) -> Mono<Vec<T>> {
        Mono::from_flux(self.lift(|mut s| {
            Box::pin(futures::stream::once(async move {
                use futures::StreamExt;
                let mut gathered = Vec::new();
                while let Some(signal) = s.next().await {
                    match signal {
                        Signal::Next(v) => gathered.push(v),
                        Signal::Error(e) => return Signal::Error(e),
                    }
                }
                Signal::Next(gathered)
            }))
        }))
    }

    /// Delays each value by `duration`; errors pass through undelayed.
    pub fn delay_elements(self, duration: Duration) -> Flux<T> {
        self.lift(move |s| Box::pin(s.delay_elements(duration)))
    }

    /// Holds off the first poll of the source by `duration`.
    pub fn delay_subscription(self, duration: Duration) -> Flux<T> {
        self.lift(move |s| Box::pin(s.delay_subscription(duration)))
    }

    /// Errors with a `Timeout` when no signal arrives within `duration` of
    /// the previous one.
    pub fn timeout(self, duration: Duration) -> Flux<T> {
        self.lift(move |s| Box::pin(s.timeout_signals(duration)))
    }

    /// On error, emits `value` once and completes.
    pub fn on_error_return(self, value: T) -> Flux<T>
    where
        T: Clone + Sync,
    {
        self.lift(move |s| Box::pin(s.on_error_return(value.clone())))
    }

    /// On error, switches to the publisher produced by `fallback_fn`.
    pub fn on_error_resume<F>(self, fallback_fn: F) -> Flux<T>
    where
        F: Fn(&RheoError) -> Flux<T> + Clone + Send + Sync + 'static,
    {
        self.lift(move |s| {
            let f = fallback_fn.clone();
            Box::pin(s.on_error_resume(move |e| f(e).assemble()))
        })
    }

    /// Logs every signal and the terminal event under `category`.
    pub fn log(self, category: &'static str) -> Flux<T>
    where
        T: Debug,
    {
        self.lift(move |s| Box::pin(s.log(category)))
    }

    /// Pins the execution context for subscription-time work. Only the
    /// first directive in a chain takes effect.
    pub fn subscribe_on(mut self, scheduler: Scheduler) -> Flux<T> {
        if self.subscribe_on.is_none() {
            self.subscribe_on = Some(scheduler);
        }
        self
    }

    /// Re-channels the sequence through a task on `scheduler`, switching the
    /// producing context for everything downstream.
    pub fn publish_on(self, scheduler: Scheduler) -> Flux<T> {
        self.lift(move |mut upstream| {
            let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
            scheduler.spawn(async move {
                use futures::StreamExt;
                while let Some(signal) = upstream.next().await {
                    if tx.send(signal).is_err() {
                        // Downstream dropped, stop producing
                        break;
                    }
                }
            });
            Box::pin(tokio_stream::wrappers::UnboundedReceiverStream::new(rx))
        })
    }

    /// Runs the assembly chain and delivers signals to the callbacks with
    /// unbounded demand.
    pub fn subscribe<N, E, C>(&self, on_next: N, on_error: E, on_complete: C) -> Subscription
    where
        N: FnMut(T) + Send + 'static,
        E: FnOnce(RheoError) + Send + 'static,
        C: FnOnce() + Send + 'static,
    {
        drive(self, None, on_next, on_error, on_complete)
    }

    /// Same as [`subscribe`](Self::subscribe) with an initial demand of
    /// `demand` values; further values wait for [`Subscription::request`].
    pub fn subscribe_with_demand<N, E, C>(
        &self,
        demand: usize,
        on_next: N,
        on_error: E,
        on_complete: C,
    ) -> Subscription
    where
        N: FnMut(T) + Send + 'static,
        E: FnOnce(RheoError) + Send + 'static,
        C: FnOnce() + Send + 'static,
    {
        drive(self, Some(demand), on_next, on_error, on_complete)
    }
}

impl Flux<i64> {
    /// Emits `count` consecutive integers starting at `start`.
    pub fn range(start: i64, count: usize) -> Flux<i64> {
        Flux::from_factory(move || {
            Box::pin(futures::stream::iter(
                (0..count as i64).map(move |i| Signal::Next(start + i)),
            ))
        })
    }
}
