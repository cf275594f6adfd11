// Copyright 2026 The rheo authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Distinct operator - drops values already seen in this subscription.
//!
//! The seen-set lives inside the operator closure, so it is created per
//! stream instance and owned exclusively by that subscription. It is never
//! shared across subscriptions: two subscribers to the same source each
//! dedup independently.

use futures::future::ready;
use futures::{Stream, StreamExt};
use rheo_core::Signal;
use std::collections::HashSet;
use std::hash::Hash;

/// Extension trait providing the `distinct` operator for signal streams.
pub trait DistinctExt<T>: Stream<Item = Signal<T>> + Sized {
    /// Emits each value at most once, dropping later duplicates.
    fn distinct(self) -> impl Stream<Item = Signal<T>> + Send
    where
        Self: Send,
        T: Eq + Hash + Clone + Send;
}

impl<S, T> DistinctExt<T> for S
where
    S: Stream<Item = Signal<T>> + Sized,
{
    fn distinct(self) -> impl Stream<Item = Signal<T>> + Send
    where
        Self: Send,
        T: Eq + Hash + Clone + Send,
    {
        let mut seen = HashSet::new();
        self.filter(move |signal| {
            ready(match signal {
                Signal::Next(v) => seen.insert(v.clone()),
                Signal::Error(_) => true,
            })
        })
    }
}
