// Copyright 2026 The rheo authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Group-by operator - buckets values by key, emitted at completion.
//!
//! Values are collected into per-key buckets held by this subscription
//! alone (never shared across subscriptions). When the source completes,
//! one `(key, values)` pair is emitted per bucket, in first-occurrence
//! order of the keys. An error discards all buckets and terminates.

use futures::Stream;
use pin_project::pin_project;
use rheo_core::Signal;
use std::mem;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::vec::IntoIter;

/// Stream produced by [`GroupByCollectExt::group_by_collect`].
#[pin_project]
pub struct GroupByCollect<S, F, K, T> {
    #[pin]
    stream: S,
    key_fn: F,
    groups: Vec<(K, Vec<T>)>,
    draining: Option<IntoIter<(K, Vec<T>)>>,
    done: bool,
}

impl<S, F, K, T> Stream for GroupByCollect<S, F, K, T>
where
    S: Stream<Item = Signal<T>>,
    F: FnMut(&T) -> K,
    K: PartialEq,
{
    type Item = Signal<(K, Vec<T>)>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if *this.done {
            return Poll::Ready(None);
        }

        if let Some(drain) = this.draining.as_mut() {
            return match drain.next() {
                Some(group) => Poll::Ready(Some(Signal::Next(group))),
                None => {
                    *this.done = true;
                    Poll::Ready(None)
                }
            };
        }

        loop {
            match this.stream.as_mut().poll_next(cx) {
                Poll::Ready(Some(Signal::Next(v))) => {
                    let key = (this.key_fn)(&v);
                    match this.groups.iter_mut().find(|(k, _)| *k == key) {
                        Some((_, bucket)) => bucket.push(v),
                        None => this.groups.push((key, vec![v])),
                    }
                }
                Poll::Ready(Some(Signal::Error(e))) => {
                    *this.done = true;
                    this.groups.clear();
                    return Poll::Ready(Some(Signal::Error(e)));
                }
                Poll::Ready(None) => {
                    let mut drain = mem::take(this.groups).into_iter();
                    let first = drain.next();
                    *this.draining = Some(drain);
                    return match first {
                        Some(group) => Poll::Ready(Some(Signal::Next(group))),
                        None => {
                            *this.done = true;
                            Poll::Ready(None)
                        }
                    };
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

/// Extension trait providing the `group_by_collect` operator for signal streams.
pub trait GroupByCollectExt<T>: Stream<Item = Signal<T>> + Sized {
    /// Buckets values by `key_fn`, emitting one `(key, values)` pair per
    /// bucket once the source completes, in first-occurrence key order.
    fn group_by_collect<K, F>(self, key_fn: F) -> GroupByCollect<Self, F, K, T>
    where
        F: FnMut(&T) -> K,
        K: PartialEq,
    {
        GroupByCollect {
            stream: self,
            key_fn,
            groups: Vec::new(),
            draining: None,
            done: false,
        }
    }
}

impl<S, T> GroupByCollectExt<T> for S where S: Stream<Item = Signal<T>> + Sized {}
