// Copyright 2026 The rheo authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Merge operator - interleaves two sources by arrival time.
//!
//! Whichever side produces next is emitted next; no ordering is imposed
//! beyond arrival. The merged sequence completes when both sides have
//! completed, and terminates early if either side errors.

use crate::fuse_on_error::{FuseOnError, FuseOnErrorExt};
use futures::stream::{select, Select};
use futures::Stream;
use rheo_core::Signal;

/// Extension trait providing the `merge_with` operator for signal streams.
pub trait MergeWithExt<T>: Stream<Item = Signal<T>> + Sized {
    /// Interleaves `other` with this sequence by arrival time.
    fn merge_with<S2>(self, other: S2) -> FuseOnError<Select<Self, S2>>
    where
        S2: Stream<Item = Signal<T>>;
}

impl<S, T> MergeWithExt<T> for S
where
    S: Stream<Item = Signal<T>> + Sized,
{
    fn merge_with<S2>(self, other: S2) -> FuseOnError<Select<Self, S2>>
    where
        S2: Stream<Item = Signal<T>>,
    {
        select(self, other).fuse_on_error()
    }
}
