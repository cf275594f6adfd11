// Copyright 2026 The rheo authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Concat operator - runs sources strictly sequentially.
//!
//! The second source is not polled until the first has completed. If the
//! first terminates with an error, the fuse stops delivery at that error
//! and the second source is never activated.

use crate::fuse_on_error::{FuseOnError, FuseOnErrorExt};
use futures::stream::Chain;
use futures::{Stream, StreamExt};
use rheo_core::Signal;

/// Extension trait providing the `concat_with` operator for signal streams.
pub trait ConcatWithExt<T>: Stream<Item = Signal<T>> + Sized {
    /// Emits everything from this sequence, then everything from `other`.
    fn concat_with<S2>(self, other: S2) -> FuseOnError<Chain<Self, S2>>
    where
        S2: Stream<Item = Signal<T>>;
}

impl<S, T> ConcatWithExt<T> for S
where
    S: Stream<Item = Signal<T>> + Sized,
{
    fn concat_with<S2>(self, other: S2) -> FuseOnError<Chain<Self, S2>>
    where
        S2: Stream<Item = Signal<T>>,
    {
        self.chain(other).fuse_on_error()
    }
}
