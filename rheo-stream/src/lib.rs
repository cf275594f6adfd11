// Copyright 2026 The rheo authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Operator layer for rheo sequences.
//!
//! Every operator is an extension trait over `Stream<Item = Signal<T>>`,
//! one operator per module, composable by chaining. A sequence is such a
//! stream: zero or more `Signal::Next` values followed by either a
//! `Signal::Error` or the end of the stream (completion).
//!
//! # Operator categories
//!
//! ### Transformation
//!
//! - [`map_values`](MapValuesExt::map_values) / [`try_map_values`](MapValuesExt::try_map_values) -
//!   pure (or fallible) per-element mapping, order preserving
//! - [`filter_values`](FilterValuesExt::filter_values) - drops non-matching elements silently
//! - [`flat_map_values`](FlatMapValuesExt::flat_map_values) - concurrent inner sequences, order not guaranteed
//! - [`concat_map_values`](FlatMapValuesExt::concat_map_values) - serialized inner sequences, input order
//! - [`buffer_count`](BufferCountExt::buffer_count) - fixed-size batches, short final batch
//! - [`distinct`](DistinctExt::distinct) - per-subscription deduplication
//! - [`take_items`](TakeItemsExt::take_items) / [`skip_items`](SkipItemsExt::skip_items)
//! - [`take_while_values`](TakeWhileValuesExt::take_while_values)
//! - [`start_with`](StartWithExt::start_with) - prepends immediate values
//! - [`group_by_collect`](GroupByCollectExt::group_by_collect) - buckets by key, emitted at completion
//!
//! ### Combination
//!
//! - [`zip_with`](ZipExt::zip_with) - positional pairing, ends at the shortest source
//! - [`merge_with`](MergeWithExt::merge_with) - arrival-order interleave
//! - [`concat_with`](ConcatWithExt::concat_with) - strictly sequential sources
//! - [`combine_latest`](CombineLatestExt::combine_latest) - recombines latest values once both sides emitted
//!
//! ### Error recovery
//!
//! - [`on_error_return`](OnErrorExt::on_error_return) - fixed substitute value, then complete
//! - [`on_error_resume`](OnErrorExt::on_error_resume) - substitute sequence chosen from the error
//!
//! These two are the only operators that intercept errors; everywhere else
//! an error terminates the sequence and no further signals are delivered
//! (enforced by [`fuse_on_error`](FuseOnErrorExt::fuse_on_error)).

use futures::Stream;
use rheo_core::Signal;
use std::pin::Pin;

pub mod buffer;
pub mod combine_latest;
pub mod concat;
pub mod distinct;
pub mod filter;
pub mod flat_map;
pub mod fuse_on_error;
pub mod group_by;
pub mod log;
pub mod map;
pub mod merge;
pub mod on_error;
pub mod skip;
pub mod start_with;
pub mod take;
pub mod take_while;
pub mod zip;

pub use self::buffer::BufferCountExt;
pub use self::combine_latest::CombineLatestExt;
pub use self::concat::ConcatWithExt;
pub use self::distinct::DistinctExt;
pub use self::filter::FilterValuesExt;
pub use self::flat_map::FlatMapValuesExt;
pub use self::fuse_on_error::FuseOnErrorExt;
pub use self::group_by::GroupByCollectExt;
pub use self::log::LogSignalsExt;
pub use self::map::MapValuesExt;
pub use self::merge::MergeWithExt;
pub use self::on_error::OnErrorExt;
pub use self::skip::SkipItemsExt;
pub use self::start_with::StartWithExt;
pub use self::take::TakeItemsExt;
pub use self::take_while::TakeWhileValuesExt;
pub use self::zip::ZipExt;

/// A boxed, sendable signal stream: the erased form of a sequence.
///
/// Used wherever a stream must be named (inner sequences of `flat_map`,
/// fallback sequences of `on_error_resume`, subscription sources).
pub type BoxSignalStream<T> = Pin<Box<dyn Stream<Item = Signal<T>> + Send>>;
