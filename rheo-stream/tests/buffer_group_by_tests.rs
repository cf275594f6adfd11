// Copyright 2026 The rheo authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::iter;
use futures::StreamExt;
use rheo_core::{RheoError, Signal};
use rheo_stream::{BufferCountExt, GroupByCollectExt};

fn values<T>(items: Vec<T>) -> impl futures::Stream<Item = Signal<T>> + Send
where
    T: Send + 'static,
{
    iter(items.into_iter().map(Signal::Next))
}

#[tokio::test]
async fn test_buffer_count_exact_batches() {
    let result: Vec<_> = values((1..=6).collect())
        .buffer_count(3)
        .map(Signal::unwrap)
        .collect()
        .await;

    assert_eq!(result, vec![vec![1, 2, 3], vec![4, 5, 6]]);
}

#[tokio::test]
async fn test_buffer_count_short_final_batch() {
    let result: Vec<_> = values((1..=10).collect())
        .buffer_count(4)
        .map(Signal::unwrap)
        .collect()
        .await;

    assert_eq!(result, vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8], vec![9, 10]]);
}

#[tokio::test]
async fn test_buffer_count_empty_source_emits_nothing() {
    let result: Vec<_> = values(Vec::<i32>::new())
        .buffer_count(3)
        .collect()
        .await;

    assert!(result.is_empty());
}

#[tokio::test]
async fn test_buffer_count_error_discards_partial_batch() {
    // Arrange: two values accumulated, then the source fails
    let source = iter(vec![
        Signal::Next(1),
        Signal::Next(2),
        Signal::Error(RheoError::upstream("source failed")),
    ]);

    // Act
    let result: Vec<_> = source.buffer_count(3).collect().await;

    // Assert: the half-filled batch is gone, only the error surfaces
    assert_eq!(result.len(), 1);
    assert!(result[0].is_error());
}

#[tokio::test]
#[should_panic(expected = "buffer size must be positive")]
async fn test_buffer_count_zero_size_panics() {
    let _ = values(vec![1]).buffer_count(0);
}

#[tokio::test]
async fn test_group_by_collect_buckets_in_first_occurrence_order() {
    let result: Vec<_> = values((1..=10).collect())
        .group_by_collect(|v| v % 3)
        .map(Signal::unwrap)
        .collect()
        .await;

    assert_eq!(
        result,
        vec![(1, vec![1, 4, 7, 10]), (2, vec![2, 5, 8]), (0, vec![3, 6, 9])]
    );
}

#[tokio::test]
async fn test_group_by_collect_single_bucket() {
    let result: Vec<_> = values(vec![2, 4, 6])
        .group_by_collect(|_| "even")
        .map(Signal::unwrap)
        .collect()
        .await;

    assert_eq!(result, vec![("even", vec![2, 4, 6])]);
}

#[tokio::test]
async fn test_group_by_collect_empty_source() {
    let result: Vec<_> = values(Vec::<i32>::new())
        .group_by_collect(|v| *v)
        .collect()
        .await;

    assert!(result.is_empty());
}

#[tokio::test]
async fn test_group_by_collect_error_discards_buckets() {
    // Arrange
    let source = iter(vec![
        Signal::Next(1),
        Signal::Next(2),
        Signal::Error(RheoError::computation("key extraction aborted")),
    ]);

    // Act
    let result: Vec<_> = source.group_by_collect(|v| v % 2).collect().await;

    // Assert: no buckets are flushed once the source errors
    assert_eq!(result.len(), 1);
    assert!(result[0].is_error());
}
