// Copyright 2026 The rheo authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::iter;
use futures::StreamExt;
use rheo_core::{RheoError, Signal};
use rheo_stream_time::{DelayElementsExt, DelaySubscriptionExt};
use std::time::Duration;
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn test_delay_elements_preserves_values_and_order() {
    // Arrange
    let source = iter(vec![Signal::Next(1), Signal::Next(2), Signal::Next(3)]);

    // Act
    let result: Vec<_> = source
        .delay_elements(Duration::from_millis(100))
        .map(Signal::unwrap)
        .collect()
        .await;

    // Assert
    assert_eq!(result, vec![1, 2, 3]);
}

#[tokio::test(start_paused = true)]
async fn test_delay_elements_paces_an_immediate_source() {
    // Arrange
    let source = iter(vec![Signal::Next(1), Signal::Next(2), Signal::Next(3)]);
    let start = Instant::now();

    // Act: record the virtual arrival time of each value
    let stamped: Vec<_> = source
        .delay_elements(Duration::from_millis(100))
        .map(|s| (s.unwrap(), start.elapsed()))
        .collect()
        .await;

    // Assert: one value per 100ms tick
    assert_eq!(stamped.len(), 3);
    assert_eq!(stamped[0], (1, Duration::from_millis(100)));
    assert_eq!(stamped[1], (2, Duration::from_millis(200)));
    assert_eq!(stamped[2], (3, Duration::from_millis(300)));
}

#[tokio::test(start_paused = true)]
async fn test_delay_elements_passes_errors_through() {
    // Arrange
    let source = iter(vec![
        Signal::Next(1),
        Signal::Error(RheoError::computation("boom")),
    ]);

    // Act
    let result: Vec<_> = source.delay_elements(Duration::from_millis(100)).collect().await;

    // Assert: the value is delayed, the error then terminates
    assert_eq!(result.len(), 2);
    assert_eq!(result[0], Signal::Next(1));
    assert!(result[1].is_error());
}

#[tokio::test(start_paused = true)]
async fn test_delay_subscription_defers_the_first_poll() {
    // Arrange: a cold source that records when it starts producing
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    let started = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&started);
    let source = iter(vec![1, 2, 3]).map(move |v| {
        flag.store(true, Ordering::SeqCst);
        Signal::Next(v)
    });

    let delayed = source.delay_subscription(Duration::from_millis(250));
    tokio::pin!(delayed);

    // Act: a poll inside the delay window must not reach the source
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(futures::poll!(delayed.next()).is_pending());
    assert!(!started.load(Ordering::SeqCst));

    let result: Vec<_> = delayed.map(Signal::unwrap).collect().await;

    // Assert
    assert!(started.load(Ordering::SeqCst));
    assert_eq!(result, vec![1, 2, 3]);
}

#[tokio::test(start_paused = true)]
async fn test_delay_subscription_shifts_emission_time() {
    // Arrange
    let source = iter(vec![Signal::Next("ready")]);
    let start = Instant::now();

    // Act
    let result: Vec<_> = source
        .delay_subscription(Duration::from_millis(300))
        .map(|s| (s.unwrap(), start.elapsed()))
        .collect()
        .await;

    // Assert
    assert_eq!(result, vec![("ready", Duration::from_millis(300))]);
}
