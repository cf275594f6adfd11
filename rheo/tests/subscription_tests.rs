// Copyright 2026 The rheo authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rheo::{Flux, RheoError, SubscriptionState};
use rheo_test_utils::StepVerifier;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn test_lifecycle_ends_in_completed() {
    let mut verifier = StepVerifier::create(&Flux::range(1, 2));

    verifier.expect_next(1).await;
    verifier.expect_next(2).await;
    verifier.verify_complete().await;
}

#[tokio::test(start_paused = true)]
async fn test_lifecycle_ends_in_errored() {
    let flux = Flux::<i32>::error(RheoError::upstream("dead"));
    let mut verifier = StepVerifier::create(&flux);

    verifier.expect_error_kind(rheo::ErrorKind::Upstream).await;
    verifier.then_await(Duration::from_millis(10)).await;
    assert_eq!(verifier.subscription().state(), SubscriptionState::Errored);
}

#[tokio::test(start_paused = true)]
async fn test_cancel_stops_delivery() {
    // Arrange: an endless paced source
    let flux = Flux::from_iter(1..).delay_elements(Duration::from_millis(100));
    let mut verifier = StepVerifier::create(&flux);

    verifier.expect_next(1).await;
    verifier.expect_next(2).await;

    // Act
    verifier.subscription().cancel();
    verifier.then_await(Duration::from_millis(10)).await;

    // Assert: no further signals, state is Cancelled
    assert_eq!(
        verifier.subscription().state(),
        SubscriptionState::Cancelled
    );
    verifier.expect_no_event(Duration::from_millis(500)).await;
}

#[tokio::test(start_paused = true)]
async fn test_bounded_demand_steps_through_range() {
    let mut verifier = StepVerifier::with_demand(&Flux::range(1, 10), 1);

    verifier.expect_next(1).await;
    verifier.expect_no_event(Duration::from_millis(50)).await;

    verifier.then_request(2);
    verifier.expect_next(2).await;
    verifier.expect_next(3).await;
    verifier.expect_no_event(Duration::from_millis(50)).await;

    verifier.then_request(7);
    verifier.expect_next_count(7).await;
    verifier.verify_complete().await;
}

#[tokio::test(start_paused = true)]
async fn test_request_after_terminal_is_a_no_op() {
    let mut verifier = StepVerifier::with_demand(&Flux::range(1, 1), 1);

    verifier.expect_next(1).await;
    verifier.then_await(Duration::from_millis(10)).await;
    assert_eq!(
        verifier.subscription().state(),
        SubscriptionState::Completed
    );

    // The terminal state absorbs further demand and cancellation
    verifier.then_request(5);
    verifier.subscription().cancel();
    assert_eq!(
        verifier.subscription().state(),
        SubscriptionState::Completed
    );
    verifier.verify_complete().await;
}

#[tokio::test(start_paused = true)]
async fn test_no_signal_after_terminal() {
    // Next-count plus the terminal event equals everything observable
    let deliveries = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&deliveries);
    let (done_tx, done_rx) = tokio::sync::oneshot::channel();
    let mut done_tx = Some(done_tx);

    Flux::range(1, 4).subscribe(
        move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        },
        |_| {},
        move || {
            if let Some(tx) = done_tx.take() {
                let _ = tx.send(());
            }
        },
    );

    done_rx.await.unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(deliveries.load(Ordering::SeqCst), 4);
}

#[tokio::test(start_paused = true)]
async fn test_cancel_during_bounded_stall() {
    let mut verifier = StepVerifier::with_demand(&Flux::range(1, 10), 1);

    verifier.expect_next(1).await;
    verifier.subscription().cancel();
    verifier.then_await(Duration::from_millis(10)).await;

    assert_eq!(
        verifier.subscription().state(),
        SubscriptionState::Cancelled
    );
    verifier.expect_no_event(Duration::from_millis(100)).await;
}
