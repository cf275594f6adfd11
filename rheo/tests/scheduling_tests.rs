// Copyright 2026 The rheo authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rheo::{Flux, Scheduler};
use rheo_test_utils::StepVerifier;

#[tokio::test]
async fn test_subscribe_on_runs_the_chain_on_the_scheduler() {
    let scheduler = Scheduler::new("producer");
    let flux = Flux::range(1, 10)
        .filter(|v| v % 2 == 0)
        .subscribe_on(scheduler.clone());
    let mut verifier = StepVerifier::create(&flux);

    for expected in [2, 4, 6, 8, 10] {
        verifier.expect_next(expected).await;
    }
    verifier.verify_complete().await;

    // The producer loop was dispatched onto the named context
    assert_eq!(scheduler.dispatch_count(), 1);
}

#[tokio::test]
async fn test_first_subscribe_on_wins() {
    let first = Scheduler::new("first");
    let second = Scheduler::new("second");
    let flux = Flux::range(1, 3)
        .subscribe_on(first.clone())
        .map(|v| v * 2)
        .subscribe_on(second.clone());
    let mut verifier = StepVerifier::create(&flux);

    verifier.expect_next(2).await;
    verifier.expect_next(4).await;
    verifier.expect_next(6).await;
    verifier.verify_complete().await;

    assert_eq!(first.dispatch_count(), 1);
    assert_eq!(second.dispatch_count(), 0);
}

#[tokio::test]
async fn test_publish_on_switches_context_mid_chain() {
    let scheduler = Scheduler::new("pipeline");
    let flux = Flux::range(1, 10)
        .filter(|v| v % 2 == 0)
        .publish_on(scheduler.clone())
        .map(|v| v + 1);
    let mut verifier = StepVerifier::create(&flux);

    for expected in [3, 5, 7, 9, 11] {
        verifier.expect_next(expected).await;
    }
    verifier.verify_complete().await;

    assert_eq!(scheduler.dispatch_count(), 1);
}

#[tokio::test]
async fn test_publish_on_may_appear_several_times() {
    let upstream = Scheduler::new("upstream");
    let downstream = Scheduler::new("downstream");
    let flux = Flux::range(1, 3)
        .publish_on(upstream.clone())
        .map(|v| v * 10)
        .publish_on(downstream.clone());
    let mut verifier = StepVerifier::create(&flux);

    verifier.expect_next(10).await;
    verifier.expect_next(20).await;
    verifier.expect_next(30).await;
    verifier.verify_complete().await;

    assert_eq!(upstream.dispatch_count(), 1);
    assert_eq!(downstream.dispatch_count(), 1);
}

#[tokio::test]
async fn test_publish_on_dispatches_once_per_subscription() {
    let scheduler = Scheduler::new("counted");
    let flux = Flux::range(1, 2).publish_on(scheduler.clone());

    for _ in 0..3 {
        let mut verifier = StepVerifier::create(&flux);
        verifier.expect_next(1).await;
        verifier.expect_next(2).await;
        verifier.verify_complete().await;
    }

    assert_eq!(scheduler.dispatch_count(), 3);
}
