// Copyright 2026 The rheo authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rheo::{ErrorKind, Flux, Mono, RheoError};
use rheo_test_utils::StepVerifier;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[tokio::test]
async fn test_just_replays_the_same_values_to_every_subscriber() {
    let flux = Flux::just(vec!["Apple", "Banana", "Cherry"]);

    for _ in 0..2 {
        let mut verifier = StepVerifier::create(&flux);
        verifier.expect_next("Apple").await;
        verifier.expect_next("Banana").await;
        verifier.expect_next("Cherry").await;
        verifier.verify_complete().await;
    }
}

#[tokio::test]
async fn test_from_iter_re_iterates_per_subscription() {
    let flux = Flux::from_iter(1..=3);

    for _ in 0..2 {
        let mut verifier = StepVerifier::create(&flux);
        verifier.expect_next(1).await;
        verifier.expect_next(2).await;
        verifier.expect_next(3).await;
        verifier.verify_complete().await;
    }
}

#[tokio::test]
async fn test_range_emits_consecutive_integers() {
    let mut verifier = StepVerifier::create(&Flux::range(5, 3));

    verifier.expect_next(5).await;
    verifier.expect_next(6).await;
    verifier.expect_next(7).await;
    verifier.verify_complete().await;
}

#[tokio::test]
async fn test_empty_completes_without_values() {
    let verifier = StepVerifier::create(&Flux::<i32>::empty());
    verifier.verify_complete().await;
}

#[tokio::test]
async fn test_error_flux_terminates_immediately() {
    let flux = Flux::<i32>::error(RheoError::computation("assembly refused"));
    let mut verifier = StepVerifier::create(&flux);

    let error = verifier.expect_error_kind(ErrorKind::Computation).await;
    assert_eq!(error.context(), "assembly refused");
}

#[tokio::test]
async fn test_defer_builds_a_fresh_chain_per_subscription() {
    // Arrange: the deferred assembly observes a counter
    let assemblies = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&assemblies);
    let flux = Flux::defer(move || {
        let n = counter.fetch_add(1, Ordering::SeqCst) as i64;
        Flux::range(n * 10, 2)
    });

    // Act / Assert: each subscription sees its own assembly
    let mut first = StepVerifier::create(&flux);
    first.expect_next(0).await;
    first.expect_next(1).await;
    first.verify_complete().await;

    let mut second = StepVerifier::create(&flux);
    second.expect_next(10).await;
    second.expect_next(11).await;
    second.verify_complete().await;
}

#[tokio::test]
async fn test_mono_just_replays_the_captured_value() {
    let mono = Mono::just(42);

    for _ in 0..2 {
        let mut verifier = StepVerifier::create(&mono.as_flux());
        verifier.expect_next(42).await;
        verifier.verify_complete().await;
    }
}

#[tokio::test]
async fn test_mono_from_supplier_runs_once_per_subscription() {
    // Arrange: a lazy supplier whose result changes between subscriptions
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let mono = Mono::from_supplier(move || counter.fetch_add(1, Ordering::SeqCst));

    // Act / Assert: subscribers observe different values
    let mut first = StepVerifier::create(&mono.as_flux());
    first.expect_next(0).await;
    first.verify_complete().await;

    let mut second = StepVerifier::create(&mono.as_flux());
    second.expect_next(1).await;
    second.verify_complete().await;

    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_mono_empty_and_error() {
    StepVerifier::create(&Mono::<i32>::empty().as_flux())
        .verify_complete()
        .await;

    let error = StepVerifier::create(&Mono::<i32>::error(RheoError::upstream("nothing")).as_flux())
        .verify_error()
        .await;
    assert_eq!(error.kind(), ErrorKind::Upstream);
}

#[tokio::test]
async fn test_mono_defer_is_lazy() {
    let assemblies = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&assemblies);
    let mono = Mono::defer(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        Mono::just("built")
    });

    // Nothing runs at assembly time
    assert_eq!(assemblies.load(Ordering::SeqCst), 0);

    let mut verifier = StepVerifier::create(&mono.as_flux());
    verifier.expect_next("built").await;
    verifier.verify_complete().await;
    assert_eq!(assemblies.load(Ordering::SeqCst), 1);
}
