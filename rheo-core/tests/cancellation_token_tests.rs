// Copyright 2026 The rheo authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rheo_core::CancellationToken;
use std::time::Duration;

#[test]
fn test_token_starts_uncancelled() {
    let token = CancellationToken::new();
    assert!(!token.is_cancelled());
}

#[test]
fn test_cancel_is_visible_to_clones() {
    let token = CancellationToken::new();
    let clone = token.clone();

    token.cancel();

    assert!(token.is_cancelled());
    assert!(clone.is_cancelled());
}

#[test]
fn test_cancel_is_idempotent() {
    let token = CancellationToken::new();

    token.cancel();
    token.cancel();

    assert!(token.is_cancelled());
}

#[tokio::test]
async fn test_cancelled_resolves_immediately_when_already_cancelled() {
    let token = CancellationToken::new();
    token.cancel();

    // Must not hang
    tokio::time::timeout(Duration::from_secs(1), token.cancelled())
        .await
        .expect("cancelled() should resolve immediately");
}

#[tokio::test]
async fn test_cancelled_wakes_waiter() -> anyhow::Result<()> {
    let token = CancellationToken::new();
    let waiter = token.clone();

    let handle = tokio::spawn(async move {
        waiter.cancelled().await;
        true
    });

    token.cancel();

    assert!(tokio::time::timeout(Duration::from_secs(1), handle).await??);
    Ok(())
}

#[tokio::test]
async fn test_cancelled_wakes_multiple_waiters() -> anyhow::Result<()> {
    let token = CancellationToken::new();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let waiter = token.clone();
            tokio::spawn(async move { waiter.cancelled().await })
        })
        .collect();

    token.cancel();

    for handle in handles {
        tokio::time::timeout(Duration::from_secs(1), handle).await??;
    }
    Ok(())
}
